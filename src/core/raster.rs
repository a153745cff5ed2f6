//! In-memory raster shared by every pipeline stage.
use image::{DynamicImage, GrayImage};

use crate::types::ColorMode;

/// Decoded or derived raster. Stages never mutate an `Image`; each
/// transformation hands back a fresh value.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    inner: DynamicImage,
}

impl Image {
    pub fn from_dynamic(inner: DynamicImage) -> Self {
        Self { inner }
    }

    pub fn from_gray(gray: GrayImage) -> Self {
        Self {
            inner: DynamicImage::ImageLuma8(gray),
        }
    }

    pub fn width(&self) -> usize {
        self.inner.width() as usize
    }

    pub fn height(&self) -> usize {
        self.inner.height() as usize
    }

    /// `(width, height)` in pixels
    pub fn size(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    pub fn mode(&self) -> ColorMode {
        let color = self.inner.color();
        match (color.has_color(), color.has_alpha()) {
            (false, false) => ColorMode::Luma,
            (false, true) => ColorMode::LumaAlpha,
            (true, false) => ColorMode::Rgb,
            (true, true) => ColorMode::Rgba,
        }
    }

    /// Raw sample bytes in the decoder's native layout.
    pub fn as_bytes(&self) -> &[u8] {
        self.inner.as_bytes()
    }

    pub fn as_dynamic(&self) -> &DynamicImage {
        &self.inner
    }

    pub fn into_dynamic(self) -> DynamicImage {
        self.inner
    }

    /// 8-bit interleaved samples in this image's own mode. Wider samples are
    /// narrowed; writers use `as_dynamic` to keep full depth.
    pub fn to_u8_samples(&self) -> Vec<u8> {
        match self.mode() {
            ColorMode::Luma => self.inner.to_luma8().into_raw(),
            ColorMode::LumaAlpha => self.inner.to_luma_alpha8().into_raw(),
            ColorMode::Rgb => self.inner.to_rgb8().into_raw(),
            ColorMode::Rgba => self.inner.to_rgba8().into_raw(),
        }
    }
}

impl From<DynamicImage> for Image {
    fn from(inner: DynamicImage) -> Self {
        Self::from_dynamic(inner)
    }
}
