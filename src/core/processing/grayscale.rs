use image::{GrayImage, Luma};
use tracing::debug;

use crate::core::raster::Image;
use crate::types::ColorMode;

// ITU-R 601-2 luma weights in 16.16 fixed point; they sum to 1 << 16.
const WEIGHT_R: u32 = 19595;
const WEIGHT_G: u32 = 38470;
const WEIGHT_B: u32 = 7471;

/// Luma of one RGB sample, rounded to nearest.
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * WEIGHT_R + g as u32 * WEIGHT_G + b as u32 * WEIGHT_B + 0x8000) >> 16) as u8
}

/// Convert any image to 8-bit single-channel luminance. Alpha is dropped,
/// not composited.
pub fn convert_to_luma(image: &Image) -> Image {
    let mode = image.mode();
    debug!("Converting {} image to L", mode);

    match mode {
        ColorMode::Luma | ColorMode::LumaAlpha => Image::from_gray(image.as_dynamic().to_luma8()),
        ColorMode::Rgb | ColorMode::Rgba => {
            let rgb = image.as_dynamic().to_rgb8();
            let gray = GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
                let p = rgb.get_pixel(x, y);
                Luma([luminance(p[0], p[1], p[2])])
            });
            Image::from_gray(gray)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};

    #[test]
    fn primaries_use_601_weights() {
        assert_eq!(luminance(255, 0, 0), 76);
        assert_eq!(luminance(0, 255, 0), 150);
        assert_eq!(luminance(0, 0, 255), 29);
        assert_eq!(luminance(255, 255, 255), 255);
        assert_eq!(luminance(0, 0, 0), 0);
    }

    #[test]
    fn rgb_image_becomes_single_channel() {
        let rgb = RgbImage::from_fn(4, 2, |x, _| {
            if x % 2 == 0 {
                Rgb([255, 0, 0])
            } else {
                Rgb([0, 0, 255])
            }
        });
        let gray = convert_to_luma(&Image::from(DynamicImage::ImageRgb8(rgb)));

        assert_eq!(gray.mode(), ColorMode::Luma);
        assert_eq!(gray.size(), (4, 2));
        assert_eq!(&gray.as_bytes()[..4], &[76, 29, 76, 29]);
    }

    #[test]
    fn alpha_is_ignored() {
        let rgba = RgbaImage::from_pixel(2, 2, Rgba([0, 255, 0, 0]));
        let gray = convert_to_luma(&Image::from(DynamicImage::ImageRgba8(rgba)));
        assert!(gray.as_bytes().iter().all(|&v| v == 150));
    }

    #[test]
    fn luma_input_is_unchanged() {
        let src = Image::from_gray(GrayImage::from_fn(3, 3, |x, y| Luma([(x * 10 + y) as u8])));
        assert_eq!(convert_to_luma(&src), src);
    }
}
