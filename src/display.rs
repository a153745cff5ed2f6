//! Presentation seam. A `Viewer` shows an image with a caption and returns
//! once the user is done with it. The window-backed implementation lives in
//! `gui`; `HeadlessViewer` is used when no display is wanted.
use tracing::info;

use crate::core::raster::Image;
use crate::error::Result;

pub trait Viewer {
    /// Show `image` captioned with `title`. Blocks until dismissed.
    fn show(&mut self, image: &Image, title: &str) -> Result<()>;
}

/// Records what would have been displayed instead of opening a window.
#[derive(Debug, Default, Clone)]
pub struct HeadlessViewer {
    pub shown: Vec<String>,
}

impl Viewer for HeadlessViewer {
    fn show(&mut self, image: &Image, title: &str) -> Result<()> {
        info!(
            "Display skipped for {:?} ({}x{} {})",
            title,
            image.width(),
            image.height(),
            image.mode()
        );
        self.shown.push(title.to_string());
        Ok(())
    }
}

/// Screen-ready RGBA8 pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayBuffer {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

/// Map an image to RGBA for presentation. Single-channel images go through a
/// gray ramp stretched over their own min..max; everything else keeps its
/// natural colors.
pub fn render_rgba(image: &Image) -> DisplayBuffer {
    let (width, height) = image.size();
    let rgba = if image.mode().is_single_channel() {
        let gray = image.to_u8_samples();
        let lo = gray.iter().copied().min().unwrap_or(0);
        let hi = gray.iter().copied().max().unwrap_or(0);
        let span = (hi - lo) as u32;
        gray.iter()
            .flat_map(|&v| {
                let level = if span == 0 {
                    0
                } else {
                    (((v - lo) as u32 * 255 + span / 2) / span) as u8
                };
                [level, level, level, 255]
            })
            .collect()
    } else {
        image.as_dynamic().to_rgba8().into_raw()
    };

    DisplayBuffer {
        width,
        height,
        rgba,
    }
}
