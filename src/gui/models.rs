use eframe::{
    NativeOptions,
    egui::{self, ViewportBuilder},
};
use tracing::info;

use crate::core::raster::Image;
use crate::display::{DisplayBuffer, Viewer, render_rgba};
use crate::error::{Error, Result};

/// Default window size in logical pixels (an 8x8 inch figure at 100 dpi)
pub const DEFAULT_WINDOW_SIZE: [f32; 2] = [800.0, 800.0];

/// State of one preview window: the caption, the pixels to upload and the
/// texture once egui has them.
pub struct ImageWindow {
    pub title: String,
    pub buffer: DisplayBuffer,
    pub texture: Option<egui::TextureHandle>,
}

impl ImageWindow {
    pub fn new(image: &Image, title: &str) -> Self {
        Self {
            title: title.to_string(),
            buffer: render_rgba(image),
            texture: None,
        }
    }

    pub fn color_image(&self) -> egui::ColorImage {
        egui::ColorImage::from_rgba_unmultiplied(
            [self.buffer.width, self.buffer.height],
            &self.buffer.rgba,
        )
    }
}

/// Largest size with the image's aspect ratio that fits in `available`.
pub fn fit_size(image_size: (usize, usize), available: egui::Vec2) -> egui::Vec2 {
    let (w, h) = (image_size.0.max(1) as f32, image_size.1.max(1) as f32);
    let scale = (available.x / w).min(available.y / h).max(0.0);
    egui::vec2(w * scale, h * scale)
}

/// Opens a native window per `show` call and blocks until it is closed.
pub struct WindowViewer {
    pub inner_size: [f32; 2],
}

impl Default for WindowViewer {
    fn default() -> Self {
        Self {
            inner_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

impl Viewer for WindowViewer {
    fn show(&mut self, image: &Image, title: &str) -> Result<()> {
        info!("Opening window {:?}; close it to continue", title);
        let window = ImageWindow::new(image, title);

        let options = NativeOptions {
            viewport: ViewportBuilder::default()
                .with_inner_size(self.inner_size)
                .with_min_inner_size([200.0, 200.0])
                .with_title(title),
            ..Default::default()
        };

        eframe::run_native("imgprep", options, Box::new(|_cc| Ok(Box::new(window))))
            .map_err(|e| Error::Display(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    #[test]
    fn fit_keeps_aspect_ratio() {
        let size = fit_size((20, 20), egui::vec2(800.0, 600.0));
        assert_eq!(size, egui::vec2(600.0, 600.0));

        let size = fit_size((200, 100), egui::vec2(800.0, 800.0));
        assert_eq!(size, egui::vec2(800.0, 400.0));
    }

    #[test]
    fn window_color_image_matches_buffer() {
        let image = Image::from_gray(GrayImage::from_fn(4, 2, |x, _| Luma([x as u8])));
        let window = ImageWindow::new(&image, "Processed");
        let color = window.color_image();
        assert_eq!(color.size, [4, 2]);
        assert_eq!(color.pixels[0], egui::Color32::from_rgb(0, 0, 0));
        assert_eq!(color.pixels[3], egui::Color32::from_rgb(255, 255, 255));
        assert!(window.texture.is_none());
    }
}
