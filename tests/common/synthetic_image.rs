use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use std::io::Cursor;

/// Diagonal color gradient, the stand-in for a 200x200 drawing export.
pub fn gradient_rgb(width: u32, height: u32) -> DynamicImage {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            (x * 255 / width) as u8,
            (y * 255 / height) as u8,
            ((x + y) * 255 / (width + height)) as u8,
        ])
    }))
}

/// Black strokes on a transparent canvas.
pub fn strokes_rgba(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, |x, y| {
        if x.abs_diff(y) < 4 {
            Rgba([0, 0, 0, 255])
        } else {
            Rgba([0, 0, 0, 0])
        }
    }))
}

pub fn encode(image: &DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    image
        .write_to(&mut buf, format)
        .expect("encoding a synthetic image");
    buf.into_inner()
}
