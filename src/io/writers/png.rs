use image::{DynamicImage, ImageFormat};
use std::path::Path;

use crate::core::raster::Image;
use crate::error::{Error, Result};

pub fn write_png(output: &Path, image: &Image) -> Result<()> {
    let dynamic = image.as_dynamic();
    // PNG has no float samples; widen those to 16-bit first.
    let written = match dynamic {
        DynamicImage::ImageRgb32F(_) => {
            DynamicImage::ImageRgb16(dynamic.to_rgb16()).save_with_format(output, ImageFormat::Png)
        }
        DynamicImage::ImageRgba32F(_) => {
            DynamicImage::ImageRgba16(dynamic.to_rgba16()).save_with_format(output, ImageFormat::Png)
        }
        _ => dynamic.save_with_format(output, ImageFormat::Png),
    };

    written.map_err(|e| match e {
        image::ImageError::IoError(io) => Error::Io(io),
        other => Error::Encode(other),
    })
}
