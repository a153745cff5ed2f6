use tracing::info;

use crate::core::processing::grayscale::convert_to_luma;
use crate::core::processing::resize::resize_to_square;
use crate::core::raster::Image;
use crate::error::{Error, Result};
use crate::types::TARGET_SIZE;

/// Luminance conversion followed by a Lanczos3 resample to `size` x `size`.
pub fn process_image_pipeline(image: &Image, size: usize) -> Result<Image> {
    if size == 0 {
        return Err(Error::ZeroSize { size });
    }

    info!(
        "Processing {}x{} {} image -> {}x{} L",
        image.width(),
        image.height(),
        image.mode(),
        size,
        size
    );

    let gray = convert_to_luma(image);
    resize_to_square(&gray, size)
}

/// Pipeline at the default 28x28 resolution.
pub fn process_image_default(image: &Image) -> Result<Image> {
    process_image_pipeline(image, TARGET_SIZE)
}
