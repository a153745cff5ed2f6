use crate::core::raster::Image;
use crate::error::{Error, Result};
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images};
use image::GrayImage;
use tracing::{debug, info};

pub fn resize_u8_image(
    data: &[u8],
    original_cols: usize,
    original_rows: usize,
    target_cols: usize,
    target_rows: usize,
) -> Result<Vec<u8>> {
    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();

    let src_image = images::Image::from_vec_u8(
        original_cols as u32,
        original_rows as u32,
        data.to_vec(),
        PixelType::U8,
    )?;
    let mut dst_image = images::Image::new(target_cols as u32, target_rows as u32, PixelType::U8);
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    Ok(dst_image.into_vec())
}

/// Resample a single-channel image to exactly `target_cols` x `target_rows`.
/// Aspect ratio is not preserved. An image already at the target dimensions
/// is returned untouched.
pub fn resize_luma(gray: &GrayImage, target_cols: usize, target_rows: usize) -> Result<GrayImage> {
    if target_cols == 0 || target_rows == 0 {
        return Err(Error::ZeroSize {
            size: target_cols.min(target_rows),
        });
    }

    let (cols, rows) = (gray.width() as usize, gray.height() as usize);
    if cols == 0 || rows == 0 {
        return Err(Error::ZeroSize { size: cols.min(rows) });
    }

    // If already at requested size, skip resizing
    if cols == target_cols && rows == target_rows {
        debug!("Image already {}x{}, skipping resize", cols, rows);
        return Ok(gray.clone());
    }

    info!(
        "Original size: {}x{}, New size: {}x{}",
        cols, rows, target_cols, target_rows
    );

    let resized = resize_u8_image(gray.as_raw(), cols, rows, target_cols, target_rows)?;
    GrayImage::from_raw(target_cols as u32, target_rows as u32, resized).ok_or_else(|| {
        Error::Processing(format!(
            "resized buffer does not match {}x{}",
            target_cols, target_rows
        ))
    })
}

/// Square resample of an already-luminance `Image`.
pub fn resize_to_square(image: &Image, size: usize) -> Result<Image> {
    let gray = image.as_dynamic().to_luma8();
    Ok(Image::from_gray(resize_luma(&gray, size, size)?))
}
