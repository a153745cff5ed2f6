use image::DynamicImage;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tiff::encoder::{TiffEncoder, TiffValue, colortype};

use crate::core::raster::Image;
use crate::error::{Error, Result};

pub fn write_tiff_u8(output: &Path, cols: u32, rows: u32, data: &[u8]) -> Result<()> {
    write_with::<colortype::Gray8>(output, cols, rows, data)
}

pub fn write_tiff_u16(output: &Path, cols: u32, rows: u32, data: &[u16]) -> Result<()> {
    write_with::<colortype::Gray16>(output, cols, rows, data)
}

pub fn write_tiff_rgb8(output: &Path, cols: u32, rows: u32, rgb_data: &[u8]) -> Result<()> {
    write_with::<colortype::RGB8>(output, cols, rows, rgb_data)
}

pub fn write_tiff_rgb16(output: &Path, cols: u32, rows: u32, rgb_data: &[u16]) -> Result<()> {
    write_with::<colortype::RGB16>(output, cols, rows, rgb_data)
}

pub fn write_tiff_rgba8(output: &Path, cols: u32, rows: u32, rgba_data: &[u8]) -> Result<()> {
    write_with::<colortype::RGBA8>(output, cols, rows, rgba_data)
}

pub fn write_tiff_rgba16(output: &Path, cols: u32, rows: u32, rgba_data: &[u16]) -> Result<()> {
    write_with::<colortype::RGBA16>(output, cols, rows, rgba_data)
}

/// Write the image's samples as they are, at their own bit depth.
///
/// Baseline TIFF has no gray+alpha photometric, so `LA` images are refused
/// rather than stored under a different mode. Nothing is created in that case.
pub fn write_tiff(output: &Path, image: &Image) -> Result<()> {
    let (cols, rows) = (image.width() as u32, image.height() as u32);
    match image.as_dynamic() {
        DynamicImage::ImageLuma8(buf) => write_tiff_u8(output, cols, rows, buf.as_raw()),
        DynamicImage::ImageLuma16(buf) => write_tiff_u16(output, cols, rows, buf.as_raw()),
        DynamicImage::ImageRgb8(buf) => write_tiff_rgb8(output, cols, rows, buf.as_raw()),
        DynamicImage::ImageRgb16(buf) => write_tiff_rgb16(output, cols, rows, buf.as_raw()),
        DynamicImage::ImageRgba8(buf) => write_tiff_rgba8(output, cols, rows, buf.as_raw()),
        DynamicImage::ImageRgba16(buf) => write_tiff_rgba16(output, cols, rows, buf.as_raw()),
        DynamicImage::ImageRgb32F(buf) => {
            write_with::<colortype::RGB32Float>(output, cols, rows, buf.as_raw())
        }
        DynamicImage::ImageRgba32F(buf) => {
            write_with::<colortype::RGBA32Float>(output, cols, rows, buf.as_raw())
        }
        _ => Err(Error::InvalidArgument {
            arg: "format",
            value: format!("TIFF cannot store {} images", image.mode()),
        }),
    }
}

fn write_with<C>(output: &Path, cols: u32, rows: u32, data: &[C::Inner]) -> Result<()>
where
    C: colortype::ColorType,
    [C::Inner]: TiffValue,
{
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    {
        let mut encoder = TiffEncoder::new(&mut writer)?;
        encoder.write_image::<C>(cols, rows, data)?;
    }
    writer.flush()?;
    Ok(())
}
