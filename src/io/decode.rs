use tracing::debug;

use crate::core::raster::Image;
use crate::error::{Error, Result};

/// Decode an in-memory payload. The container format is sniffed from the
/// leading bytes, not from any URL or content-type hint.
pub fn decode_image(bytes: &[u8]) -> Result<Image> {
    let decoded = image::load_from_memory(bytes).map_err(Error::Decode)?;
    let image = Image::from_dynamic(decoded);
    debug!(
        "Decoded {}x{} {} image from {} bytes",
        image.width(),
        image.height(),
        image.mode(),
        bytes.len()
    );
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ColorMode;
    use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;

    #[test]
    fn decodes_png_payload() {
        let rgb = RgbImage::from_pixel(7, 5, Rgb([1, 2, 3]));
        let mut buf = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(rgb)
            .write_to(&mut buf, ImageFormat::Png)
            .unwrap();

        let image = decode_image(buf.get_ref()).unwrap();
        assert_eq!(image.size(), (7, 5));
        assert_eq!(image.mode(), ColorMode::Rgb);
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let err = decode_image(b"<html>404 not found</html>").unwrap_err();
        assert!(err.is_decode());
        assert!(decode_image(&[]).unwrap_err().is_decode());
    }
}
