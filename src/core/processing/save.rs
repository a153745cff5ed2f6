use std::path::Path;
use tracing::info;

use crate::core::raster::Image;
use crate::error::Result;
use crate::io::writers::metadata::{ExportMetadata, create_metadata_sidecar};
use crate::io::writers::png::write_png;
use crate::io::writers::tiff::write_tiff;
use crate::types::OutputFormat;

/// Write `image` to `output`, replacing whatever is there.
pub fn save_processed_image(image: &Image, output: &Path, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::PNG => write_png(output, image)?,
        OutputFormat::TIFF => write_tiff(output, image)?,
    }
    info!(
        "Saved {}x{} {} image as {}: {:?}",
        image.width(),
        image.height(),
        image.mode(),
        format,
        output
    );
    Ok(())
}

/// Save and, when `metadata` is given, write the JSON sidecar next to it.
pub fn save_processed_image_with_metadata(
    image: &Image,
    output: &Path,
    format: OutputFormat,
    metadata: Option<&ExportMetadata>,
) -> Result<()> {
    save_processed_image(image, output, format)?;
    if let Some(meta) = metadata {
        create_metadata_sidecar(output, meta)?;
    }
    Ok(())
}
