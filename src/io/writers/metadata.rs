use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::core::processing::stats::ArraySummary;
use crate::core::raster::Image;
use crate::error::Result;
use crate::types::OutputFormat;

/// Description of an exported image, written as a JSON sidecar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub source_url: String,
    pub source_width: usize,
    pub source_height: usize,
    pub source_mode: String,
    pub width: usize,
    pub height: usize,
    pub mode: String,
    pub format: OutputFormat,
    pub value_min: u8,
    pub value_max: u8,
    /// Serialized as RFC 3339
    pub created_at: DateTime<Utc>,
    pub tool_version: String,
}

impl ExportMetadata {
    pub fn new(
        source_url: &str,
        source: &Image,
        processed: &Image,
        format: OutputFormat,
        summary: &ArraySummary,
    ) -> Self {
        Self {
            source_url: source_url.to_string(),
            source_width: source.width(),
            source_height: source.height(),
            source_mode: source.mode().to_string(),
            width: processed.width(),
            height: processed.height(),
            mode: processed.mode().to_string(),
            format,
            value_min: summary.min,
            value_max: summary.max,
            created_at: Utc::now(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Sidecar path for an export: same stem, `.json` extension.
pub fn sidecar_path(output_path: &Path) -> PathBuf {
    output_path.with_extension("json")
}

pub fn create_metadata_sidecar(output_path: &Path, meta: &ExportMetadata) -> Result<PathBuf> {
    let path = sidecar_path(output_path);
    let json_string = serde_json::to_string_pretty(meta)?;
    std::fs::write(&path, json_string)?;

    info!("Created metadata sidecar: {:?}", path);
    Ok(path)
}
