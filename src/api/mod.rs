//! High-level, ergonomic library API: load an image from a URL, turn it into
//! a 28x28 grayscale copy, summarize it and save it. Prefer these entrypoints
//! over the low-level processing modules when integrating imgprep.
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{info, warn};

use crate::core::params::ProcessingParams;
use crate::core::processing::pipeline::{process_image_default, process_image_pipeline};
use crate::core::processing::save::save_processed_image_with_metadata;
use crate::core::processing::stats::{ArraySummary, summarize};
use crate::core::raster::Image;
use crate::display::Viewer;
use crate::error::{Error, Result};
use crate::io::decode::decode_image;
use crate::io::fetch::HttpFetcher;
use crate::io::writers::metadata::{ExportMetadata, sidecar_path};
use crate::types::{ColorMode, OutputFormat};

/// Fetch and decode in one step, keeping the failure typed.
pub fn try_load_image_from_url(url: &str, timeout: Option<Duration>) -> Result<Image> {
    let bytes = HttpFetcher::new(timeout)?.fetch(url)?;
    decode_image(&bytes)
}

/// Print the user-facing description of a load failure.
pub fn report_load_error(err: &Error) {
    if err.is_network() {
        println!("Error loading image from URL: {err}");
    } else {
        println!("Error processing image: {err}");
    }
}

/// Load an image from a public URL. Network and decode failures are printed
/// to stdout and turned into `None`; nothing is raised.
pub fn load_image_from_url(url: &str) -> Option<Image> {
    load_image_from_url_with_timeout(url, None)
}

pub fn load_image_from_url_with_timeout(url: &str, timeout: Option<Duration>) -> Option<Image> {
    match try_load_image_from_url(url, timeout) {
        Ok(image) => Some(image),
        Err(e) => {
            warn!("Failed to load {}: {}", url, e);
            report_load_error(&e);
            None
        }
    }
}

/// Grayscale + resample to the default 28x28 grid.
pub fn process_image(image: &Image) -> Result<Image> {
    process_image_default(image)
}

pub fn process_image_to_size(image: &Image, size: usize) -> Result<Image> {
    process_image_pipeline(image, size)
}

/// Save to `output`, overwriting it.
pub fn save_image(image: &Image, output: &Path, format: OutputFormat) -> Result<()> {
    save_processed_image_with_metadata(image, output, format, None)
}

/// Outcome of a full run
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub source_size: (usize, usize),
    pub source_mode: ColorMode,
    pub processed: Image,
    pub summary: ArraySummary,
    pub output: PathBuf,
    pub sidecar: Option<PathBuf>,
}

/// Progress notifications from [`process_url_to_path_with_progress`].
#[derive(Debug, Clone, Copy)]
pub enum PipelineEvent<'a> {
    Loading { url: &'a str },
    Loaded { image: &'a Image },
    ShowingOriginal,
    Processing,
    ShowingProcessed,
    Summarized { summary: &'a ArraySummary },
    Saved { output: &'a Path, sidecar: Option<&'a Path> },
}

/// Run the whole pipeline: load, show, process, show, summarize, save.
/// Returns `Ok(None)` when the image could not be loaded; processing and
/// saving failures are returned as errors.
pub fn process_url_to_path(
    params: &ProcessingParams,
    viewer: &mut dyn Viewer,
) -> Result<Option<PipelineReport>> {
    process_url_to_path_with_progress(params, viewer, &mut |_| Ok(()))
}

/// [`process_url_to_path`], reporting each step to `progress` before it
/// runs. An error from `progress` stops the run.
pub fn process_url_to_path_with_progress(
    params: &ProcessingParams,
    viewer: &mut dyn Viewer,
    progress: &mut dyn FnMut(PipelineEvent<'_>) -> Result<()>,
) -> Result<Option<PipelineReport>> {
    params.validate()?;

    progress(PipelineEvent::Loading { url: &params.url })?;
    let Some(image) = load_image_from_url_with_timeout(&params.url, params.timeout()) else {
        return Ok(None);
    };
    info!(
        "Loaded {}x{} {} image",
        image.width(),
        image.height(),
        image.mode()
    );
    progress(PipelineEvent::Loaded { image: &image })?;

    if params.display {
        progress(PipelineEvent::ShowingOriginal)?;
        viewer.show(&image, &original_title(&image))?;
    }

    progress(PipelineEvent::Processing)?;
    let processed = process_image_pipeline(&image, params.size)?;

    if params.display {
        progress(PipelineEvent::ShowingProcessed)?;
        viewer.show(&processed, &processed_title(params.size))?;
    }

    let summary = summarize(&processed)?;
    progress(PipelineEvent::Summarized { summary: &summary })?;

    let metadata = params
        .sidecar
        .then(|| ExportMetadata::new(&params.url, &image, &processed, params.format, &summary));
    save_processed_image_with_metadata(&processed, &params.output, params.format, metadata.as_ref())?;
    let sidecar = params.sidecar.then(|| sidecar_path(&params.output));
    progress(PipelineEvent::Saved {
        output: &params.output,
        sidecar: sidecar.as_deref(),
    })?;

    Ok(Some(PipelineReport {
        source_size: image.size(),
        source_mode: image.mode(),
        processed,
        summary,
        output: params.output.clone(),
        sidecar,
    }))
}

pub fn original_title(image: &Image) -> String {
    format!("Original Drawing ({}x{})", image.width(), image.height())
}

pub fn processed_title(size: usize) -> String {
    format!("Processed Image ({}x{} Grayscale)", size, size)
}
