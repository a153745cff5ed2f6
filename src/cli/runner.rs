use std::io::Write;

use tracing::info;
use tracing_subscriber::EnvFilter;

use imgprep::api::{PipelineEvent, process_url_to_path_with_progress};
use imgprep::{HeadlessViewer, ProcessingParams, Viewer};

use super::args::CliArgs;
use super::errors::AppError;

#[cfg(feature = "gui")]
fn make_viewer(display: bool) -> Box<dyn Viewer> {
    if display {
        Box::new(imgprep::gui::WindowViewer::default())
    } else {
        Box::new(HeadlessViewer::default())
    }
}

#[cfg(not(feature = "gui"))]
fn make_viewer(_display: bool) -> Box<dyn Viewer> {
    Box::new(HeadlessViewer::default())
}

fn print_event(
    out: &mut dyn Write,
    params: &ProcessingParams,
    event: PipelineEvent<'_>,
) -> imgprep::Result<()> {
    match event {
        PipelineEvent::Loading { url } => {
            writeln!(out, "Loading image from: {url}")?;
            if params.uses_example_url() {
                writeln!(out, "(Replace this URL with the actual URL of your image)")?;
            }
        }
        PipelineEvent::Loaded { image } => {
            writeln!(out, "Image loaded successfully!")?;
            writeln!(out, "Size: ({}, {})", image.width(), image.height())?;
            writeln!(out, "Mode: {}", image.mode())?;
        }
        PipelineEvent::ShowingOriginal => writeln!(out, "\nDisplaying original image...")?,
        PipelineEvent::Processing => writeln!(out, "\nProcessing image...")?,
        PipelineEvent::ShowingProcessed => writeln!(out, "Displaying processed image...")?,
        PipelineEvent::Summarized { summary } => {
            writeln!(out, "\nImage converted to array:")?;
            writeln!(out, "{summary}")?;
        }
        PipelineEvent::Saved { output, sidecar } => {
            writeln!(out, "\nProcessed image saved as: {}", output.display())?;
            if let Some(sidecar) = sidecar {
                writeln!(out, "Metadata written to: {}", sidecar.display())?;
            }
        }
    }
    Ok(())
}

fn process_single_url(
    params: &ProcessingParams,
    viewer: &mut dyn Viewer,
    out: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    writeln!(out, "imgprep - Image URL Usage Example")?;
    writeln!(out, "{}", "=".repeat(40))?;

    let report = process_url_to_path_with_progress(params, viewer, &mut |event| {
        print_event(out, params, event)
    })
    .map_err(AppError::from)?;

    if report.is_none() {
        writeln!(out, "Could not load image. Please check the URL and try again.")?;
    }
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    run_with_output(args, &mut std::io::stdout().lock())
}

/// `run`, with progress lines written to `out`.
pub fn run_with_output(
    args: CliArgs,
    out: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let params = args.to_params();

    // Refuse before any network or file work.
    if params.display && !cfg!(feature = "gui") {
        return Err(AppError::MissingFeature { feature: "gui" }.into());
    }
    params.validate().map_err(AppError::from)?;

    info!("Running with parameters: {:?}", params);

    let mut viewer = make_viewer(params.display);
    process_single_url(&params, viewer.as_mut(), out)
}
