use clap::Parser;
use std::path::PathBuf;

use imgprep::{DEFAULT_OUTPUT, EXAMPLE_URL, OutputFormat, ProcessingParams, TARGET_SIZE};

#[derive(Parser, Debug)]
#[command(
    name = "imgprep",
    version,
    about = "Fetch an image, preview it, and save a small grayscale copy"
)]
pub struct CliArgs {
    /// Public URL of the image to load
    #[arg(default_value = EXAMPLE_URL)]
    pub url: String,

    /// Output filename (overwritten if it exists)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Output format (png or tiff)
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::PNG)]
    pub format: OutputFormat,

    /// Side length of the square grayscale output
    #[arg(long, default_value_t = TARGET_SIZE)]
    pub size: usize,

    /// Do not open preview windows
    #[arg(long, default_value_t = false)]
    pub no_display: bool,

    /// Write a JSON description next to the output file
    #[arg(long, default_value_t = false)]
    pub sidecar: bool,

    /// Request timeout in seconds (default: wait indefinitely)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Enable logging (RUST_LOG overrides the default debug level)
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

impl CliArgs {
    pub fn to_params(&self) -> ProcessingParams {
        ProcessingParams {
            url: self.url.clone(),
            output: self.output.clone(),
            format: self.format,
            size: self.size,
            display: !self.no_display,
            sidecar: self.sidecar,
            timeout_secs: self.timeout,
        }
    }
}
