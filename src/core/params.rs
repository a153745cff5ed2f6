use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{OutputFormat, TARGET_SIZE};

/// Placeholder source used when no URL is supplied.
pub const EXAMPLE_URL: &str =
    "https://yourusername.github.io/QuickImgToLink28x28/images/drawing-2024-01-15T10-30-45-123Z.png";

/// Default export filename, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "processed_drawing.png";

/// Run parameters, serializable so they can be recorded alongside the output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingParams {
    pub url: String,
    pub output: PathBuf,
    pub format: OutputFormat,
    /// Side length of the square grayscale output
    pub size: usize,
    /// Show the original and processed images in a window
    pub display: bool,
    /// Write a JSON description next to the output file
    pub sidecar: bool,
    /// Request timeout in seconds; None waits indefinitely
    pub timeout_secs: Option<u64>,
}

impl Default for ProcessingParams {
    fn default() -> Self {
        Self {
            url: EXAMPLE_URL.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            format: OutputFormat::PNG,
            size: TARGET_SIZE,
            display: true,
            sidecar: false,
            timeout_secs: None,
        }
    }
}

impl ProcessingParams {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn uses_example_url(&self) -> bool {
        self.url == EXAMPLE_URL
    }

    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(Error::ZeroSize { size: self.size });
        }
        if self.url.trim().is_empty() {
            return Err(Error::InvalidArgument {
                arg: "url",
                value: self.url.clone(),
            });
        }
        Ok(())
    }
}
