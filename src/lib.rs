#![doc = r#"
imgprep — fetch an image from a URL, preview it, and export a small grayscale copy.

The pipeline is strictly linear: fetch the bytes with one blocking HTTP GET,
decode them, show the original, convert to single-channel luminance and
resample to a 28x28 grid with a Lanczos3 filter, show the result, then write
it to disk as a lossless PNG or TIFF. It powers the `imgprep` CLI and can be
embedded in your own Rust applications.

Add dependency
--------------
```toml
[dependencies]
imgprep = { version = "0.1", default-features = false }
```

Quick start: URL to file
------------------------
```rust,no_run
use std::path::PathBuf;
use imgprep::{process_url_to_path, HeadlessViewer, OutputFormat, ProcessingParams};

fn main() -> imgprep::Result<()> {
    let params = ProcessingParams {
        url: "https://example.com/drawing.png".to_string(),
        output: PathBuf::from("processed_drawing.png"),
        format: OutputFormat::PNG,
        display: false,
        ..Default::default()
    };

    match process_url_to_path(&params, &mut HeadlessViewer::default())? {
        Some(report) => println!("saved {:?} ({})", report.output, report.summary.dtype),
        None => println!("Could not load image."),
    }
    Ok(())
}
```

Step by step
------------
```rust,no_run
use std::path::Path;
use imgprep::{load_image_from_url, process_image, save_image, OutputFormat};

fn main() -> imgprep::Result<()> {
    // Failures are printed and come back as None.
    let Some(image) = load_image_from_url("https://example.com/drawing.png") else {
        return Ok(());
    };
    let processed = process_image(&image)?;
    assert_eq!(processed.size(), (28, 28));
    save_image(&processed, Path::new("processed_drawing.png"), OutputFormat::PNG)
}
```

Error handling
--------------
Fallible functions return `imgprep::Result<T>`. Network problems
(`Error::Network`, `Error::HttpStatus`) and undecodable payloads
(`Error::Decode`) are the two failures absorbed by `load_image_from_url`;
use `try_load_image_from_url` to see them typed.

Feature flags
-------------
- `gui`: native preview window (`gui::WindowViewer`) via eframe.
- `full`: everything.

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — `Image`, parameters and processing primitives.
- [`io`] — HTTP fetch, decoding and writers.
- [`display`] — the `Viewer` seam.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod display;
pub mod error;
pub mod io;
pub mod types;

// GUI module (only available with gui feature)
#[cfg(feature = "gui")]
pub mod gui;

// Curated public API surface
// Types
pub use crate::core::params::{DEFAULT_OUTPUT, EXAMPLE_URL, ProcessingParams};
pub use crate::core::processing::stats::ArraySummary;
pub use crate::core::raster::Image;
pub use display::{HeadlessViewer, Viewer};
pub use error::{Error, Result};
pub use types::{ColorMode, OutputFormat, TARGET_SIZE};

// I/O
pub use io::writers::metadata::{ExportMetadata, create_metadata_sidecar};
pub use io::{HttpFetcher, decode_image, fetch_bytes};

// High-level API re-exports
pub use api::{
    PipelineEvent, PipelineReport, load_image_from_url, load_image_from_url_with_timeout,
    process_image, process_image_to_size, process_url_to_path, process_url_to_path_with_progress,
    save_image, try_load_image_from_url,
};
