//! Command Line Interface (CLI) layer for imgprep.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that prints progress while the
//! image moves through load, preview, processing and save.
//!
//! If you are embedding imgprep into another application, prefer using
//! the high-level `imgprep::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
