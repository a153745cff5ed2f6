//! Shared types and enums used across imgprep.
//! Includes the `ColorMode` reported for decoded images and the lossless
//! `OutputFormat`s the exporter can write.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Side length of the processed image produced by the default pipeline.
pub const TARGET_SIZE: usize = 28;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum ColorMode {
    /// Single-channel luminance
    Luma,
    LumaAlpha,
    Rgb,
    Rgba,
}

impl ColorMode {
    pub fn channels(&self) -> usize {
        match self {
            ColorMode::Luma => 1,
            ColorMode::LumaAlpha => 2,
            ColorMode::Rgb => 3,
            ColorMode::Rgba => 4,
        }
    }

    pub fn is_single_channel(&self) -> bool {
        matches!(self, ColorMode::Luma)
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ColorMode::Luma => "L",
            ColorMode::LumaAlpha => "LA",
            ColorMode::Rgb => "RGB",
            ColorMode::Rgba => "RGBA",
        };
        write!(f, "{}", s)
    }
}

#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Debug,
    ValueEnum,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum OutputFormat {
    PNG,
    TIFF,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::PNG => "png",
            OutputFormat::TIFF => "tiff",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::PNG => write!(f, "PNG"),
            OutputFormat::TIFF => write!(f, "TIFF"),
        }
    }
}
