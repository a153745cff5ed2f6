//! Numeric view of an image: the array shape, element type and value range
//! a downstream model would see.
use ndarray::{ArrayD, IxDyn};
use serde::Serialize;

use crate::core::raster::Image;
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArraySummary {
    /// `[height, width]` for single-channel images, `[height, width, channels]` otherwise
    pub shape: Vec<usize>,
    pub dtype: &'static str,
    pub min: u8,
    pub max: u8,
}

impl std::fmt::Display for ArraySummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dims: Vec<String> = self.shape.iter().map(|d| d.to_string()).collect();
        writeln!(f, "Shape: ({})", dims.join(", "))?;
        writeln!(f, "Data type: {}", self.dtype)?;
        write!(f, "Value range: {} to {}", self.min, self.max)
    }
}

/// Row-major 8-bit array of the image samples.
pub fn to_array(image: &Image) -> Result<ArrayD<u8>> {
    let mode = image.mode();
    let mut shape = vec![image.height(), image.width()];
    if !mode.is_single_channel() {
        shape.push(mode.channels());
    }
    ArrayD::from_shape_vec(IxDyn(&shape), image.to_u8_samples())
        .map_err(|e| Error::Processing(format!("array shape {:?}: {}", shape, e)))
}

pub fn summarize(image: &Image) -> Result<ArraySummary> {
    let array = to_array(image)?;
    let (min, max) = array
        .iter()
        .fold((u8::MAX, u8::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    // An empty array has no range; report it as 0..0.
    let (min, max) = if array.is_empty() { (0, 0) } else { (min, max) };

    Ok(ArraySummary {
        shape: array.shape().to_vec(),
        dtype: "u8",
        min,
        max,
    })
}
