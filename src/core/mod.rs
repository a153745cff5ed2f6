//! Core processing building blocks: the shared `Image` type, run parameters,
//! luminance conversion, resampling, array summaries and save helpers. These
//! are internal primitives consumed by the high-level `api` module.
pub mod raster;
pub mod params;
pub mod processing;
