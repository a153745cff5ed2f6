pub mod grayscale;
pub mod pipeline;
pub mod resize;
pub mod save;
pub mod stats;
