//! I/O layer: blocking HTTP `fetch`, in-memory `decode`, and `writers` for
//! PNG/TIFF outputs and JSON metadata sidecars.
pub mod fetch;
pub use fetch::{HttpFetcher, fetch_bytes};

pub mod decode;
pub use decode::decode_image;

pub mod writers;
