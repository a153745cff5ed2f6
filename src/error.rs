//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, HTTP, codec and resize errors, and provides semantic
//! variants for argument validation and the fetch boundary.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP status {status} returned for url: {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Cannot identify image data: {0}")]
    Decode(#[source] image::ImageError),

    #[error("Image encode error: {0}")]
    Encode(#[source] image::ImageError),

    #[error("TIFF error: {0}")]
    Tiff(#[from] tiff::TiffError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Resize error: {0}")]
    Resize(#[from] fast_image_resize::ResizeError),

    #[error("Image buffer error: {0}")]
    ImageBuffer(#[from] fast_image_resize::ImageBufferError),

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Size must be greater than 0, got: {size}")]
    ZeroSize { size: usize },

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("Display error: {0}")]
    Display(String),

    #[error("External error: {0}")]
    External(String),
}

impl Error {
    pub fn external<E: std::fmt::Display>(e: E) -> Self {
        Error::External(e.to_string())
    }

    /// True for the two failure kinds absorbed at the fetch boundary:
    /// network problems (transport or status) and undecodable payloads.
    pub fn is_fetch_failure(&self) -> bool {
        self.is_network() || self.is_decode()
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Error::Network(_) | Error::HttpStatus { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_and_decode_are_fetch_failures() {
        let status = Error::HttpStatus {
            status: 404,
            url: "http://localhost/missing.png".to_string(),
        };
        assert!(status.is_network());
        assert!(status.is_fetch_failure());

        let decode = Error::Decode(image::ImageError::IoError(std::io::Error::other("bad")));
        assert!(decode.is_decode());
        assert!(decode.is_fetch_failure());

        assert!(!Error::ZeroSize { size: 0 }.is_fetch_failure());
        assert!(!Error::external("boom").is_fetch_failure());
    }

    #[test]
    fn status_message_names_the_url() {
        let err = Error::HttpStatus {
            status: 500,
            url: "http://example.test/a.png".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "HTTP status 500 returned for url: http://example.test/a.png"
        );
    }
}
