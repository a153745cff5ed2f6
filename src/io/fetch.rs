//! Blocking HTTP retrieval of image payloads.
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::error::{Error, Result};

/// One-shot HTTP GET client. No retries, no caching.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher. `timeout` of `None` waits indefinitely.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("imgprep/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// GET `url` and return the whole body. Any status outside 2xx is an error.
    pub fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        info!("Fetching {}", url);
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes()?;
        debug!("Received {} bytes ({})", body.len(), status);
        Ok(body.to_vec())
    }
}

/// Convenience wrapper for a single request.
pub fn fetch_bytes(url: &str, timeout: Option<Duration>) -> Result<Vec<u8>> {
    HttpFetcher::new(timeout)?.fetch(url)
}
