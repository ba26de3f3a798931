// src/core/net.rs

// Page fetching. The driver only sees the `Fetch` trait so tests can hand it
// canned documents.

use reqwest::blocking::Client;

use crate::error::{Result, ScrapeError};

/// Source of HTML documents keyed by absolute URL.
pub trait Fetch {
    /// GET `url` and return the decoded body. Non-2xx is an error.
    fn get(&self, url: &str) -> Result<String>;
}

/// Plain blocking GET with client defaults (no custom headers, default timeout).
pub struct HttpFetch {
    client: Client,
}

impl HttpFetch {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| ScrapeError::Client { reason: e.to_string() })?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetch {
    fn get(&self, url: &str) -> Result<String> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| ScrapeError::Fetch { url: s!(url), reason: e.to_string() })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::HttpStatus { url: s!(url), status: status.as_u16() });
        }

        resp.text()
            .map_err(|e| ScrapeError::Fetch { url: s!(url), reason: e.to_string() })
    }
}
