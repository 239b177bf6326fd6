use super::headers::browser_headers;
use super::Fetcher;
use crate::error::{MetagrabError, Result};
use async_trait::async_trait;
use reqwest::{redirect, Client};
use std::time::Duration;

// Target sites rarely take longer than this to first byte; the transport
// layer itself guarantees no upper bound.
const TIMEOUT_MS: u64 = 12_000;
const REDIRECT_LIMIT: usize = 10;

/// Fetcher presenting a realistic browser request signature.
pub struct BrowserFetcher {
    client: Client,
}

impl BrowserFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .redirect(redirect::Policy::limited(REDIRECT_LIMIT))
            .timeout(Duration::from_millis(TIMEOUT_MS))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for BrowserFetcher {
    fn name(&self) -> &'static str {
        "reqwest-browser"
    }

    async fn fetch(&self, url: &str) -> Result<String> {
        let resp = self
            .client
            .get(url)
            .headers(browser_headers())
            .send()
            .await
            .map_err(|e| MetagrabError::fetch_error(url, &e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(MetagrabError::fetch_error(
                url,
                &format!("HTTP status {}", status),
            ));
        }

        resp.text()
            .await
            .map_err(|e| MetagrabError::fetch_error(url, &e.to_string()))
    }
}
