mod client;
mod headers;


pub use client::BrowserFetcher;

use crate::error::Result;
use async_trait::async_trait;

/// Make caller-supplied text usable as a fetch target: trim it and assume
/// `https` when no scheme prefix is present. Purely textual; a malformed
/// address is left for the fetch itself to reject.
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// Document retrieval seam. The pipeline only ever sees this trait, so tests
/// substitute canned documents and failure modes without touching the
/// network.
#[async_trait]
pub trait Fetcher: Send + Sync {
    fn name(&self) -> &'static str;

    /// One GET against `url`. Ok carries the response body of a successful
    /// (2xx after redirects) response; everything else is an error.
    async fn fetch(&self, url: &str) -> Result<String>;
}
