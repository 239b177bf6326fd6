use std::time::Instant;

use crate::error::{MetagrabError, Result};
use crate::extract;
use crate::fetch::{normalize_url, BrowserFetcher, Fetcher};
use crate::log::ActivityLogger;
use crate::sites;
use crate::types::{Domain, ScrapeRequest, ScrapeResult};

/// Surfaced instead of the raw transport error; anti-bot rejection by large
/// retailers is an expected, recurring condition rather than a bug.
const BLOCKED_MESSAGE: &str =
    "could not fetch the page; the source site may be blocking automated access";

/// The full pipeline: normalize, fetch, generic extraction, site rules.
///
/// `extract` never fails: every failure mode degrades to an empty or partial
/// [`ScrapeResult`], optionally carrying `error`. One invocation performs at
/// most one outbound request and keeps no state between calls.
pub struct MetadataExtractor {
    fetcher: Box<dyn Fetcher>,
}

impl MetadataExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            fetcher: Box::new(BrowserFetcher::new()?),
        })
    }

    /// Swap in a different document source (tests, custom transports).
    pub fn with_fetcher(fetcher: Box<dyn Fetcher>) -> Self {
        Self { fetcher }
    }

    pub async fn extract(&self, request: &ScrapeRequest) -> ScrapeResult {
        if request.url.trim().is_empty() {
            return ScrapeResult::with_error(MetagrabError::EmptyUrl.to_string());
        }

        let url = normalize_url(&request.url);
        let domain = Domain::from_raw_url(&url);
        let start = Instant::now();

        let html = match self.fetcher.fetch(&url).await {
            Ok(html) => html,
            Err(e) => {
                log_error(
                    domain.as_ref(),
                    "extract",
                    &format!("{e} ({}ms)", start.elapsed().as_millis()),
                );
                return ScrapeResult::with_error(BLOCKED_MESSAGE);
            }
        };

        let generic = extract::extract_fields(&html);
        let result = match &domain {
            Some(d) => sites::apply_site_rules(generic, d, &url, &html),
            None => generic,
        };

        log_info(
            domain.as_ref(),
            "extract",
            &format!("succeeded in {}ms", start.elapsed().as_millis()),
        );
        result
    }
}

// Logging must never break the extraction it describes.
fn log_info(domain: Option<&Domain>, event: &str, details: &str) {
    if let Ok(logger) = ActivityLogger::new() {
        let _ = logger.info(domain.map(|d| d.0.as_str()), event, Some(details));
    }
}

fn log_error(domain: Option<&Domain>, event: &str, details: &str) {
    if let Ok(logger) = ActivityLogger::new() {
        let _ = logger.error(domain.map(|d| d.0.as_str()), event, Some(details));
    }
}
