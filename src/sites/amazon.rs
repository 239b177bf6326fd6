use crate::types::{Domain, ScrapeResult};
use once_cell::sync::Lazy;
use regex::Regex;

// "._AC_SY300_." style resize/quality tokens embedded in image paths
static RESIZE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\._[A-Za-z0-9,]+_\.").expect("valid resize token regex"));

pub(super) fn matches(domain: &Domain) -> bool {
    domain.0.split('.').any(|label| label == "amazon")
}

/// Strip the resizing token so the unscaled image is referenced.
pub(super) fn apply(mut result: ScrapeResult, _url: &str, _html: &str) -> ScrapeResult {
    if !result.image.is_empty() {
        result.image = RESIZE_TOKEN.replace(&result.image, ".").into_owned();
    }
    result
}
