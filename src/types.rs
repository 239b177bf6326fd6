use serde::{Deserialize, Serialize};
use url::Url;

/// Canonical host key used for site-rule dispatch and log entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain(pub String);

impl Domain {
    /// Canonicalize host to a stable key: lowercase + IDNA/Punycode
    fn canonicalize(host: &str) -> String {
        let lower = host.to_ascii_lowercase();
        idna::domain_to_ascii(&lower).unwrap_or(lower)
    }

    pub fn from_url(url: &Url) -> Option<Self> {
        url.domain().map(|d| Domain(Self::canonicalize(d)))
    }

    /// Build a Domain from raw user text (CLI, API callers, etc.)
    pub fn from_raw(host: &str) -> Self {
        Domain(Self::canonicalize(host))
    }

    /// Best-effort domain for an already-normalized URL string.
    pub fn from_raw_url(url: &str) -> Option<Self> {
        Url::parse(url).ok().and_then(|u| Self::from_url(&u))
    }
}

/// Inbound request body: arbitrary user text, not guaranteed to be a
/// well-formed URL.
#[derive(Debug, Clone, Deserialize)]
pub struct ScrapeRequest {
    #[serde(default)]
    pub url: String,
}

/// Normalized metadata record derived from one fetched document.
///
/// Every field is optional in practice: extraction failures leave a field
/// empty rather than failing the whole operation. `error` is set only on
/// failure paths (bad input, upstream fetch rejected) and is skipped in the
/// serialized output otherwise.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrapeResult {
    pub title: String,
    pub description: String,
    pub image: String,
    /// `None` when no price could be determined; zero would be
    /// indistinguishable from a confirmed free item.
    pub price: Option<f64>,
    pub author: String,
    pub isbn: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScrapeResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    /// True when no content field carries a value.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.description.is_empty()
            && self.image.is_empty()
            && self.price.is_none()
            && self.author.is_empty()
            && self.isbn.is_empty()
    }
}

/// CLI output envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}
impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }
    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}
