use thiserror::Error;

pub type Result<T> = std::result::Result<T, MetagrabError>;

#[derive(Debug, Error)]
pub enum MetagrabError {
    #[error("URL is required")]
    EmptyUrl,

    #[error("fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("storage error during {operation}: {reason}")]
    Storage { operation: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl MetagrabError {
    pub fn fetch_error(url: &str, reason: &str) -> Self {
        MetagrabError::Fetch {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn validation_error(field: &str, reason: &str) -> Self {
        MetagrabError::Validation {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn storage_error(operation: &str, reason: &str) -> Self {
        MetagrabError::Storage {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }
}

/* Conversions so `?` works smoothly */
impl From<std::io::Error> for MetagrabError {
    fn from(e: std::io::Error) -> Self {
        MetagrabError::Other(e.to_string())
    }
}
impl From<serde_json::Error> for MetagrabError {
    fn from(e: serde_json::Error) -> Self {
        MetagrabError::Other(e.to_string())
    }
}
impl From<reqwest::Error> for MetagrabError {
    fn from(e: reqwest::Error) -> Self {
        MetagrabError::Other(e.to_string())
    }
}
