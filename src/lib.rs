#![doc = include_str!("../README.md")]

pub mod cli;
pub mod error;
pub mod extract;
pub mod extractor;
pub mod fetch;
pub mod log;
pub mod selectors;
pub mod serve;
pub mod sites;
pub mod types;

pub use error::{MetagrabError, Result};
pub use extractor::MetadataExtractor;
pub use fetch::{normalize_url, BrowserFetcher, Fetcher};
pub use types::*;
