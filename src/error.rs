//! Error types for each stage of a scrape run

use std::path::PathBuf;
use thiserror::Error;

/// robots.txt could not be used. Never terminal: the check falls back to allowing the fetch.
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("unparseable robots.txt: {0}")]
    Parse(String),
}

/// Failure to retrieve the target page. Terminal for the run.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure: DNS, refused connection, timeout or body decoding
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
}

/// Failure to turn fetched markup into a record
#[derive(Debug, Error)]
pub enum ParseError {
    /// A CSS selector could not be compiled
    #[error("invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    /// The originating URL could not be parsed
    #[error("invalid page URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Failure to write a record to disk
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize record for {}: {source}", .path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The record URL has no host to name the file after
    #[error("cannot derive a file name from URL '{0}'")]
    NoDomain(String),
}

/// Failure to load configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Top-level error for a scrape run
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("unsupported scheme '{scheme}' in {url}; only http and https can be scraped")]
    UnsupportedScheme { url: String, scheme: String },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Persist(#[from] PersistError),
}
