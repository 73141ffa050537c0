//! Errors raised while fetching a listing

use thiserror::Error;

/// Failure of a [`MovieSource`](super::MovieSource) fetch
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("no API key configured (set api.api_key or MARQUEE_API_KEY)")]
    MissingApiKey,

    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: ureq::Error,
    },

    #[error("listing API returned HTTP {status}")]
    Status { status: u16 },

    #[error("could not decode listing: {0}")]
    Decode(String),

    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl SourceError {
    /// Short text for the status line
    pub fn short(&self) -> &'static str {
        match self {
            SourceError::MissingApiKey => "no API key",
            SourceError::Http { .. } => "network error",
            SourceError::Status { .. } => "API error",
            SourceError::Decode(_) => "bad response",
            SourceError::Io { .. } => "file error",
        }
    }
}
