//! Error types for the scraper core
//!
//! `FetchFailure` describes why a single attempt against the job-orders API
//! failed. `ScrapeError` is what the pagination driver surfaces to its caller.

use thiserror::Error;

/// Why one fetch attempt did not produce a page
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchFailure {
    /// Connection refused, reset, DNS failure or any other transport error
    #[error("network error: {0}")]
    Network(String),

    /// The request did not complete within the configured timeout
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The server answered outside the 2xx range
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The server answered 2xx but the body is not a job-orders page
    #[error("malformed response body: {0}")]
    MalformedBody(String),
}

/// Coarse classification of a [`FetchFailure`], used by the retry policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Network,
    Timeout,
    Status,
    MalformedBody,
}

impl FetchFailure {
    pub fn kind(&self) -> FailureKind {
        match self {
            FetchFailure::Network(_) => FailureKind::Network,
            FetchFailure::Timeout(_) => FailureKind::Timeout,
            FetchFailure::Status(_) => FailureKind::Status,
            FetchFailure::MalformedBody(_) => FailureKind::MalformedBody,
        }
    }
}

/// Errors that stop a scrape
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// A failure the retry policy refused to retry
    #[error("fetching page {page} failed: {source}")]
    Fetch {
        page: u32,
        #[source]
        source: FetchFailure,
    },

    /// A bounded retry policy ran out of attempts
    #[error("fetching page {page} failed after {attempts} attempts: {last}")]
    RetriesExhausted {
        page: u32,
        attempts: u32,
        last: FetchFailure,
    },

    /// The server reported more pages but gave no URL to reach them
    #[error("page {current_page} of {last_page} has no next_page_url")]
    MissingCursor { current_page: u32, last_page: u32 },

    /// Persisting the record set failed
    #[error("failed to write records: {0}")]
    Sink(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
