use crate::domain::{FetchRequest, MappedRecord, PageResponse};
use crate::error::{FetchFailure, ScrapeError};
use std::time::Duration;

pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Port through which the core reaches the job-orders API.
/// One call is exactly one attempt; retrying is the fetcher's job.
pub trait PageTransport {
    fn send(&self, request: &FetchRequest) -> std::result::Result<PageResponse, FetchFailure>;
}

/// Port for persisting the exported record set.
/// Returns the destination name so the driver can log it.
pub trait RecordSink: Send + Sync {
    fn write(&self, records: &[MappedRecord]) -> Result<String>;
}

/// Blocking delay between fetch attempts
pub trait Pause {
    fn pause(&self, duration: Duration);
}
