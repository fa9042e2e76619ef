//! Retry policy for page fetches
//!
//! The scraper runs as a low-volume batch job, so the default policy never
//! gives up and always waits the same fixed interval between attempts.

use crate::error::{FailureKind, FetchFailure};
use crate::ports::Pause;
use std::time::Duration;

/// Delay between attempts when nothing else is configured
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(4);

/// Classifies failures as worth another attempt or not
pub trait IsRetryable {
    fn is_retryable(&self) -> bool;
}

impl IsRetryable for FetchFailure {
    fn is_retryable(&self) -> bool {
        // HTTP 429 or 4xx could be split out here once the API needs it
        match self.kind() {
            FailureKind::Network => true,
            FailureKind::Timeout => true,
            FailureKind::Status => true,
            FailureKind::MalformedBody => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// `None` retries forever
    pub max_attempts: Option<u32>,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::unbounded(DEFAULT_RETRY_DELAY)
    }
}

impl RetryPolicy {
    pub fn unbounded(delay: Duration) -> Self {
        Self {
            max_attempts: None,
            delay,
        }
    }

    pub fn bounded(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: Some(max_attempts),
            delay,
        }
    }

    /// Whether another attempt may follow `attempts_made` failed ones
    pub fn allows_another(&self, attempts_made: u32) -> bool {
        match self.max_attempts {
            Some(max) => attempts_made < max,
            None => true,
        }
    }
}

/// Sleeps the calling thread
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadPause;

impl Pause for ThreadPause {
    fn pause(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
