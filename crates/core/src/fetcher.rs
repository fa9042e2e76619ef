use crate::domain::{FetchRequest, PageResponse};
use crate::error::ScrapeError;
use crate::ports::{PageTransport, Pause, Result};
use crate::retry::{IsRetryable, RetryPolicy, ThreadPause};
use crate::LOG_TARGET;

/// Wraps a transport with the retry policy. With the default policy
/// `fetch` blocks until the server hands back a page.
pub struct PageFetcher {
    transport: Box<dyn PageTransport>,
    policy: RetryPolicy,
    pause: Box<dyn Pause>,
}

impl PageFetcher {
    pub fn new(transport: Box<dyn PageTransport>, policy: RetryPolicy) -> Self {
        Self::with_pause(transport, policy, Box::new(ThreadPause))
    }

    pub fn with_pause(
        transport: Box<dyn PageTransport>,
        policy: RetryPolicy,
        pause: Box<dyn Pause>,
    ) -> Self {
        Self {
            transport,
            policy,
            pause,
        }
    }

    pub fn fetch(&self, request: &FetchRequest) -> Result<PageResponse> {
        let mut attempts: u32 = 0;

        loop {
            attempts += 1;

            let failure = match self.transport.send(request) {
                Ok(page) => {
                    if attempts > 1 {
                        log::info!(
                            target: LOG_TARGET,
                            "Fetched page {} after {} attempts",
                            request.page,
                            attempts
                        );
                    }
                    return Ok(page);
                }
                Err(failure) => failure,
            };

            if !failure.is_retryable() {
                return Err(ScrapeError::Fetch {
                    page: request.page,
                    source: failure,
                });
            }
            if !self.policy.allows_another(attempts) {
                return Err(ScrapeError::RetriesExhausted {
                    page: request.page,
                    attempts,
                    last: failure,
                });
            }

            log::warn!(
                target: LOG_TARGET,
                "Couldn't fetch jobs from page {}. Retrying... ({})",
                request.page,
                failure
            );
            self.pause.pause(self.policy.delay);
        }
    }
}
