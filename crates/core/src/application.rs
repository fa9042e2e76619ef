use crate::domain::{FetchRequest, PageResponse, RawRecord};
use crate::error::ScrapeError;
use crate::fetcher::PageFetcher;
use crate::mapping::map_record;
use crate::ports::{RecordSink, Result};
use crate::store::RecordStore;
use crate::utils::extract_page_number;
use crate::LOG_TARGET;

/// Default number of pages between checkpoints
pub const DEFAULT_CHECKPOINT_EVERY: u32 = 10;

/// Decides on which pages the accumulated records are written out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckpointPolicy {
    /// 0 disables periodic checkpoints; the final page is always written
    pub every: u32,
}

impl Default for CheckpointPolicy {
    fn default() -> Self {
        Self {
            every: DEFAULT_CHECKPOINT_EVERY,
        }
    }
}

impl CheckpointPolicy {
    pub fn should_fire(&self, current_page: u32, last_page: u32) -> bool {
        current_page == last_page || (self.every != 0 && current_page % self.every == 0)
    }
}

/// What a completed scrape did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrapeSummary {
    pub pages_fetched: u32,
    /// Raw count, duplicates included
    pub records_accumulated: usize,
    /// Pages a checkpoint fired on, in order
    pub checkpoints: Vec<u32>,
    pub last_export: Option<String>,
}

/// Application service driving the paginated scrape: fetches page after page,
/// accumulates records and checkpoints them through the sink
pub struct ScrapeServiceImpl {
    fetcher: PageFetcher,
    record_sink: Box<dyn RecordSink>,
    checkpoint: CheckpointPolicy,
    base_url: String,
    page_size: u32,
    store: RecordStore,
}

impl ScrapeServiceImpl {
    /// Creates a new ScrapeServiceImpl with the given dependencies
    pub fn new(
        fetcher: PageFetcher,
        record_sink: Box<dyn RecordSink>,
        base_url: impl Into<String>,
        page_size: u32,
    ) -> Self {
        log::info!(target: LOG_TARGET, "*****DMWScraper started*****");
        Self {
            fetcher,
            record_sink,
            checkpoint: CheckpointPolicy::default(),
            base_url: base_url.into(),
            page_size,
            store: RecordStore::new(),
        }
    }

    pub fn with_checkpoint_policy(mut self, checkpoint: CheckpointPolicy) -> Self {
        self.checkpoint = checkpoint;
        self
    }

    /// Records accumulated so far
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Runs until the server reports the last page
    pub fn execute_scrape(&mut self) -> Result<ScrapeSummary> {
        let mut request = FetchRequest::new(self.base_url.clone(), self.page_size);
        let mut summary = ScrapeSummary::default();

        loop {
            log::info!(target: LOG_TARGET, "Fetching jobs from page {}", request.page);

            let page = self.fetcher.fetch(&request)?;
            summary.pages_fetched += 1;

            let PageResponse {
                data,
                current_page,
                last_page,
                next_page_url,
            } = page;
            self.extract(data, current_page, last_page);

            if self.checkpoint.should_fire(current_page, last_page) {
                summary.last_export = Some(self.export()?);
                summary.checkpoints.push(current_page);
            }

            if current_page == last_page {
                log::info!(target: LOG_TARGET, "Done scraping!");
                summary.records_accumulated = self.store.len();
                return Ok(summary);
            }

            let next_url = next_page_url.ok_or(ScrapeError::MissingCursor {
                current_page,
                last_page,
            })?;
            let next_page = extract_page_number(&next_url).unwrap_or(current_page + 1);
            request.advance(next_url, next_page);
        }
    }

    fn extract(&mut self, records: Vec<RawRecord>, current_page: u32, last_page: u32) {
        self.store.extend(records);
        log::info!(
            target: LOG_TARGET,
            "Jobs extracted: {} || Current page: {}/{}",
            self.store.len(),
            current_page,
            last_page
        );
    }

    /// Writes the full deduplicated history through the sink
    pub fn export(&self) -> Result<String> {
        log::info!(target: LOG_TARGET, "Saving data to csv...");

        let mapped: Vec<_> = self
            .store
            .deduplicated()
            .into_iter()
            .map(map_record)
            .collect();
        let destination = self.record_sink.write(&mapped)?;

        log::info!(target: LOG_TARGET, "Records saved to >> {}", destination);
        Ok(destination)
    }
}
