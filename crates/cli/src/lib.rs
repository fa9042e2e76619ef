pub mod logging;
pub mod settings;

use anyhow::{Context, Result};
use csv_adapter::CsvRecordSink;
use http_adapter::HttpPageTransport;
use scraper_core::application::{CheckpointPolicy, ScrapeServiceImpl, ScrapeSummary};
use scraper_core::fetcher::PageFetcher;
use scraper_core::ports::RecordSink;
use scraper_core::retry::RetryPolicy;
use settings::Settings;

/// Wires the HTTP and CSV adapters into the scrape service
pub fn build_service(settings: &Settings) -> Result<ScrapeServiceImpl> {
    let scraper = &settings.scraper;

    let transport = HttpPageTransport::new(scraper.request_timeout())
        .context("failed to build HTTP client")?;
    let fetcher = PageFetcher::new(
        Box::new(transport),
        RetryPolicy::unbounded(scraper.retry_delay()),
    );

    let record_sink: Box<dyn RecordSink> =
        Box::new(CsvRecordSink::new(settings.file_paths.output.clone()));

    Ok(
        ScrapeServiceImpl::new(fetcher, record_sink, scraper.base_url.clone(), scraper.page_size)
            .with_checkpoint_policy(CheckpointPolicy {
                every: scraper.checkpoint_every,
            }),
    )
}

/// Scrapes every page and leaves the export in the output folder
pub fn run(settings: &Settings) -> Result<ScrapeSummary> {
    let mut service = build_service(settings)?;
    let summary = service.execute_scrape().context("scrape aborted")?;
    Ok(summary)
}
