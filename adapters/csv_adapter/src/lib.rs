use chrono::{Local, NaiveDate};
use scraper_core::domain::MappedRecord;
use scraper_core::error::ScrapeError;
use scraper_core::mapping::COLUMNS;
use scraper_core::ports::{RecordSink, Result};
use scraper_core::utils::dated_file_name;
use std::fs;
use std::path::{Path, PathBuf};

type Clock = Box<dyn Fn() -> NaiveDate + Send + Sync>;

/// CSV writer adapter implementation.
/// Each write replaces `jobs_<date>.csv` in the output folder.
pub struct CsvRecordSink {
    output_folder: PathBuf,
    today: Clock,
}

impl CsvRecordSink {
    pub fn new(output_folder: impl Into<PathBuf>) -> Self {
        Self::with_clock(output_folder, || Local::now().date_naive())
    }

    /// Uses `today` instead of the local calendar to name files
    pub fn with_clock(
        output_folder: impl Into<PathBuf>,
        today: impl Fn() -> NaiveDate + Send + Sync + 'static,
    ) -> Self {
        Self {
            output_folder: output_folder.into(),
            today: Box::new(today),
        }
    }

    fn write_file(&self, path: &Path, records: &[MappedRecord]) -> csv::Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(COLUMNS)?;
        for record in records {
            writer.write_record(record.cells())?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl RecordSink for CsvRecordSink {
    fn write(&self, records: &[MappedRecord]) -> Result<String> {
        // The date is read per write, so a run crossing midnight switches files
        let filename = dated_file_name("jobs", (self.today)(), "csv");

        fs::create_dir_all(&self.output_folder)?;
        let file_path = self.output_folder.join(&filename);

        self.write_file(&file_path, records)
            .map_err(|e| ScrapeError::Sink(format!("{}: {}", file_path.display(), e)))?;

        Ok(filename)
    }
}
