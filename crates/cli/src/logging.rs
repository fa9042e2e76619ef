use anyhow::{Context, Result};
use chrono::Local;
use flexi_logger::{DeferredNow, Duplicate, FileSpec, Logger, LoggerHandle};
use log::Record;
use std::io::Write;
use std::path::Path;

/// `<component>:<LEVEL> - <message>`, the component being the log target
pub fn component_format(
    w: &mut dyn Write,
    _now: &mut DeferredNow,
    record: &Record,
) -> std::io::Result<()> {
    write!(w, "{}:{} - {}", record.target(), record.level(), record.args())
}

/// File spec for today's log, `<logs_dir>/logs_<date>.log`
pub fn log_file_spec(logs_dir: &Path) -> FileSpec {
    FileSpec::default()
        .directory(logs_dir)
        .basename(format!("logs_{}", Local::now().date_naive().format("%Y-%m-%d")))
        .suppress_timestamp()
        .suffix("log")
}

/// Starts logging at info level to the dated file and to stderr.
/// The returned handle must be kept alive for the whole run.
pub fn init(logs_dir: &Path) -> Result<LoggerHandle> {
    Logger::try_with_str("info")
        .context("invalid log specification")?
        .log_to_file(log_file_spec(logs_dir))
        .duplicate_to_stderr(Duplicate::All)
        .format(component_format)
        .start()
        .with_context(|| format!("failed to start logging into {}", logs_dir.display()))
}
