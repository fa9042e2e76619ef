use anyhow::{Context, Result};
use scraper_core::application::DEFAULT_CHECKPOINT_EVERY;
use scraper_core::domain::{DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_SETTINGS_PATH: &str = "./settings/settings.toml";

/// Settings file contents
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(rename = "filePaths")]
    pub file_paths: FilePaths,
    #[serde(default)]
    pub scraper: ScraperSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FilePaths {
    pub output: PathBuf,
    pub logs: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScraperSettings {
    pub base_url: String,
    pub page_size: u32,
    pub checkpoint_every: u32,
    pub retry_delay_secs: u64,
    pub request_timeout_secs: u64,
}

impl Default for ScraperSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            checkpoint_every: DEFAULT_CHECKPOINT_EVERY,
            retry_delay_secs: 4,
            request_timeout_secs: 30,
        }
    }
}

impl ScraperSettings {
    pub fn retry_delay(&self) -> Duration {
        Duration::from_secs(self.retry_delay_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("invalid settings file {}", path.display()))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_file_paths_only() {
        let settings = Settings::parse(
            r#"
            [filePaths]
            output = "./output/"
            logs = "./logs/"
            "#,
        )
        .unwrap();

        assert_eq!(settings.file_paths.output, PathBuf::from("./output/"));
        assert_eq!(settings.file_paths.logs, PathBuf::from("./logs/"));
        assert_eq!(settings.scraper.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.scraper.page_size, 25);
        assert_eq!(settings.scraper.checkpoint_every, 10);
        assert_eq!(settings.scraper.retry_delay(), Duration::from_secs(4));
        assert_eq!(settings.scraper.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_parse_partial_scraper_section() {
        let settings = Settings::parse(
            r#"
            [filePaths]
            output = "out"
            logs = "logs"

            [scraper]
            checkpoint_every = 5
            "#,
        )
        .unwrap();

        assert_eq!(settings.scraper.checkpoint_every, 5);
        assert_eq!(settings.scraper.page_size, 25);
    }

    #[test]
    fn test_missing_logs_key_is_error() {
        let err = Settings::parse(
            r#"
            [filePaths]
            output = "out"
            "#,
        )
        .unwrap_err();

        assert!(err.to_string().contains("logs"), "{err}");
    }

    #[test]
    fn test_missing_section_is_error() {
        assert!(Settings::parse("").is_err());
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let err = Settings::load(Path::new("/nonexistent/settings.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/settings.toml"));
    }

    #[test]
    fn test_load_repository_sample() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../settings/settings.toml");
        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.scraper.base_url, DEFAULT_BASE_URL);
    }
}
