use clap::Parser;
use cli::logging;
use cli::settings::{Settings, DEFAULT_SETTINGS_PATH};
use scraper_core::LOG_TARGET;
use std::path::PathBuf;

/// CLI tool to scrape approved job orders from the DMW API into a dated CSV file
#[derive(Parser, Debug)]
#[command(name = "dmw-scraper")]
#[command(about = "Scrapes approved job orders of licensed recruitment agencies into CSV")]
struct Cli {
    /// Path to the settings file holding the output and logs folders
    #[arg(short = 's', long = "settings", default_value = DEFAULT_SETTINGS_PATH)]
    settings: PathBuf,

    /// Endpoint to start scraping from, overriding the settings file
    #[arg(short = 'u', long = "base-url")]
    base_url: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let mut settings = match Settings::load(&cli.settings) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error loading settings: {:#}", e);
            std::process::exit(1);
        }
    };
    if let Some(base_url) = cli.base_url {
        settings.scraper.base_url = base_url;
    }

    let logger = match logging::init(&settings.file_paths.logs) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("Error starting logger: {:#}", e);
            std::process::exit(1);
        }
    };

    match cli::run(&settings) {
        Ok(summary) => {
            println!(
                "Scraped {} pages ({} records fetched), export saved to {}",
                summary.pages_fetched,
                summary.records_accumulated,
                summary.last_export.unwrap_or_default()
            );
        }
        Err(e) => {
            log::error!(target: LOG_TARGET, "{:#}", e);
            logger.flush();
            std::process::exit(1);
        }
    }
}
