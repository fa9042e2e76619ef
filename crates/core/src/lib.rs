pub mod application;
pub mod domain;
pub mod error;
pub mod fetcher;
pub mod mapping;
pub mod ports;
pub mod retry;
pub mod store;
pub mod utils;

#[cfg(test)]
pub(crate) mod testing;

/// Component name every log line of the scraper is tagged with
pub const LOG_TARGET: &str = "DMWScraper";
