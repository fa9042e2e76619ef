use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

fn first_integer() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+").expect("valid page-number regex"))
}

/// Extracts the page number from a next-page URL
/// Prefers the `page` query parameter, falls back to the first integer in the URL
pub fn extract_page_number(next_page_url: &str) -> Option<u32> {
    if let Ok(url) = Url::parse(next_page_url) {
        let from_query = url
            .query_pairs()
            .find(|(key, _)| key == "page")
            .and_then(|(_, value)| value.parse().ok());
        if from_query.is_some() {
            return from_query;
        }
    }

    first_integer()
        .find(next_page_url)
        .and_then(|m| m.as_str().parse().ok())
}

/// Builds a date-stamped file name such as `jobs_2023-08-15.csv`
pub fn dated_file_name(prefix: &str, date: NaiveDate, extension: &str) -> String {
    format!("{}_{}.{}", prefix, date.format("%Y-%m-%d"), extension)
}
