use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use scraper_core::domain::{FetchRequest, PageResponse};
use scraper_core::error::FetchFailure;
use scraper_core::ports::PageTransport;
use std::time::Duration;

/// Request timeout used when nothing else is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/115.0.0.0 Safari/537.36";

/// Headers the job-orders API expects from its own web frontend.
/// Accept-Encoding is left to reqwest so it can decompress the body.
fn browser_headers() -> HeaderMap {
    let pairs: [(&str, &str); 11] = [
        ("accept", "application/json"),
        ("accept-language", "en-US,en;q=0.9"),
        ("content-type", "application/json"),
        ("dnt", "1"),
        ("origin", "https://www.dmw.gov.ph"),
        ("referer", "https://www.dmw.gov.ph/"),
        ("sec-fetch-dest", "empty"),
        ("sec-fetch-mode", "cors"),
        ("sec-fetch-site", "same-site"),
        ("user-agent", USER_AGENT),
        ("x-requested-with", "XMLHttpRequest"),
    ];

    pairs
        .into_iter()
        .map(|(name, value)| {
            (
                HeaderName::from_static(name),
                HeaderValue::from_static(value),
            )
        })
        .collect()
}

fn classify(err: reqwest::Error) -> FetchFailure {
    if err.is_timeout() {
        FetchFailure::Timeout(err.to_string())
    } else {
        FetchFailure::Network(err.to_string())
    }
}

/// Blocking HTTP implementation of the PageTransport port
pub struct HttpPageTransport {
    client: Client,
}

impl HttpPageTransport {
    pub fn new(timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl PageTransport for HttpPageTransport {
    fn send(&self, request: &FetchRequest) -> Result<PageResponse, FetchFailure> {
        // form() sets its own content type; the headers applied after it win
        let response = self
            .client
            .post(&request.url)
            .form(&request.form_fields())
            .headers(browser_headers())
            .send()
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchFailure::Status(status.as_u16()));
        }

        let body = response.text().map_err(classify)?;
        serde_json::from_str(&body).map_err(|e| {
            log::debug!("unparseable body for page {}: {:.200}", request.page, body);
            FetchFailure::MalformedBody(e.to_string())
        })
    }
}
