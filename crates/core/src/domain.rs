use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Endpoint the scraper starts from when no override is configured
pub const DEFAULT_BASE_URL: &str = "https://apps.dmw.gov.ph/wcms/api/job-orders";

/// Page size the upstream API is queried with
pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// Filter fields sent with every request; the scraper leaves them all empty
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilters {
    pub job_site: String,
    pub agency: String,
    pub position: String,
    pub principal: String,
}

/// Request descriptor owned by the pagination driver and advanced in place
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub url: String,
    pub filters: JobFilters,
    pub page: u32,
    pub page_size: u32,
}

impl FetchRequest {
    pub fn new(url: impl Into<String>, page_size: u32) -> Self {
        Self {
            url: url.into(),
            filters: JobFilters::default(),
            page: 1,
            page_size,
        }
    }

    /// Points the request at the next page cursor
    pub fn advance(&mut self, url: String, page: u32) {
        self.url = url;
        self.page = page;
    }

    /// Form body as the API expects it; the page number travels as a string
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("FilterByJobSite", self.filters.job_site.clone()),
            ("FilterByAgency", self.filters.agency.clone()),
            ("FilterByPosition", self.filters.position.clone()),
            ("FilterByPrincipal", self.filters.principal.clone()),
            ("page", self.page.to_string()),
            ("PageSize", self.page_size.to_string()),
        ]
    }
}

/// One page of job orders as returned by the API
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PageResponse {
    pub data: Vec<RawRecord>,
    pub current_page: u32,
    pub last_page: u32,
    #[serde(default)]
    pub next_page_url: Option<String>,
}

impl PageResponse {
    pub fn is_last(&self) -> bool {
        self.current_page == self.last_page
    }
}

/// A job order exactly as the server sent it. Keys vary between records.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct RawRecord(pub BTreeMap<String, Value>);

impl RawRecord {
    /// Reads a field as text. Absent keys and JSON nulls come back as `None`.
    pub fn field(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Canonical text form; keys are ordered so equal records render equally
    pub fn canonical(&self) -> String {
        serde_json::to_string(&self.0).unwrap_or_default()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Fixed eight-column row written to the output file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappedRecord {
    pub job_site: Option<String>,
    pub agency: Option<String>,
    pub principal: Option<String>,
    pub jo_class: Option<String>,
    pub position: Option<String>,
    pub jo_balance: Option<String>,
    pub date_approved: Option<String>,
    pub data_as_of: Option<String>,
}

impl MappedRecord {
    /// Cells in output column order, unset values rendered empty
    pub fn cells(&self) -> [&str; 8] {
        [
            self.job_site.as_deref().unwrap_or_default(),
            self.agency.as_deref().unwrap_or_default(),
            self.principal.as_deref().unwrap_or_default(),
            self.jo_class.as_deref().unwrap_or_default(),
            self.position.as_deref().unwrap_or_default(),
            self.jo_balance.as_deref().unwrap_or_default(),
            self.date_approved.as_deref().unwrap_or_default(),
            self.data_as_of.as_deref().unwrap_or_default(),
        ]
    }
}
