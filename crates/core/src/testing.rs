//! In-memory doubles for the core ports

use crate::domain::{FetchRequest, MappedRecord, PageResponse, RawRecord};
use crate::error::FetchFailure;
use crate::ports::{PageTransport, Pause, RecordSink, Result};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const TEST_BASE_URL: &str = "https://apps.dmw.gov.ph/wcms/api/job-orders";

/// Builds a page whose records are unique per (page, index)
pub fn page(current: u32, last: u32, count: usize) -> PageResponse {
    let data = (0..count).map(|i| job(current, i)).collect();
    with_records(current, last, data)
}

pub fn with_records(current: u32, last: u32, data: Vec<RawRecord>) -> PageResponse {
    let next_page_url = if current < last {
        Some(format!("{TEST_BASE_URL}?page={}", current + 1))
    } else {
        None
    };
    PageResponse {
        data,
        current_page: current,
        last_page: last,
        next_page_url,
    }
}

pub fn job(page: u32, index: usize) -> RawRecord {
    [
        ("JOBSITE", serde_json::Value::from("KINGDOM OF SAUDI ARABIA")),
        ("AGENCY", serde_json::Value::from(format!("AGENCY {page}-{index}"))),
        ("PRINCIPALNAME", serde_json::Value::from("AL RAJHI")),
        ("AccreditationClass", serde_json::Value::from("LB")),
        ("POSITION", serde_json::Value::from("WELDER")),
        ("JOBALANCE", serde_json::Value::from(index as u64)),
        ("DATEAPPROVED", serde_json::Value::from("2023-08-01")),
        ("DATAASOF", serde_json::Value::from("2023-08-15")),
    ]
    .into_iter()
    .collect()
}

/// Plays back a fixed sequence of outcomes and remembers every request
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    script: Arc<Mutex<VecDeque<std::result::Result<PageResponse, FetchFailure>>>>,
    requests: Arc<Mutex<Vec<FetchRequest>>>,
}

impl ScriptedTransport {
    pub fn new(script: Vec<std::result::Result<PageResponse, FetchFailure>>) -> Self {
        Self {
            script: Arc::new(Mutex::new(script.into())),
            requests: Arc::default(),
        }
    }

    /// Serves `pages` well-formed pages of `per_page` records each
    pub fn pages(pages: u32, per_page: usize) -> Self {
        Self::new((1..=pages).map(|p| Ok(page(p, pages, per_page))).collect())
    }

    pub fn attempts(&self) -> u32 {
        self.requests.lock().unwrap().len() as u32
    }

    pub fn requests(&self) -> Vec<FetchRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl PageTransport for ScriptedTransport {
    fn send(&self, request: &FetchRequest) -> std::result::Result<PageResponse, FetchFailure> {
        self.requests.lock().unwrap().push(request.clone());
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .expect("transport called more often than scripted")
    }
}

#[derive(Clone, Default)]
pub struct RecordingPause {
    pauses: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingPause {
    pub fn pauses(&self) -> Vec<Duration> {
        self.pauses.lock().unwrap().clone()
    }
}

impl Pause for RecordingPause {
    fn pause(&self, duration: Duration) {
        self.pauses.lock().unwrap().push(duration);
    }
}

/// Keeps every export it receives
#[derive(Clone, Default)]
pub struct RecordingSink {
    exports: Arc<Mutex<Vec<Vec<MappedRecord>>>>,
}

impl RecordingSink {
    pub fn exports(&self) -> Vec<Vec<MappedRecord>> {
        self.exports.lock().unwrap().clone()
    }
}

impl RecordSink for RecordingSink {
    fn write(&self, records: &[MappedRecord]) -> Result<String> {
        let mut exports = self.exports.lock().unwrap();
        exports.push(records.to_vec());
        Ok(format!("export_{}.csv", exports.len()))
    }
}
