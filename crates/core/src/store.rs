use crate::domain::RawRecord;
use std::collections::HashSet;

/// Every record fetched during the session, in arrival order.
/// Duplicates are kept here and only collapsed on export.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<RawRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, records: impl IntoIterator<Item = RawRecord>) {
        self.records.extend(records);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records with exact duplicates removed, first occurrence wins
    pub fn deduplicated(&self) -> Vec<&RawRecord> {
        let mut seen = HashSet::with_capacity(self.records.len());
        self.records
            .iter()
            .filter(|record| seen.insert(record.canonical()))
            .collect()
    }
}
