use std::path::Path;

use crate::error::DashboardError;
use crate::load_clean::load_records;
use crate::models::{RawRecord, Record};

/// Drop rows without a GDP value or a per-capita CO₂ value, keeping file order.
pub fn clean_records(raw: Vec<RawRecord>) -> Vec<Record> {
    raw.into_iter().filter_map(Record::from_raw).collect()
}

/// The cleaned observations for the whole process lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
    rows_read: usize,
}

impl Dataset {
    pub fn from_raw(raw: Vec<RawRecord>) -> Self {
        let rows_read = raw.len();
        Self {
            records: clean_records(raw),
            rows_read,
        }
    }

    /// Load and clean the file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DashboardError> {
        Ok(Self::from_raw(load_records(path)?))
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn rows_read(&self) -> usize {
        self.rows_read
    }

    pub fn rows_dropped(&self) -> usize {
        self.rows_read - self.records.len()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
