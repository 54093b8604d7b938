//! Assignment records and the session-scoped record store

use serde::{Deserialize, Serialize};

/// A single graded assignment
///
/// Only built by [`crate::validate`], so the name is trimmed and non-empty
/// and the grade is finite and within range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentRecord {
    pub name: String,
    pub grade: f64,
}

/// Ordered list of admitted assignments (insertion order = display order)
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<AssignmentRecord>,
}

impl RecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Add a record to the end. Callers validate first.
    pub fn append(&mut self, record: AssignmentRecord) {
        self.records.push(record);
    }

    /// Replace the whole list (after a load)
    pub fn replace_all(&mut self, records: Vec<AssignmentRecord>) {
        self.records = records;
    }

    /// Current list, read-only
    pub fn all(&self) -> &[AssignmentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
