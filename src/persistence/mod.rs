//! Save/load of the assignment list
//!
//! Features:
//! - JSON array of `{ "name", "grade" }` under one fixed key
//! - Corrupt or mis-shaped data is discarded wholesale, never patched
//! - Write failures are logged and swallowed; memory stays authoritative

pub mod storage;

use serde_json::Value;
use thiserror::Error;

use crate::records::AssignmentRecord;
use crate::validate::{ValidationError, check_record};

pub use storage::{KeyValueStore, MemoryStore, StorageError};

/// Failure writing the list
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("failed to serialize assignments: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write assignments: {0}")]
    Write(#[from] StorageError),
}

/// Failure reading the list back
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read assignments: {0}")]
    Read(#[from] StorageError),
    #[error("stored assignments are not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("stored assignments are not an array (found {found})")]
    NotAnArray { found: &'static str },
    #[error("stored assignment {index} is malformed: {source}")]
    InvalidRecord {
        index: usize,
        source: serde_json::Error,
    },
    #[error("stored assignment {index} is invalid: {source}")]
    RejectedRecord {
        index: usize,
        source: ValidationError,
    },
}

/// Persistence adapter over a key-value slot.
///
/// Holds no copy of the records; it only encodes and decodes on demand.
#[derive(Debug)]
pub struct Persistence<S: KeyValueStore> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> Persistence<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Write the list, logging (not returning) any failure
    pub fn save(&mut self, records: &[AssignmentRecord]) {
        match self.try_save(records) {
            Ok(()) => log::debug!("Assignments saved ({} entries)", records.len()),
            Err(e) => log::error!("Error saving assignments to local storage: {}", e),
        }
    }

    pub fn try_save(&mut self, records: &[AssignmentRecord]) -> Result<(), SaveError> {
        let json = serde_json::to_string(records)?;
        self.storage.set_item(&self.key, &json)?;
        Ok(())
    }

    /// Read the list; any problem yields an empty list
    pub fn load(&self) -> Vec<AssignmentRecord> {
        match self.try_load() {
            Ok(Some(records)) => {
                log::info!("Loaded {} assignments", records.len());
                records
            }
            Ok(None) => {
                log::info!("No saved assignments found, starting fresh");
                Vec::new()
            }
            Err(e @ LoadError::NotAnArray { .. }) => {
                log::warn!("{}. Resetting assignments.", e);
                Vec::new()
            }
            Err(e) => {
                log::error!("Error loading assignments from local storage: {}", e);
                Vec::new()
            }
        }
    }

    /// Read the list. `Ok(None)` means nothing was stored.
    pub fn try_load(&self) -> Result<Option<Vec<AssignmentRecord>>, LoadError> {
        let Some(json) = self.storage.get_item(&self.key)? else {
            return Ok(None);
        };
        decode(&json).map(Some)
    }

    /// Drop the stored list
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.storage.remove_item(&self.key)
    }
}

fn decode(json: &str) -> Result<Vec<AssignmentRecord>, LoadError> {
    let value: Value = serde_json::from_str(json)?;
    let Value::Array(items) = value else {
        return Err(LoadError::NotAnArray {
            found: json_kind(&value),
        });
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let record: AssignmentRecord = serde_json::from_value(item)
                .map_err(|source| LoadError::InvalidRecord { index, source })?;
            check_record(&record).map_err(|source| LoadError::RejectedRecord { index, source })?;
            Ok(record)
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
