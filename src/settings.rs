//! Runtime settings
//!
//! Defaults match the page as shipped; a host may override them by
//! deserializing from JSON.

use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::consts::STORAGE_KEY;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// LocalStorage key for the assignment list
    pub storage_key: String,
    /// Log level name ("error", "warn", "info", "debug", "trace", "off")
    pub log_level: String,
    /// Key that dumps the current state to the log (either case)
    pub dump_key: char,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            log_level: "info".to_string(),
            dump_key: 's',
        }
    }
}

impl Settings {
    /// Parse settings from JSON, falling back to defaults on error
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Invalid settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Log level filter (Info when the name is not recognised)
    pub fn log_level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }

    /// Whether `key` (a KeyboardEvent.key value) is the dump shortcut
    pub fn is_dump_key(&self, key: &str) -> bool {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.eq_ignore_ascii_case(&self.dump_key),
            _ => false,
        }
    }
}
