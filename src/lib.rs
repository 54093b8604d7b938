//! GPA Calculator - assignment grades averaged in the browser
//!
//! Core modules:
//! - `records`: In-memory ordered list of assignments
//! - `gpa`: Pure averaging of recorded grades
//! - `validate`: Admission rules for new assignments
//! - `persistence`: Save/load to a key-value slot (LocalStorage on web)
//! - `view`: Projection of the list and GPA into a presentation sink
//! - `app`: Controller that owns all state and handles page events
//! - `platform`: Browser bindings (LocalStorage, DOM)

pub mod app;
pub mod gpa;
pub mod persistence;
pub mod platform;
pub mod records;
pub mod settings;
pub mod validate;
pub mod view;

pub use app::{App, Phase, Snapshot, SubmitOutcome};
pub use gpa::{calculate_gpa, mean_grade};
pub use persistence::{KeyValueStore, MemoryStore, Persistence, StorageError};
pub use records::{AssignmentRecord, RecordStore};
pub use settings::Settings;
pub use validate::{GradeFault, ValidationError, validate};
pub use view::{ListItem, ListView, PresentationSink, PresentationUnavailable, TextView, render};

/// Application constants
pub mod consts {
    /// LocalStorage key holding the assignment list
    pub const STORAGE_KEY: &str = "gpaCalculatorAssignments";

    /// Accepted grade range (inclusive)
    pub const GRADE_MIN: f64 = 1.0;
    pub const GRADE_MAX: f64 = 5.0;

    /// GPA shown when no assignments exist
    pub const EMPTY_GPA: &str = "0.00";

    /// Shown in place of the list when it is empty
    pub const NO_ASSIGNMENTS_MESSAGE: &str =
        "No assignments added yet. Add your first assignment above!";
}
