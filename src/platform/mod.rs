//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Storage (LocalStorage on web, `MemoryStore` natively)
//! - Presentation (DOM on web, `TextView` natively)

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(target_arch = "wasm32")]
pub use web::{DomView, LocalStorage};

/// Element ids the page must provide
pub mod ids {
    pub const FORM: &str = "assignmentForm";
    pub const NAME_INPUT: &str = "assignmentName";
    pub const GRADE_INPUT: &str = "assignmentGrade";
    pub const GPA_VALUE: &str = "gpaValue";
    pub const LIST: &str = "assignmentsList";
    pub const VALIDATION_MESSAGE: &str = "validationMessage";
}
