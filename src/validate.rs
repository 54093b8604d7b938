//! Admission rules for new assignments

use thiserror::Error;

use crate::consts::{GRADE_MAX, GRADE_MIN};
use crate::records::AssignmentRecord;

/// Why a grade was rejected
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradeFault {
    /// Not a finite decimal number
    Unparseable,
    /// Parsed, but outside [GRADE_MIN, GRADE_MAX]
    OutOfBounds(f64),
}

/// A user-correctable problem with a proposed assignment.
///
/// The `Display` text is the message shown next to the form. Both grade
/// faults share one message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Please enter an assignment name.")]
    EmptyName,
    /// Only seen on stored data; form input is trimmed before checking
    #[error("Assignment name has leading or trailing whitespace.")]
    UntrimmedName,
    #[error("Please enter a valid grade between 1 and 5 (e.g., 4.5).")]
    GradeOutOfRange(GradeFault),
}

/// Validate raw form input into a record.
///
/// The name is trimmed; the grade keeps full precision.
pub fn validate(raw_name: &str, raw_grade: &str) -> Result<AssignmentRecord, ValidationError> {
    let name = raw_name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    let grade = parse_grade(raw_grade)?;

    Ok(AssignmentRecord {
        name: name.to_string(),
        grade,
    })
}

fn parse_grade(raw: &str) -> Result<f64, ValidationError> {
    let grade: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::GradeOutOfRange(GradeFault::Unparseable))?;
    check_grade(grade)?;
    Ok(grade)
}

fn check_grade(grade: f64) -> Result<(), ValidationError> {
    // "NaN" and "inf" parse fine as f64
    if !grade.is_finite() {
        return Err(ValidationError::GradeOutOfRange(GradeFault::Unparseable));
    }
    if !(GRADE_MIN..=GRADE_MAX).contains(&grade) {
        return Err(ValidationError::GradeOutOfRange(GradeFault::OutOfBounds(grade)));
    }
    Ok(())
}

/// Check an already-built record against the admission rules (used on load)
pub fn check_record(record: &AssignmentRecord) -> Result<(), ValidationError> {
    let trimmed = record.name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if trimmed != record.name {
        return Err(ValidationError::UntrimmedName);
    }
    check_grade(record.grade)
}
