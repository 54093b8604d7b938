//! Projection of the assignment list and GPA onto a presentation surface
//!
//! `render` is stateless: each call fully replaces what the sink shows.

use thiserror::Error;

use crate::consts::NO_ASSIGNMENTS_MESSAGE;
use crate::records::AssignmentRecord;

/// The presentation target for an element is missing (not attached yet)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("presentation target '{target}' is unavailable")]
pub struct PresentationUnavailable {
    pub target: &'static str,
}

/// One displayed line of the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub name: String,
    /// Grade with exactly one decimal
    pub grade: String,
}

/// What the list area shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Placeholder(&'static str),
    Items(Vec<ListItem>),
}

impl ListView {
    pub fn project(records: &[AssignmentRecord]) -> Self {
        if records.is_empty() {
            return ListView::Placeholder(NO_ASSIGNMENTS_MESSAGE);
        }
        ListView::Items(
            records
                .iter()
                .map(|r| ListItem {
                    name: r.name.clone(),
                    grade: format!("{:.1}", r.grade),
                })
                .collect(),
        )
    }
}

/// Output surface for the controller
pub trait PresentationSink {
    /// Replace the list area
    fn show_records(&mut self, list: &ListView) -> Result<(), PresentationUnavailable>;

    /// Replace the GPA display
    fn show_gpa(&mut self, text: &str) -> Result<(), PresentationUnavailable>;

    /// Replace the validation message (empty text hides it)
    fn show_validation_message(&mut self, text: &str);

    fn clear_validation_message(&mut self) {
        self.show_validation_message("");
    }

    /// Clear the form after an accepted submission
    fn reset_inputs(&mut self) {}
}

/// Draw the list and GPA. A missing list target makes this a logged no-op.
pub fn render<V: PresentationSink + ?Sized>(
    sink: &mut V,
    records: &[AssignmentRecord],
    gpa_text: &str,
) {
    if let Err(e) = sink.show_records(&ListView::project(records)) {
        log::error!("{}. Cannot render assignments.", e);
        return;
    }
    if let Err(e) = sink.show_gpa(gpa_text) {
        log::warn!("{}. GPA not shown.", e);
    }
}

/// Plain-text sink (native runs and tests)
#[derive(Debug, Clone, Default)]
pub struct TextView {
    attached: bool,
    lines: Vec<String>,
    gpa: String,
    message: String,
    resets: usize,
}

impl TextView {
    pub fn new() -> Self {
        Self {
            attached: true,
            ..Default::default()
        }
    }

    /// A view whose targets do not exist yet
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn gpa(&self) -> &str {
        &self.gpa
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Number of times the form was cleared
    pub fn resets(&self) -> usize {
        self.resets
    }

    /// Full text of the page
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out.push_str(&format!("GPA: {}\n", self.gpa));
        if !self.message.is_empty() {
            out.push_str(&format!("! {}\n", self.message));
        }
        out
    }
}

impl PresentationSink for TextView {
    fn show_records(&mut self, list: &ListView) -> Result<(), PresentationUnavailable> {
        if !self.attached {
            return Err(PresentationUnavailable {
                target: "assignmentsList",
            });
        }
        self.lines = match list {
            ListView::Placeholder(text) => vec![text.to_string()],
            ListView::Items(items) => items
                .iter()
                .map(|item| format!("{}: {}", item.name, item.grade))
                .collect(),
        };
        Ok(())
    }

    fn show_gpa(&mut self, text: &str) -> Result<(), PresentationUnavailable> {
        if !self.attached {
            return Err(PresentationUnavailable { target: "gpaValue" });
        }
        self.gpa = text.to_string();
        Ok(())
    }

    fn show_validation_message(&mut self, text: &str) {
        self.message = text.to_string();
    }

    fn reset_inputs(&mut self) {
        self.resets += 1;
    }
}
