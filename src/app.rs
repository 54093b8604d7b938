//! Application controller
//!
//! Owns the record store, the persistence adapter and the presentation
//! sink. Every page event goes through here and runs to completion.

use serde::Serialize;

use crate::gpa::calculate_gpa;
use crate::persistence::{KeyValueStore, Persistence};
use crate::records::{AssignmentRecord, RecordStore};
use crate::settings::Settings;
use crate::validate::{ValidationError, validate};
use crate::view::{PresentationSink, render};

/// Lifecycle phase (one-way: Uninitialized -> Ready)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Saved assignments not loaded yet
    Uninitialized,
    /// Loaded and attached to the view
    Ready,
}

/// Result of a form submission
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Appended, saved and rendered
    Accepted(AssignmentRecord),
    /// Validation failed; the message is on screen
    Rejected(ValidationError),
    /// Submitted before startup finished
    Ignored,
}

/// State dump for diagnostics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub assignments: Vec<AssignmentRecord>,
    pub gpa: String,
}

pub struct App<S: KeyValueStore, V: PresentationSink> {
    records: RecordStore,
    persistence: Persistence<S>,
    view: V,
    settings: Settings,
    phase: Phase,
}

impl<S: KeyValueStore, V: PresentationSink> App<S, V> {
    pub fn new(storage: S, view: V, settings: Settings) -> Self {
        let persistence = Persistence::new(storage, settings.storage_key.clone());
        Self {
            records: RecordStore::new(),
            persistence,
            view,
            settings,
            phase: Phase::Uninitialized,
        }
    }

    /// Load saved assignments and draw the initial page
    pub fn start(&mut self) {
        if self.phase == Phase::Ready {
            log::warn!("start() called twice, ignoring");
            return;
        }
        self.records.replace_all(self.persistence.load());
        self.redraw();
        self.phase = Phase::Ready;
    }

    /// Handle a form submission with the raw input values
    pub fn submit(&mut self, raw_name: &str, raw_grade: &str) -> SubmitOutcome {
        if self.phase != Phase::Ready {
            log::warn!("Submission before startup finished, ignoring");
            return SubmitOutcome::Ignored;
        }

        self.view.clear_validation_message();

        let record = match validate(raw_name, raw_grade) {
            Ok(record) => record,
            Err(e) => {
                log::debug!("Rejected assignment: {:?}", e);
                self.view.show_validation_message(&e.to_string());
                return SubmitOutcome::Rejected(e);
            }
        };

        self.records.append(record.clone());
        self.persistence.save(self.records.all());
        self.redraw();
        self.view.reset_inputs();

        log::info!("Added '{}' ({})", record.name, record.grade);
        SubmitOutcome::Accepted(record)
    }

    /// Handle a key press. Returns true when it triggered the state dump.
    pub fn handle_key(&self, key: &str) -> bool {
        if !self.settings.is_dump_key(key) {
            return false;
        }
        self.dump();
        true
    }

    /// Log the current assignments and GPA
    pub fn dump(&self) {
        let snapshot = self.snapshot();
        log::info!("--- GPA Calculator Data Log ---");
        match serde_json::to_string_pretty(&snapshot.assignments) {
            Ok(json) => log::info!("Assignments: {}", json),
            Err(e) => log::warn!("Assignments: <unserializable: {}>", e),
        }
        log::info!("Current GPA: {}", snapshot.gpa);
        log::info!("-------------------------------");
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            assignments: self.records.all().to_vec(),
            gpa: self.gpa(),
        }
    }

    pub fn records(&self) -> &[AssignmentRecord] {
        self.records.all()
    }

    pub fn gpa(&self) -> String {
        calculate_gpa(self.records.all())
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    fn redraw(&mut self) {
        let gpa = calculate_gpa(self.records.all());
        render(&mut self.view, self.records.all(), &gpa);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{NO_ASSIGNMENTS_MESSAGE, STORAGE_KEY};
    use crate::persistence::MemoryStore;
    use crate::validate::GradeFault;
    use crate::view::TextView;

    fn app_with(storage: MemoryStore) -> App<MemoryStore, TextView> {
        App::new(storage, TextView::new(), Settings::default())
    }

    fn started(storage: MemoryStore) -> App<MemoryStore, TextView> {
        let mut app = app_with(storage);
        app.start();
        app
    }

    #[test]
    fn test_start_empty() {
        let mut app = app_with(MemoryStore::new());
        assert_eq!(app.phase(), Phase::Uninitialized);

        app.start();
        assert_eq!(app.phase(), Phase::Ready);
        assert_eq!(app.view().lines(), [NO_ASSIGNMENTS_MESSAGE]);
        assert_eq!(app.view().gpa(), "0.00");
    }

    #[test]
    fn test_two_submissions() {
        let mut app = started(MemoryStore::new());

        assert!(matches!(
            app.submit("Quiz 1", "4.0"),
            SubmitOutcome::Accepted(_)
        ));
        assert!(matches!(
            app.submit("Quiz 2", "3.0"),
            SubmitOutcome::Accepted(_)
        ));

        assert_eq!(app.view().lines(), ["Quiz 1: 4.0", "Quiz 2: 3.0"]);
        assert_eq!(app.view().gpa(), "3.50");
        assert_eq!(app.view().resets(), 2);
        assert_eq!(app.gpa(), "3.50");
    }

    #[test]
    fn test_submissions_survive_reload() {
        let mut app = started(MemoryStore::new());
        app.submit("Quiz 1", "4.0");
        app.submit("Quiz 2", "3.0");

        let storage = app.persistence().storage().clone();
        let reloaded = started(storage);
        assert_eq!(reloaded.records(), app.records());
        assert_eq!(reloaded.view().gpa(), "3.50");
    }

    #[test]
    fn test_loads_existing_assignments() {
        let storage = MemoryStore::with_item(
            STORAGE_KEY,
            r#"[{"name":"Essay","grade":5},{"name":"Lab","grade":2.5}]"#,
        );
        let app = started(storage);
        assert_eq!(app.view().lines(), ["Essay: 5.0", "Lab: 2.5"]);
        assert_eq!(app.view().gpa(), "3.75");
    }

    #[test]
    fn test_corrupt_storage_starts_empty() {
        let mut app = started(MemoryStore::with_item(STORAGE_KEY, "\"oops\""));
        assert!(app.records().is_empty());
        assert_eq!(app.view().gpa(), "0.00");

        // Next save overwrites the bad value
        app.submit("HW1", "4.5");
        let reloaded = started(app.persistence().storage().clone());
        assert_eq!(reloaded.records().len(), 1);
    }

    #[test]
    fn test_rejected_submission_shows_message() {
        let mut app = started(MemoryStore::new());

        let outcome = app.submit("   ", "4.0");
        assert_eq!(outcome, SubmitOutcome::Rejected(ValidationError::EmptyName));
        assert_eq!(app.view().message(), "Please enter an assignment name.");

        let outcome = app.submit("HW1", "abc");
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(ValidationError::GradeOutOfRange(GradeFault::Unparseable))
        );
        assert_eq!(
            app.view().message(),
            "Please enter a valid grade between 1 and 5 (e.g., 4.5)."
        );

        assert!(app.records().is_empty());
        assert_eq!(app.view().resets(), 0);
        assert!(matches!(app.persistence().try_load(), Ok(None)));
    }

    #[test]
    fn test_message_cleared_on_next_attempt() {
        let mut app = started(MemoryStore::new());
        app.submit("HW1", "7");
        assert!(!app.view().message().is_empty());

        app.submit("HW1", "4.5");
        assert_eq!(app.view().message(), "");
        assert_eq!(
            app.records(),
            &[AssignmentRecord {
                name: "HW1".to_string(),
                grade: 4.5,
            }]
        );
    }

    #[test]
    fn test_save_failure_keeps_memory() {
        let mut app = started(MemoryStore::with_quota(8));

        let outcome = app.submit("Quiz 1", "4.0");
        assert!(matches!(outcome, SubmitOutcome::Accepted(_)));
        assert_eq!(app.records().len(), 1);
        assert_eq!(app.view().lines(), ["Quiz 1: 4.0"]);
        assert_eq!(app.view().gpa(), "4.00");
        assert!(matches!(
            app.persistence().try_load(),
            Ok(None)
        ));
    }

    #[test]
    fn test_submit_before_start_is_ignored() {
        let mut app = app_with(MemoryStore::new());
        assert_eq!(app.submit("Quiz 1", "4.0"), SubmitOutcome::Ignored);
        assert!(app.records().is_empty());
    }

    #[test]
    fn test_start_twice_does_not_reload() {
        let mut app = started(MemoryStore::new());
        app.submit("Quiz 1", "4.0");
        app.start();
        assert_eq!(app.records().len(), 1);
        assert_eq!(app.phase(), Phase::Ready);
    }

    #[test]
    fn test_detached_view_still_records() {
        let mut app = App::new(MemoryStore::new(), TextView::detached(), Settings::default());
        app.start();
        assert!(matches!(
            app.submit("Quiz 1", "4.0"),
            SubmitOutcome::Accepted(_)
        ));
        assert!(app.view().lines().is_empty());
        assert_eq!(app.records().len(), 1);
    }

    #[test]
    fn test_dump_key_does_not_mutate() {
        let mut app = started(MemoryStore::new());
        app.submit("Quiz 1", "4.0");
        let before = app.snapshot();

        assert!(app.handle_key("s"));
        assert!(app.handle_key("S"));
        assert!(!app.handle_key("Enter"));
        assert_eq!(app.snapshot(), before);
        assert_eq!(before.gpa, "4.00");
    }

    #[test]
    fn test_custom_storage_key() {
        let settings = Settings {
            storage_key: "other".to_string(),
            ..Default::default()
        };
        let mut app = App::new(MemoryStore::new(), TextView::new(), settings);
        app.start();
        app.submit("Quiz 1", "4.0");

        let storage = app.persistence().storage();
        assert!(storage.get_item("other").unwrap().is_some());
        assert!(storage.get_item(STORAGE_KEY).unwrap().is_none());
    }
}
