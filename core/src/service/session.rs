use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use uuid::Uuid;

use crate::extract::extract_tasks;
use crate::model::stats::TaskStats;
use crate::model::task::Task;

/// In-memory task list for one interactive session. Extraction appends
/// batches; completion toggles, deletion and clearing all happen here,
/// after the pipeline is done with a record. Nothing is persisted.
#[derive(Default)]
pub struct Session {
    tasks: Vec<Task>,
}

impl Session {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Extract tasks from `text` and append them, preserving both the
    /// existing list and the batch's own order. Returns how many records
    /// were added.
    pub fn extract_notes(&mut self, text: &str, today: NaiveDate) -> usize {
        let batch = extract_tasks(text, today);
        let added = batch.len();
        self.tasks.extend(batch);
        added
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn toggle_done(&mut self, id: &Uuid) -> Result<()> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == *id)
            .ok_or_else(|| anyhow!("Task with ID {} not found", id))?;
        task.done = !task.done;
        Ok(())
    }

    pub fn delete(&mut self, id: &Uuid) -> Result<()> {
        let initial_len = self.tasks.len();
        self.tasks.retain(|t| t.id != *id);

        if self.tasks.len() == initial_len {
            return Err(anyhow!("Task with ID {} not found", id));
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    pub fn stats(&self) -> TaskStats {
        TaskStats::collect(&self.tasks)
    }

    /// Completion ratio over the current list, 0.0 when empty.
    pub fn progress(&self) -> f64 {
        self.stats().progress()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 5).unwrap()
    }

    #[test]
    fn test_extract_appends_across_calls() {
        let mut session = Session::new();
        assert_eq!(session.extract_notes("Submit the assignment by Monday.", anchor()), 1);
        assert_eq!(session.extract_notes("Call mom later. Email the client.", anchor()), 2);
        assert_eq!(session.tasks().len(), 3);
        // Insertion order is preserved.
        assert_eq!(session.tasks()[0].text, "Submit the assignment by Monday.");
        assert_eq!(session.tasks()[2].text, "Email the client.");
    }

    #[test]
    fn test_toggle_and_progress() {
        let mut session = Session::new();
        session.extract_notes("Buy milk. Call dad tomorrow.", anchor());
        assert_eq!(session.progress(), 0.0);

        let id = session.tasks()[0].id;
        session.toggle_done(&id).unwrap();
        assert!(session.tasks()[0].done);
        assert_eq!(session.progress(), 0.5);

        session.toggle_done(&id).unwrap();
        assert!(!session.tasks()[0].done);
    }

    #[test]
    fn test_delete_and_clear() {
        let mut session = Session::new();
        session.extract_notes("Buy milk. Call dad tomorrow.", anchor());

        let id = session.tasks()[0].id;
        session.delete(&id).unwrap();
        assert_eq!(session.tasks().len(), 1);
        assert!(session.delete(&id).is_err());

        session.clear();
        assert!(session.is_empty());
        assert_eq!(session.progress(), 0.0);
    }

    #[test]
    fn test_unknown_id_errors() {
        let mut session = Session::new();
        session.extract_notes("Buy milk.", anchor());
        let stranger = Uuid::new_v4();
        assert!(session.toggle_done(&stranger).is_err());
        assert!(session.delete(&stranger).is_err());
    }
}
