//! Presentational view state and footer counts.
//!
//! # Responsibility
//! - Track what the renderer needs between gestures: current filter, the
//!   pending new-task draft, and at most one in-flight row edit.
//!
//! # Invariants
//! - View state never owns tasks; it refers to them by id.
//! - Any state is reachable from any other through direct gestures; there
//!   are no transition restrictions.

use crate::model::task::{Task, TaskId};
use crate::view::filter::TaskFilter;

/// One in-flight inline edit: which row, and the draft replacing its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub task_id: TaskId,
    /// Seeded from the task's current text when the edit begins.
    pub text: String,
}

/// Presentational state of the view layer.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    filter: TaskFilter,
    draft_text: String,
    editing: Option<EditDraft>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> TaskFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: TaskFilter) {
        self.filter = filter;
    }

    /// Pending new-task input, owned here until submitted.
    pub fn draft_text(&self) -> &str {
        &self.draft_text
    }

    pub fn set_draft_text(&mut self, text: impl Into<String>) {
        self.draft_text = text.into();
    }

    /// Hands the draft to the submit gesture and clears it.
    pub fn take_draft(&mut self) -> String {
        std::mem::take(&mut self.draft_text)
    }

    /// Starts an inline edit seeded with the task's current text.
    ///
    /// A new edit replaces any edit already in flight.
    pub fn begin_edit(&mut self, task_id: TaskId, current_text: impl Into<String>) {
        self.editing = Some(EditDraft {
            task_id,
            text: current_text.into(),
        });
    }

    pub fn editing(&self) -> Option<&EditDraft> {
        self.editing.as_ref()
    }

    pub fn set_edit_text(&mut self, text: impl Into<String>) {
        if let Some(edit) = self.editing.as_mut() {
            edit.text = text.into();
        }
    }

    /// Ends the edit, returning the draft for the save gesture.
    pub fn take_edit(&mut self) -> Option<EditDraft> {
        self.editing.take()
    }

    /// Abandons the edit without saving.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }
}

/// Footer counts, always derived from the full unfiltered collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskCounts {
    pub total: usize,
    pub completed: usize,
    pub active: usize,
}

impl TaskCounts {
    pub fn of(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|task| task.completed).count();
        Self {
            total: tasks.len(),
            completed,
            active: tasks.len() - completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{TaskCounts, ViewState};
    use crate::model::task::Task;
    use crate::view::filter::TaskFilter;

    #[test]
    fn defaults_show_everything_with_empty_drafts() {
        let state = ViewState::new();
        assert_eq!(state.filter(), TaskFilter::All);
        assert_eq!(state.draft_text(), "");
        assert!(state.editing().is_none());
    }

    #[test]
    fn take_draft_clears_pending_input() {
        let mut state = ViewState::new();
        state.set_draft_text("buy milk");
        assert_eq!(state.take_draft(), "buy milk");
        assert_eq!(state.draft_text(), "");
    }

    #[test]
    fn edit_lifecycle_seeds_updates_and_ends() {
        let task = Task::new("draft me");
        let mut state = ViewState::new();

        state.begin_edit(task.id, task.text.clone());
        assert_eq!(state.editing().unwrap().text, "draft me");

        state.set_edit_text("drafted");
        let edit = state.take_edit().unwrap();
        assert_eq!(edit.task_id, task.id);
        assert_eq!(edit.text, "drafted");
        assert!(state.editing().is_none());
    }

    #[test]
    fn cancel_edit_discards_the_draft() {
        let task = Task::new("keep me");
        let mut state = ViewState::new();

        state.begin_edit(task.id, task.text.clone());
        state.cancel_edit();
        assert!(state.editing().is_none());
    }

    #[test]
    fn counts_cover_the_full_collection() {
        let mut tasks = vec![Task::new("a"), Task::new("b"), Task::new("c")];
        tasks[1].completed = true;

        let counts = TaskCounts::of(&tasks);
        assert_eq!(counts.total, 3);
        assert_eq!(counts.completed, 1);
        assert_eq!(counts.active, 2);
    }
}
