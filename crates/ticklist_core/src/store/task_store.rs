//! Task store: the single owner of the task collection.
//!
//! # Responsibility
//! - Hold the insertion-ordered in-memory collection.
//! - Apply the four mutations (add/toggle/edit/remove) and persist the full
//!   collection after every change.
//! - Decide the startup recovery policy for absent or malformed slots.
//!
//! # Invariants
//! - Every successful mutation is persisted before it returns.
//! - Tasks created through `add` have non-empty trimmed text; `edit` stores
//!   replacement text verbatim.
//! - Log events carry ids and counts only, never task text.

use crate::model::task::{Task, TaskId};
use crate::repo::slot_repo::{RepoError, RepoResult, TaskListRepository};
use log::{debug, info, warn};

/// Use-case owner of the task collection, generic over persistence.
pub struct TaskStore<R: TaskListRepository> {
    repo: R,
    tasks: Vec<Task>,
}

impl<R: TaskListRepository> TaskStore<R> {
    /// Rehydrates the store from the persisted slot.
    ///
    /// # Contract
    /// - Absent slot: start with an empty collection.
    /// - Malformed slot payload: log a warning and start empty. The bad
    ///   payload stays in place until the next mutation overwrites it.
    /// - Database-level errors propagate unchanged.
    pub fn load(repo: R) -> RepoResult<Self> {
        let tasks = match repo.load_tasks() {
            Ok(Some(tasks)) => {
                info!(
                    "event=store_load module=store status=ok source=slot count={}",
                    tasks.len()
                );
                tasks
            }
            Ok(None) => {
                info!("event=store_load module=store status=ok source=empty count=0");
                Vec::new()
            }
            Err(RepoError::Malformed { slot, detail }) => {
                warn!(
                    "event=store_load module=store status=fallback_empty slot={slot} detail={detail}"
                );
                Vec::new()
            }
            Err(err) => return Err(err),
        };

        Ok(Self { repo, tasks })
    }

    /// Appends a new open task from user input.
    ///
    /// # Contract
    /// - Leading/trailing whitespace is trimmed before storage.
    /// - Empty trimmed input is a silent no-op returning `Ok(None)`; nothing
    ///   is persisted.
    pub fn add(&mut self, text: &str) -> RepoResult<Option<TaskId>> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            debug!("event=task_add module=store status=skipped_empty");
            return Ok(None);
        }

        let task = Task::new(trimmed);
        let id = task.id;
        self.tasks.push(task);
        self.persist()?;

        info!(
            "event=task_add module=store status=ok task_id={id} total={}",
            self.tasks.len()
        );
        Ok(Some(id))
    }

    /// Flips the completion flag of the task with the given id.
    ///
    /// Returns `Ok(false)` without persisting when no task matches.
    pub fn toggle_completed(&mut self, id: TaskId) -> RepoResult<bool> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            debug!("event=task_toggle module=store status=not_found task_id={id}");
            return Ok(false);
        };

        task.toggle();
        let completed = task.completed;
        self.persist()?;

        info!("event=task_toggle module=store status=ok task_id={id} completed={completed}");
        Ok(true)
    }

    /// Replaces the text of the task with the given id, verbatim.
    ///
    /// No trimming and no emptiness check: the replacement is stored as
    /// supplied. Returns `Ok(false)` without persisting when no task matches.
    pub fn edit(&mut self, id: TaskId, new_text: &str) -> RepoResult<bool> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            debug!("event=task_edit module=store status=not_found task_id={id}");
            return Ok(false);
        };

        task.text = new_text.to_string();
        self.persist()?;

        info!("event=task_edit module=store status=ok task_id={id}");
        Ok(true)
    }

    /// Deletes the task with the given id from the collection.
    ///
    /// Returns `Ok(false)` without persisting when no task matches.
    pub fn remove(&mut self, id: TaskId) -> RepoResult<bool> {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            debug!("event=task_remove module=store status=not_found task_id={id}");
            return Ok(false);
        }

        self.persist()?;

        info!(
            "event=task_remove module=store status=ok task_id={id} total={}",
            self.tasks.len()
        );
        Ok(true)
    }

    /// The full collection in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up one task by id.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    fn persist(&self) -> RepoResult<()> {
        self.repo.save_tasks(&self.tasks)
    }
}
