//! Task domain model.
//!
//! # Responsibility
//! - Define the single record the whole application revolves around.
//! - Pin the persisted wire shape: `{id, text, completed}`.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `completed` starts as `false` for newly created tasks.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Validation failures for externally supplied task identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// The nil UUID is reserved and never a valid task id.
    NilId,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "task id must not be the nil uuid"),
        }
    }
}

impl Error for TaskValidationError {}

/// One to-do item.
///
/// The serde shape doubles as the persisted slot payload element, so field
/// names are part of the storage contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable id used by mutators to address this task.
    pub id: TaskId,
    /// User-supplied text. Trimmed on creation; `edit` replaces it verbatim.
    pub text: String,
    /// Completion flag, flipped by the toggle operation.
    pub completed: bool,
}

impl Task {
    /// Creates a new open task with a generated stable id.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            completed: false,
        }
    }

    /// Creates a task with a caller-provided id.
    ///
    /// Used by import paths and tests where identity already exists.
    pub fn with_id(id: TaskId, text: impl Into<String>) -> Result<Self, TaskValidationError> {
        if id.is_nil() {
            return Err(TaskValidationError::NilId);
        }
        Ok(Self {
            id,
            text: text.into(),
            completed: false,
        })
    }

    /// Flips the completion flag.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}
