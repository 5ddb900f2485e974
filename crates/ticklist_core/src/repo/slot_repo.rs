//! Task-list slot repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist the whole task collection as one textual slot value.
//! - Keep SQL and JSON codec details inside the persistence boundary.
//!
//! # Invariants
//! - The slot payload is a JSON array of `{id, text, completed}` objects,
//!   written in collection order.
//! - A payload that does not decode, or decodes with nil/duplicate ids, is
//!   reported as `Malformed`, never silently repaired here.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::task::Task;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed name of the slot holding the serialized task collection.
pub const TASKS_SLOT_KEY: &str = "tasks";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for slot persistence and decoding.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Persisted slot payload exists but cannot be used.
    Malformed {
        slot: &'static str,
        detail: String,
    },
    /// Encoding the in-memory collection failed.
    Serialize(serde_json::Error),
    /// The connection has not been migrated to the expected schema version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// The schema version matches but a required table is missing.
    MissingRequiredTable(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Malformed { slot, detail } => {
                write!(f, "malformed persisted data in slot `{slot}`: {detail}")
            }
            Self::Serialize(err) => write!(f, "failed to serialize slot payload: {err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection not ready: schema version {actual_version}, expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "connection not ready: missing required table `{table}`")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
            Self::Malformed { .. }
            | Self::UninitializedConnection { .. }
            | Self::MissingRequiredTable(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for the persisted task collection.
pub trait TaskListRepository {
    /// Reads the slot. `Ok(None)` when the slot has never been written.
    fn load_tasks(&self) -> RepoResult<Option<Vec<Task>>>;
    /// Replaces the slot value with the serialized full collection.
    fn save_tasks(&self, tasks: &[Task]) -> RepoResult<()>;
}

/// SQLite-backed slot repository.
pub struct SqliteTaskListRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskListRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when the schema version does not match
    ///   this binary's latest migration.
    /// - `MissingRequiredTable` when the `slots` table is absent.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let actual_version: u32 =
            conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        let expected_version = latest_version();
        if actual_version != expected_version {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        let has_slots: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = 'slots'
            );",
            [],
            |row| row.get(0),
        )?;
        if has_slots == 0 {
            return Err(RepoError::MissingRequiredTable("slots"));
        }

        Ok(Self { conn })
    }
}

impl TaskListRepository for SqliteTaskListRepository<'_> {
    fn load_tasks(&self) -> RepoResult<Option<Vec<Task>>> {
        let payload: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM slots WHERE key = ?1;",
                [TASKS_SLOT_KEY],
                |row| row.get(0),
            )
            .optional()?;

        let Some(payload) = payload else {
            return Ok(None);
        };

        let tasks: Vec<Task> =
            serde_json::from_str(&payload).map_err(|err| RepoError::Malformed {
                slot: TASKS_SLOT_KEY,
                detail: err.to_string(),
            })?;
        validate_collection(&tasks)?;

        Ok(Some(tasks))
    }

    fn save_tasks(&self, tasks: &[Task]) -> RepoResult<()> {
        let payload = serde_json::to_string(tasks).map_err(RepoError::Serialize)?;

        self.conn.execute(
            "INSERT INTO slots (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![TASKS_SLOT_KEY, payload],
        )?;

        Ok(())
    }
}

fn validate_collection(tasks: &[Task]) -> RepoResult<()> {
    let mut seen = HashSet::with_capacity(tasks.len());
    for task in tasks {
        if task.id.is_nil() {
            return Err(RepoError::Malformed {
                slot: TASKS_SLOT_KEY,
                detail: "task with nil id".to_string(),
            });
        }
        if !seen.insert(task.id) {
            return Err(RepoError::Malformed {
                slot: TASKS_SLOT_KEY,
                detail: format!("duplicate task id {}", task.id),
            });
        }
    }
    Ok(())
}
