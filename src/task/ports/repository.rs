//! Record store ports for users, tasks, and status change logs.

use crate::task::domain::{LogEntry, Task, TaskCode, User, UserCode};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Result type for record store operations.
pub type RecordStoreResult<T> = Result<T, RecordStoreError>;

/// User persistence contract.
pub trait UserRepository: Send + Sync {
    /// Returns every stored user in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::Persistence`] when the store cannot be read.
    fn find_all(&self) -> RecordStoreResult<Vec<User>>;

    /// Finds a user by code.
    ///
    /// Returns `None` when the user does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::Persistence`] when the store cannot be read.
    fn find_by_code(&self, code: UserCode) -> RecordStoreResult<Option<User>>;

    /// Stores a new user.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::DuplicateKey`] when the user code already
    /// exists.
    fn save(&self, user: &User) -> RecordStoreResult<()>;
}

/// Task persistence contract.
pub trait TaskRepository: Send + Sync {
    /// Returns every stored task in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::Persistence`] when the store cannot be read.
    fn find_all(&self) -> RecordStoreResult<Vec<Task>>;

    /// Finds a task by code.
    ///
    /// Returns `None` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::Persistence`] when the store cannot be read.
    fn find_by_code(&self, code: TaskCode) -> RecordStoreResult<Option<Task>>;

    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::DuplicateKey`] when the task code already
    /// exists.
    fn save(&self, task: &Task) -> RecordStoreResult<()>;

    /// Replaces the stored task that has the same code.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::NotFound`] when the task does not exist.
    fn update(&self, task: &Task) -> RecordStoreResult<()>;

    /// Removes the task with the given code.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::NotFound`] when the task does not exist.
    fn delete_by_code(&self, code: TaskCode) -> RecordStoreResult<()>;
}

/// Status change log persistence contract.
pub trait LogRepository: Send + Sync {
    /// Returns every stored log entry in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::Persistence`] when the store cannot be read.
    fn find_all(&self) -> RecordStoreResult<Vec<LogEntry>>;

    /// Returns the log entries recorded for a task, in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::Persistence`] when the store cannot be read.
    fn find_by_task_code(&self, task_code: TaskCode) -> RecordStoreResult<Vec<LogEntry>>;

    /// Appends a log entry.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::Persistence`] when the entry cannot be
    /// written.
    fn save(&self, entry: &LogEntry) -> RecordStoreResult<()>;

    /// Removes every log entry recorded for a task and returns how many
    /// were removed.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::Persistence`] when the store cannot be
    /// rewritten.
    fn delete_by_task_code(&self, task_code: TaskCode) -> RecordStoreResult<usize>;
}

/// Kind of record held by a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// User records.
    User,
    /// Task records.
    Task,
    /// Status change log records.
    Log,
}

impl RecordKind {
    /// Returns the lowercase record kind name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Task => "task",
            Self::Log => "log",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by record store implementations.
#[derive(Debug, Clone, Error)]
pub enum RecordStoreError {
    /// A record with the same key already exists.
    #[error("duplicate {kind} code: {key}")]
    DuplicateKey {
        /// Kind of the conflicting record.
        kind: RecordKind,
        /// Conflicting key.
        key: u32,
    },

    /// No record matches the key.
    #[error("{kind} not found: {key}")]
    NotFound {
        /// Kind of the missing record.
        kind: RecordKind,
        /// Missing key.
        key: u32,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RecordStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
