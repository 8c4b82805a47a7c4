//! Error types for task domain validation and parsing.

use super::{TaskCode, TaskStatus};
use thiserror::Error;

/// Errors returned by task domain validation and state transitions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task name is empty after trimming.
    #[error("task name must not be empty")]
    EmptyTaskName,

    /// The task name contains characters that cannot be persisted.
    #[error("invalid task name {0:?}, line breaks are not allowed")]
    InvalidTaskName(String),

    /// The requested status is not the direct successor of the current one.
    #[error(
        "invalid status transition for task {task_code}: {} -> {requested}, \
         status may only advance one step at a time",
        from.code()
    )]
    InvalidStatusTransition {
        /// Task whose transition was rejected.
        task_code: TaskCode,
        /// Status the task was in.
        from: TaskStatus,
        /// Raw status value supplied by the caller.
        requested: i64,
    },

    /// The task is not in the state the operation requires.
    #[error("task {task_code} is not done (status {})", status.as_str())]
    TaskNotDone {
        /// Task that was not done.
        task_code: TaskCode,
        /// Status the task was in.
        status: TaskStatus,
    },
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
