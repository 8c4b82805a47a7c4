//! Task aggregate root.

use super::{TaskCode, TaskDomainError, TaskName, TaskStatus, UserCode};
use serde::{Deserialize, Serialize};

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    code: TaskCode,
    name: TaskName,
    status: TaskStatus,
    owner: UserCode,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task code.
    pub code: TaskCode,
    /// Persisted task name.
    pub name: TaskName,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted owning user code.
    pub owner: UserCode,
}

impl Task {
    /// Creates a new task in [`TaskStatus::NotStarted`].
    #[must_use]
    pub const fn new(code: TaskCode, name: TaskName, owner: UserCode) -> Self {
        Self {
            code,
            name,
            status: TaskStatus::NotStarted,
            owner,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            code: data.code,
            name: data.name,
            status: data.status,
            owner: data.owner,
        }
    }

    /// Returns the task code.
    #[must_use]
    pub const fn code(&self) -> TaskCode {
        self.code
    }

    /// Returns the task name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the current lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the owning user code.
    #[must_use]
    pub const fn owner(&self) -> UserCode {
        self.owner
    }

    /// Advances the task to the requested status.
    ///
    /// The request is accepted only when it names the direct successor of
    /// the current status. On rejection the task is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStatusTransition`] for skips,
    /// regressions, repeats, and values outside the status range.
    pub fn advance_to(&mut self, requested: i64) -> Result<TaskStatus, TaskDomainError> {
        let invalid = TaskDomainError::InvalidStatusTransition {
            task_code: self.code,
            from: self.status,
            requested,
        };
        if !self.status.can_advance_to(requested) {
            return Err(invalid);
        }
        let next = self.status.next().ok_or(invalid)?;
        self.status = next;
        Ok(next)
    }

    /// Checks that the task may be deleted.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::TaskNotDone`] unless the task is
    /// [`TaskStatus::Done`].
    pub const fn ensure_deletable(&self) -> Result<(), TaskDomainError> {
        if self.status.is_terminal() {
            return Ok(());
        }
        Err(TaskDomainError::TaskNotDone {
            task_code: self.code,
            status: self.status,
        })
    }
}
