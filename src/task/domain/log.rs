//! Append-only status change log entries.

use super::{Task, TaskCode, TaskStatus, UserCode};
use chrono::NaiveDate;
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Historical record of a task creation or status change.
///
/// Entries are never mutated; they are removed in bulk when their task is
/// deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    task_code: TaskCode,
    acting_user: UserCode,
    status: TaskStatus,
    date: NaiveDate,
}

impl LogEntry {
    /// Creates a log entry from explicit fields.
    #[must_use]
    pub const fn new(
        task_code: TaskCode,
        acting_user: UserCode,
        status: TaskStatus,
        date: NaiveDate,
    ) -> Self {
        Self {
            task_code,
            acting_user,
            status,
            date,
        }
    }

    /// Records the task's current status as set by `acting_user` today.
    #[must_use]
    pub fn record(task: &Task, acting_user: UserCode, clock: &impl Clock) -> Self {
        Self::new(
            task.code(),
            acting_user,
            task.status(),
            clock.local().date_naive(),
        )
    }

    /// Returns the code of the task this entry belongs to.
    #[must_use]
    pub const fn task_code(&self) -> TaskCode {
        self.task_code
    }

    /// Returns the user credited with the change.
    #[must_use]
    pub const fn acting_user(&self) -> UserCode {
        self.acting_user
    }

    /// Returns the status that was set.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the calendar date of the change.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }
}
