//! Service layer for task creation, status changes, and deletion.

use crate::task::{
    domain::{LogEntry, Task, TaskCode, TaskDomainError, TaskName, User, UserCode},
    ports::{LogRepository, RecordStoreError, TaskRepository, UserRepository},
};
use mockable::Clock;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

/// Request payload for registering a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    code: TaskCode,
    name: String,
    owner: UserCode,
    acting_user: UserCode,
}

impl CreateTaskRequest {
    /// Creates a request for a task owned by `owner`, registered by
    /// `acting_user`.
    #[must_use]
    pub fn new(
        code: impl Into<TaskCode>,
        name: impl Into<String>,
        owner: impl Into<UserCode>,
        acting_user: impl Into<UserCode>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            owner: owner.into(),
            acting_user: acting_user.into(),
        }
    }
}

/// Request payload for advancing a task's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceStatusRequest {
    code: TaskCode,
    requested_status: i64,
    acting_user: UserCode,
}

impl AdvanceStatusRequest {
    /// Creates a request moving task `code` to the raw status value
    /// `requested_status`.
    #[must_use]
    pub fn new(
        code: impl Into<TaskCode>,
        requested_status: i64,
        acting_user: impl Into<UserCode>,
    ) -> Self {
        Self {
            code: code.into(),
            requested_status,
            acting_user: acting_user.into(),
        }
    }
}

/// A task together with its resolved owner, as seen by one viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListing {
    task: Task,
    owner: Option<User>,
    owned_by_viewer: bool,
}

impl TaskListing {
    /// Returns the listed task.
    #[must_use]
    pub const fn task(&self) -> &Task {
        &self.task
    }

    /// Returns the owning user, or `None` when the owner code no longer
    /// resolves to a stored user.
    #[must_use]
    pub const fn owner(&self) -> Option<&User> {
        self.owner.as_ref()
    }

    /// Returns whether the viewer owns the task.
    #[must_use]
    pub const fn owned_by_viewer(&self) -> bool {
        self.owned_by_viewer
    }
}

/// Second write that did not complete after the task write succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingStep {
    /// The status change log entry was not appended.
    AppendLog,
    /// The deleted task's log entries were not removed.
    PurgeLogs,
}

impl fmt::Display for PendingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::AppendLog => "appending the log entry",
            Self::PurgeLogs => "removing the task's log entries",
        })
    }
}

/// Broad failure category of a [`TaskLifecycleError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A user or task code did not resolve to a stored record.
    Reference,
    /// A requested status was not the direct successor of the current one.
    InvalidTransition,
    /// The task was not in the state the operation requires.
    InvalidState,
    /// Caller-supplied input was malformed.
    InvalidInput,
    /// The task code is already in use.
    Conflict,
    /// The record store failed.
    Storage,
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// The owner code does not resolve to a user.
    #[error("user not found: {0}")]
    UserNotFound(UserCode),

    /// The task code does not resolve to a task.
    #[error("task not found: {0}")]
    TaskNotFound(TaskCode),

    /// A task with the same code already exists.
    #[error("task code already in use: {0}")]
    DuplicateTask(TaskCode),

    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// Record store operation failed before anything was changed.
    #[error(transparent)]
    Storage(#[from] RecordStoreError),

    /// The task record was written but the follow-up log write failed.
    #[error("task {task_code} was updated but {step} failed: {source}")]
    Inconsistent {
        /// Task whose record and log now disagree.
        task_code: TaskCode,
        /// Write that did not complete.
        step: PendingStep,
        /// Underlying store failure.
        #[source]
        source: RecordStoreError,
    },
}

impl TaskLifecycleError {
    /// Returns the failure category.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UserNotFound(_) | Self::TaskNotFound(_) => ErrorKind::Reference,
            Self::DuplicateTask(_) => ErrorKind::Conflict,
            Self::Domain(TaskDomainError::InvalidStatusTransition { .. }) => {
                ErrorKind::InvalidTransition
            }
            Self::Domain(TaskDomainError::TaskNotDone { .. }) => ErrorKind::InvalidState,
            Self::Domain(TaskDomainError::EmptyTaskName | TaskDomainError::InvalidTaskName(_)) => {
                ErrorKind::InvalidInput
            }
            Self::Storage(_) | Self::Inconsistent { .. } => ErrorKind::Storage,
        }
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// Every mutation writes the task record first and the log second. The two
/// writes are not atomic: when the second one fails the service reports
/// [`TaskLifecycleError::Inconsistent`] and leaves the first in place.
#[derive(Clone)]
pub struct TaskLifecycleService<U, T, L, C>
where
    U: UserRepository,
    T: TaskRepository,
    L: LogRepository,
    C: Clock + Send + Sync,
{
    users: Arc<U>,
    tasks: Arc<T>,
    logs: Arc<L>,
    clock: Arc<C>,
}

impl<U, T, L, C> TaskLifecycleService<U, T, L, C>
where
    U: UserRepository,
    T: TaskRepository,
    L: LogRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(users: Arc<U>, tasks: Arc<T>, logs: Arc<L>, clock: Arc<C>) -> Self {
        Self {
            users,
            tasks,
            logs,
            clock,
        }
    }

    /// Lists every task with its resolved owner.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Storage`] when a store cannot be read.
    pub fn list_all(&self, viewer: UserCode) -> TaskLifecycleResult<Vec<TaskListing>> {
        let users = self.users.find_all()?;
        let listings = self
            .tasks
            .find_all()?
            .into_iter()
            .map(|task| TaskListing {
                owner: users.iter().find(|user| user.code() == task.owner()).cloned(),
                owned_by_viewer: task.owner() == viewer,
                task,
            })
            .collect();
        Ok(listings)
    }

    /// Registers a new task in [`TaskStatus::NotStarted`] and logs it.
    ///
    /// Validation happens before any write: the name must be valid, the
    /// owner must exist, and the task code must be unused.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] for an invalid name,
    /// [`TaskLifecycleError::UserNotFound`] for an unknown owner,
    /// [`TaskLifecycleError::DuplicateTask`] for a code already in use,
    /// [`TaskLifecycleError::Storage`] when the task cannot be stored, and
    /// [`TaskLifecycleError::Inconsistent`] when the task was stored but its
    /// log entry was not.
    ///
    /// [`TaskStatus::NotStarted`]: crate::task::domain::TaskStatus::NotStarted
    pub fn create(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let CreateTaskRequest {
            code,
            name,
            owner,
            acting_user,
        } = request;
        let task_name = TaskName::new(name)?;

        if self.users.find_by_code(owner)?.is_none() {
            return Err(TaskLifecycleError::UserNotFound(owner));
        }
        if self.tasks.find_by_code(code)?.is_some() {
            return Err(TaskLifecycleError::DuplicateTask(code));
        }

        let task = Task::new(code, task_name, owner);
        self.tasks.save(&task)?;
        self.append_log(&task, acting_user)?;

        info!(
            task_code = %task.code(),
            owner = %owner,
            acting_user = %acting_user,
            "task created"
        );
        Ok(task)
    }

    /// Advances a task's status by exactly one step and logs the change.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::TaskNotFound`] for an unknown task,
    /// [`TaskLifecycleError::Domain`] when the requested status is not the
    /// direct successor, [`TaskLifecycleError::Storage`] when the task
    /// cannot be updated, and [`TaskLifecycleError::Inconsistent`] when the
    /// task was updated but the log entry was not appended.
    pub fn advance_status(&self, request: AdvanceStatusRequest) -> TaskLifecycleResult<Task> {
        let mut task = self.find_task(request.code)?;
        let status = task.advance_to(request.requested_status)?;

        self.tasks.update(&task)?;
        self.append_log(&task, request.acting_user)?;

        info!(
            task_code = %task.code(),
            status = %status,
            acting_user = %request.acting_user,
            "task status advanced"
        );
        Ok(task)
    }

    /// Deletes a completed task together with all of its log entries.
    ///
    /// Returns the deleted task's name.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::TaskNotFound`] for an unknown task,
    /// [`TaskLifecycleError::Domain`] when the task is not
    /// [`TaskStatus::Done`], [`TaskLifecycleError::Storage`] when the task
    /// cannot be removed, and [`TaskLifecycleError::Inconsistent`] when the
    /// task was removed but its log entries were not.
    ///
    /// [`TaskStatus::Done`]: crate::task::domain::TaskStatus::Done
    pub fn delete(&self, code: TaskCode) -> TaskLifecycleResult<TaskName> {
        let task = self.find_task(code)?;
        task.ensure_deletable()?;

        self.tasks.delete_by_code(code)?;
        let removed = self
            .logs
            .delete_by_task_code(code)
            .map_err(|source| inconsistent(code, PendingStep::PurgeLogs, source))?;

        info!(task_code = %code, removed_logs = removed, "task deleted");
        Ok(task.name().clone())
    }

    /// Returns the log entries recorded for a task, oldest first.
    ///
    /// Log entries are not tied to existing tasks, so an unknown code
    /// yields an empty history.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Storage`] when the log store cannot be
    /// read.
    pub fn history(&self, code: TaskCode) -> TaskLifecycleResult<Vec<LogEntry>> {
        Ok(self.logs.find_by_task_code(code)?)
    }

    fn find_task(&self, code: TaskCode) -> TaskLifecycleResult<Task> {
        self.tasks
            .find_by_code(code)?
            .ok_or(TaskLifecycleError::TaskNotFound(code))
    }

    fn append_log(&self, task: &Task, acting_user: UserCode) -> TaskLifecycleResult<()> {
        let entry = LogEntry::record(task, acting_user, &*self.clock);
        self.logs
            .save(&entry)
            .map_err(|source| inconsistent(task.code(), PendingStep::AppendLog, source))
    }
}

fn inconsistent(
    task_code: TaskCode,
    step: PendingStep,
    source: RecordStoreError,
) -> TaskLifecycleError {
    error!(task_code = %task_code, step = %step, error = %source, "task and log stores disagree");
    TaskLifecycleError::Inconsistent {
        task_code,
        step,
        source,
    }
}
