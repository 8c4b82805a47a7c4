//! Domain model for task lifecycle management.
//!
//! Tasks move through a fixed linear lifecycle and every change is recorded
//! as a [`LogEntry`]. All infrastructure concerns stay outside the domain
//! boundary.

mod error;
mod ids;
mod log;
mod status;
mod task;
mod user;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{TaskCode, TaskName, UserCode};
pub use log::LogEntry;
pub use status::TaskStatus;
pub use task::{PersistedTaskData, Task};
pub use user::User;
