//! In-memory record stores.
//!
//! Records are kept in insertion order so `find_all` matches the storage
//! order a file-backed store would report.

mod log;
mod task;
mod user;

pub use log::InMemoryLogRepository;
pub use task::InMemoryTaskRepository;
pub use user::InMemoryUserRepository;

use crate::task::ports::RecordStoreError;
use std::sync::PoisonError;

fn lock_error<T>(err: &PoisonError<T>) -> RecordStoreError {
    RecordStoreError::persistence(std::io::Error::other(err.to_string()))
}
