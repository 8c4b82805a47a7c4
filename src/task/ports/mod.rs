//! Port contracts for task lifecycle management.
//!
//! Ports define infrastructure-agnostic record store interfaces used by the
//! task lifecycle service.

pub mod repository;

pub use repository::{
    LogRepository, RecordKind, RecordStoreError, RecordStoreResult, TaskRepository,
    UserRepository,
};
