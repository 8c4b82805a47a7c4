//! Application services for task lifecycle orchestration.

mod lifecycle;

pub use lifecycle::{
    AdvanceStatusRequest, CreateTaskRequest, ErrorKind, PendingStep, TaskLifecycleError,
    TaskLifecycleResult, TaskLifecycleService, TaskListing,
};
