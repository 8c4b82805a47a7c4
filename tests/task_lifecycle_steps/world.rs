//! Shared world state for task lifecycle BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskapp::task::{
    adapters::memory::{InMemoryLogRepository, InMemoryTaskRepository, InMemoryUserRepository},
    services::{TaskLifecycleError, TaskLifecycleService},
};

/// Service type used by the BDD world.
pub type TestTaskService = TaskLifecycleService<
    InMemoryUserRepository,
    InMemoryTaskRepository,
    InMemoryLogRepository,
    DefaultClock,
>;

/// Scenario world for task lifecycle behaviour tests.
pub struct LifecycleWorld {
    pub service: TestTaskService,
    pub users: Arc<InMemoryUserRepository>,
    pub tasks: Arc<InMemoryTaskRepository>,
    pub logs: Arc<InMemoryLogRepository>,
    pub last_result: Option<Result<(), TaskLifecycleError>>,
}

impl LifecycleWorld {
    /// Creates a world over empty in-memory stores.
    #[must_use]
    pub fn new() -> Self {
        let users = Arc::new(InMemoryUserRepository::new());
        let tasks = Arc::new(InMemoryTaskRepository::new());
        let logs = Arc::new(InMemoryLogRepository::new());
        let service = TaskLifecycleService::new(
            Arc::clone(&users),
            Arc::clone(&tasks),
            Arc::clone(&logs),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            users,
            tasks,
            logs,
            last_result: None,
        }
    }
}

impl Default for LifecycleWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> LifecycleWorld {
    LifecycleWorld::default()
}
