//! Shared test helpers for in-memory store integration tests.

use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;
use taskapp::task::{
    adapters::memory::{InMemoryLogRepository, InMemoryTaskRepository, InMemoryUserRepository},
    domain::{User, UserCode},
    services::TaskLifecycleService,
};

/// Clock returning noon on 2024-05-14 in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedClock;

impl FixedClock {
    /// Date every log entry is stamped with.
    #[must_use]
    pub fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 14).unwrap_or_default()
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        let noon = Self::date().and_hms_opt(12, 0, 0).unwrap_or_default();
        Local
            .from_local_datetime(&noon)
            .earliest()
            .unwrap_or_else(Local::now)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.local().with_timezone(&Utc)
    }
}

/// Service type wired to in-memory stores.
pub type MemoryService = TaskLifecycleService<
    InMemoryUserRepository,
    InMemoryTaskRepository,
    InMemoryLogRepository,
    FixedClock,
>;

/// Service plus handles on its task and log stores.
pub struct Stores {
    /// Service under test.
    pub service: MemoryService,
    /// Task store shared with the service.
    pub tasks: Arc<InMemoryTaskRepository>,
    /// Log store shared with the service.
    pub logs: Arc<InMemoryLogRepository>,
}

/// Alice owns code 100.
pub const ALICE: u32 = 100;
/// Bob owns code 200.
pub const BOB: u32 = 200;

/// Provides a service over stores seeded with Alice and Bob.
#[fixture]
pub fn stores() -> Stores {
    let tasks = Arc::new(InMemoryTaskRepository::new());
    let logs = Arc::new(InMemoryLogRepository::new());
    let service = TaskLifecycleService::new(
        Arc::new(InMemoryUserRepository::with_users([
            User::new(UserCode::new(ALICE), "Alice"),
            User::new(UserCode::new(BOB), "Bob"),
        ])),
        Arc::clone(&tasks),
        Arc::clone(&logs),
        Arc::new(FixedClock),
    );
    Stores {
        service,
        tasks,
        logs,
    }
}
