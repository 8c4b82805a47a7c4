//! Unit tests for the task lifecycle module.


use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;

/// Clock pinned to noon local time on a fixed date.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FixedClock(DateTime<Local>);

impl FixedClock {
    pub(crate) fn on(date: NaiveDate) -> Self {
        let noon = date.and_hms_opt(12, 0, 0).expect("noon is a valid time");
        let local = Local
            .from_local_datetime(&noon)
            .earliest()
            .expect("noon exists in the local time zone");
        Self(local)
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0.with_timezone(&Utc)
    }
}

pub(crate) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 14).expect("valid calendar date")
}
