//! In-memory repository for status change log entries.

use std::sync::{Arc, RwLock};

use super::lock_error;
use crate::task::{
    domain::{LogEntry, TaskCode},
    ports::{LogRepository, RecordStoreResult},
};

/// Thread-safe in-memory log repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLogRepository {
    entries: Arc<RwLock<Vec<LogEntry>>>,
}

impl InMemoryLogRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl LogRepository for InMemoryLogRepository {
    fn find_all(&self) -> RecordStoreResult<Vec<LogEntry>> {
        let entries = self.entries.read().map_err(|err| lock_error(&err))?;
        Ok(entries.clone())
    }

    fn find_by_task_code(&self, task_code: TaskCode) -> RecordStoreResult<Vec<LogEntry>> {
        let entries = self.entries.read().map_err(|err| lock_error(&err))?;
        Ok(entries
            .iter()
            .filter(|entry| entry.task_code() == task_code)
            .cloned()
            .collect())
    }

    fn save(&self, entry: &LogEntry) -> RecordStoreResult<()> {
        let mut entries = self.entries.write().map_err(|err| lock_error(&err))?;
        entries.push(entry.clone());
        Ok(())
    }

    fn delete_by_task_code(&self, task_code: TaskCode) -> RecordStoreResult<usize> {
        let mut entries = self.entries.write().map_err(|err| lock_error(&err))?;
        let before = entries.len();
        entries.retain(|entry| entry.task_code() != task_code);
        Ok(before - entries.len())
    }
}
