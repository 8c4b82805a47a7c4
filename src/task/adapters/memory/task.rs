//! In-memory repository for task records.

use std::sync::{Arc, RwLock};

use super::lock_error;
use crate::task::{
    domain::{Task, TaskCode},
    ports::{RecordKind, RecordStoreError, RecordStoreResult, TaskRepository},
};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<Vec<Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

const fn not_found(code: TaskCode) -> RecordStoreError {
    RecordStoreError::NotFound {
        kind: RecordKind::Task,
        key: code.value(),
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn find_all(&self) -> RecordStoreResult<Vec<Task>> {
        let tasks = self.tasks.read().map_err(|err| lock_error(&err))?;
        Ok(tasks.clone())
    }

    fn find_by_code(&self, code: TaskCode) -> RecordStoreResult<Option<Task>> {
        let tasks = self.tasks.read().map_err(|err| lock_error(&err))?;
        Ok(tasks.iter().find(|task| task.code() == code).cloned())
    }

    fn save(&self, task: &Task) -> RecordStoreResult<()> {
        let mut tasks = self.tasks.write().map_err(|err| lock_error(&err))?;
        if tasks.iter().any(|stored| stored.code() == task.code()) {
            return Err(RecordStoreError::DuplicateKey {
                kind: RecordKind::Task,
                key: task.code().value(),
            });
        }
        tasks.push(task.clone());
        Ok(())
    }

    fn update(&self, task: &Task) -> RecordStoreResult<()> {
        let mut tasks = self.tasks.write().map_err(|err| lock_error(&err))?;
        let stored = tasks
            .iter_mut()
            .find(|stored| stored.code() == task.code())
            .ok_or_else(|| not_found(task.code()))?;
        *stored = task.clone();
        Ok(())
    }

    fn delete_by_code(&self, code: TaskCode) -> RecordStoreResult<()> {
        let mut tasks = self.tasks.write().map_err(|err| lock_error(&err))?;
        let before = tasks.len();
        tasks.retain(|task| task.code() != code);
        if tasks.len() == before {
            return Err(not_found(code));
        }
        Ok(())
    }
}
