//! Delimited text file record stores.
//!
//! Each record kind lives in its own file inside a data directory: a
//! header line followed by one record per line, fields in fixed order.
//! Files are accessed through a capability handle on the data directory,
//! so store paths cannot escape it.
//!
//! Reads are tolerant: lines with the wrong field count are skipped, as are
//! lines whose fields fail to parse. Appends add a single line; updates and
//! deletions rewrite the whole file, preserving record order and the
//! header.

mod codec;
mod file;

pub use codec::{DecodeError, DelimitedRecord};
pub use file::DelimitedFile;

use std::sync::Arc;

use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use crate::config::StoreConfig;
use crate::task::{
    domain::{LogEntry, Task, TaskCode, User, UserCode},
    ports::{
        LogRepository, RecordKind, RecordStoreError, RecordStoreResult, TaskRepository,
        UserRepository,
    },
};

/// User store backed by a delimited file.
#[derive(Debug)]
pub struct DelimitedUserRepository {
    file: DelimitedFile<User>,
}

/// Task store backed by a delimited file.
#[derive(Debug)]
pub struct DelimitedTaskRepository {
    file: DelimitedFile<Task>,
}

/// Log store backed by a delimited file.
#[derive(Debug)]
pub struct DelimitedLogRepository {
    file: DelimitedFile<LogEntry>,
}

/// The three record stores opened from one [`StoreConfig`].
#[derive(Debug)]
pub struct DelimitedStores {
    /// User store.
    pub users: DelimitedUserRepository,
    /// Task store.
    pub tasks: DelimitedTaskRepository,
    /// Log store.
    pub logs: DelimitedLogRepository,
}

impl DelimitedStores {
    /// Opens the configured data directory and its store files.
    ///
    /// Missing store files are created containing only their header.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::Persistence`] when the directory cannot
    /// be opened, the delimiter is invalid, or a store file cannot be
    /// created.
    pub fn open(config: &StoreConfig) -> RecordStoreResult<Self> {
        let dir = Dir::open_ambient_dir(config.data_dir(), ambient_authority())
            .map_err(RecordStoreError::persistence)?;
        Self::open_in(dir, config)
    }

    /// Opens the store files named by `config` inside an already-open
    /// directory. The configured data directory is ignored.
    ///
    /// # Errors
    ///
    /// Same as [`DelimitedStores::open`], minus directory access.
    pub fn open_in(dir: Dir, config: &StoreConfig) -> RecordStoreResult<Self> {
        let delimiter = config
            .delimiter_byte()
            .map_err(RecordStoreError::persistence)?;
        let shared = Arc::new(dir);
        let stores = Self {
            users: DelimitedUserRepository {
                file: DelimitedFile::new(Arc::clone(&shared), config.users_file(), delimiter),
            },
            tasks: DelimitedTaskRepository {
                file: DelimitedFile::new(Arc::clone(&shared), config.tasks_file(), delimiter),
            },
            logs: DelimitedLogRepository {
                file: DelimitedFile::new(shared, config.logs_file(), delimiter),
            },
        };
        stores.users.file.ensure_exists()?;
        stores.tasks.file.ensure_exists()?;
        stores.logs.file.ensure_exists()?;
        Ok(stores)
    }
}

impl UserRepository for DelimitedUserRepository {
    fn find_all(&self) -> RecordStoreResult<Vec<User>> {
        self.file.read_all()
    }

    fn find_by_code(&self, code: UserCode) -> RecordStoreResult<Option<User>> {
        Ok(self
            .file
            .read_all()?
            .into_iter()
            .find(|user| user.code() == code))
    }

    fn save(&self, user: &User) -> RecordStoreResult<()> {
        if self.find_by_code(user.code())?.is_some() {
            return Err(RecordStoreError::DuplicateKey {
                kind: RecordKind::User,
                key: user.code().value(),
            });
        }
        self.file.append(user)
    }
}

impl TaskRepository for DelimitedTaskRepository {
    fn find_all(&self) -> RecordStoreResult<Vec<Task>> {
        self.file.read_all()
    }

    fn find_by_code(&self, code: TaskCode) -> RecordStoreResult<Option<Task>> {
        Ok(self
            .file
            .read_all()?
            .into_iter()
            .find(|task| task.code() == code))
    }

    fn save(&self, task: &Task) -> RecordStoreResult<()> {
        if self.find_by_code(task.code())?.is_some() {
            return Err(RecordStoreError::DuplicateKey {
                kind: RecordKind::Task,
                key: task.code().value(),
            });
        }
        self.file.append(task)
    }

    fn update(&self, task: &Task) -> RecordStoreResult<()> {
        let mut tasks = self.file.read_all()?;
        let stored = tasks
            .iter_mut()
            .find(|stored| stored.code() == task.code())
            .ok_or(RecordStoreError::NotFound {
                kind: RecordKind::Task,
                key: task.code().value(),
            })?;
        *stored = task.clone();
        self.file.rewrite(&tasks)
    }

    fn delete_by_code(&self, code: TaskCode) -> RecordStoreResult<()> {
        let mut tasks = self.file.read_all()?;
        let before = tasks.len();
        tasks.retain(|task| task.code() != code);
        if tasks.len() == before {
            return Err(RecordStoreError::NotFound {
                kind: RecordKind::Task,
                key: code.value(),
            });
        }
        self.file.rewrite(&tasks)
    }
}

impl LogRepository for DelimitedLogRepository {
    fn find_all(&self) -> RecordStoreResult<Vec<LogEntry>> {
        self.file.read_all()
    }

    fn find_by_task_code(&self, task_code: TaskCode) -> RecordStoreResult<Vec<LogEntry>> {
        let mut entries = self.file.read_all()?;
        entries.retain(|entry| entry.task_code() == task_code);
        Ok(entries)
    }

    fn save(&self, entry: &LogEntry) -> RecordStoreResult<()> {
        self.file.append(entry)
    }

    fn delete_by_task_code(&self, task_code: TaskCode) -> RecordStoreResult<usize> {
        let mut entries = self.file.read_all()?;
        let before = entries.len();
        entries.retain(|entry| entry.task_code() != task_code);
        let removed = before - entries.len();
        if removed > 0 {
            self.file.rewrite(&entries)?;
        }
        Ok(removed)
    }
}
