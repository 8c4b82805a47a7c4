//! In-memory repository for user records.

use std::sync::{Arc, RwLock};

use super::lock_error;
use crate::task::{
    domain::{User, UserCode},
    ports::{RecordKind, RecordStoreError, RecordStoreResult, UserRepository},
};

/// Thread-safe in-memory user repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository seeded with the given users.
    #[must_use]
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: Arc::new(RwLock::new(users.into_iter().collect())),
        }
    }
}

impl UserRepository for InMemoryUserRepository {
    fn find_all(&self) -> RecordStoreResult<Vec<User>> {
        let users = self.users.read().map_err(|err| lock_error(&err))?;
        Ok(users.clone())
    }

    fn find_by_code(&self, code: UserCode) -> RecordStoreResult<Option<User>> {
        let users = self.users.read().map_err(|err| lock_error(&err))?;
        Ok(users.iter().find(|user| user.code() == code).cloned())
    }

    fn save(&self, user: &User) -> RecordStoreResult<()> {
        let mut users = self.users.write().map_err(|err| lock_error(&err))?;
        if users.iter().any(|stored| stored.code() == user.code()) {
            return Err(RecordStoreError::DuplicateKey {
                kind: RecordKind::User,
                key: user.code().value(),
            });
        }
        users.push(user.clone());
        Ok(())
    }
}
