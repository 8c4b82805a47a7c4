//! User records referenced by tasks and log entries.

use super::UserCode;
use serde::{Deserialize, Serialize};

/// A registered user.
///
/// Users are read-only from the task lifecycle's point of view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    code: UserCode,
    name: String,
}

impl User {
    /// Creates a user record.
    #[must_use]
    pub fn new(code: UserCode, name: impl Into<String>) -> Self {
        Self {
            code,
            name: name.into(),
        }
    }

    /// Returns the user code.
    #[must_use]
    pub const fn code(&self) -> UserCode {
        self.code
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
