//! Configuration for the delimited-file record stores.
//!
//! A [`StoreConfig`] names the data directory, the three store files, and
//! the field delimiter. It can be built in code or loaded from JSON:
//!
//! ```json
//! {
//!   "data_dir": "/var/lib/taskapp",
//!   "tasks_file": "tasks.csv",
//!   "delimiter": ","
//! }
//! ```
//!
//! Omitted file names and the delimiter fall back to their defaults.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::fs_utf8::Dir;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_USERS_FILE: &str = "users.csv";
const DEFAULT_TASKS_FILE: &str = "tasks.csv";
const DEFAULT_LOGS_FILE: &str = "logs.csv";
const DEFAULT_DELIMITER: char = ',';

/// Errors raised while building or loading a [`StoreConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read store config: {0}")]
    Read(#[source] std::io::Error),
    /// The configuration file is not valid JSON for a store config.
    #[error("failed to parse store config: {0}")]
    Parse(#[from] serde_json::Error),
    /// The delimiter cannot separate single-line fields.
    #[error("invalid delimiter {0:?}, expected a single-byte ASCII character other than a quote or line break")]
    InvalidDelimiter(char),
}

/// Location and layout of the delimited-file record stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    data_dir: Utf8PathBuf,
    #[serde(default = "default_users_file")]
    users_file: String,
    #[serde(default = "default_tasks_file")]
    tasks_file: String,
    #[serde(default = "default_logs_file")]
    logs_file: String,
    #[serde(default = "default_delimiter")]
    delimiter: char,
}

fn default_users_file() -> String {
    DEFAULT_USERS_FILE.to_owned()
}

fn default_tasks_file() -> String {
    DEFAULT_TASKS_FILE.to_owned()
}

fn default_logs_file() -> String {
    DEFAULT_LOGS_FILE.to_owned()
}

const fn default_delimiter() -> char {
    DEFAULT_DELIMITER
}

impl StoreConfig {
    /// Creates a configuration with default file names and delimiter.
    #[must_use]
    pub fn new(data_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            users_file: default_users_file(),
            tasks_file: default_tasks_file(),
            logs_file: default_logs_file(),
            delimiter: DEFAULT_DELIMITER,
        }
    }

    /// Parses and validates a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::InvalidDelimiter`] for an unusable delimiter.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.delimiter_byte()?;
        Ok(config)
    }

    /// Reads a JSON configuration file from a capability directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read, otherwise
    /// the errors of [`StoreConfig::from_json_str`].
    pub fn load(dir: &Dir, file_name: &str) -> Result<Self, ConfigError> {
        let contents = dir.read_to_string(file_name).map_err(ConfigError::Read)?;
        Self::from_json_str(&contents)
    }

    /// Overrides the users file name.
    #[must_use]
    pub fn with_users_file(mut self, file_name: impl Into<String>) -> Self {
        self.users_file = file_name.into();
        self
    }

    /// Overrides the tasks file name.
    #[must_use]
    pub fn with_tasks_file(mut self, file_name: impl Into<String>) -> Self {
        self.tasks_file = file_name.into();
        self
    }

    /// Overrides the logs file name.
    #[must_use]
    pub fn with_logs_file(mut self, file_name: impl Into<String>) -> Self {
        self.logs_file = file_name.into();
        self
    }

    /// Overrides the field delimiter.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDelimiter`] when the delimiter is not a
    /// single-byte ASCII character, or is a quote or line break.
    pub fn with_delimiter(mut self, delimiter: char) -> Result<Self, ConfigError> {
        self.delimiter = delimiter;
        self.delimiter_byte()?;
        Ok(self)
    }

    /// Returns the data directory.
    #[must_use]
    pub fn data_dir(&self) -> &Utf8Path {
        &self.data_dir
    }

    /// Returns the users file name.
    #[must_use]
    pub fn users_file(&self) -> &str {
        &self.users_file
    }

    /// Returns the tasks file name.
    #[must_use]
    pub fn tasks_file(&self) -> &str {
        &self.tasks_file
    }

    /// Returns the logs file name.
    #[must_use]
    pub fn logs_file(&self) -> &str {
        &self.logs_file
    }

    /// Returns the delimiter as the byte written between fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDelimiter`] when the delimiter cannot be
    /// used.
    pub fn delimiter_byte(&self) -> Result<u8, ConfigError> {
        let invalid = ConfigError::InvalidDelimiter(self.delimiter);
        if matches!(self.delimiter, '"' | '\n' | '\r') {
            return Err(invalid);
        }
        u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or(invalid)
    }
}
