//! Field layouts for the delimited store files.

use chrono::NaiveDate;
use csv::StringRecord;
use thiserror::Error;

use crate::task::{
    domain::{LogEntry, PersistedTaskData, Task, TaskCode, TaskName, TaskStatus, User, UserCode},
    ports::RecordKind,
};

/// A record field could not be decoded.
#[derive(Debug, Error)]
#[error("field {field}: {message}")]
pub struct DecodeError {
    field: &'static str,
    message: String,
}

impl DecodeError {
    const fn new(field: &'static str, message: String) -> Self {
        Self { field, message }
    }
}

/// A record kind that maps onto one line of a delimited file.
pub trait DelimitedRecord: Sized {
    /// Record kind stored in the file.
    const KIND: RecordKind;

    /// Header line column names, in field order.
    const HEADER: &'static [&'static str];

    /// Encodes the record into fields in header order.
    fn to_fields(&self) -> Vec<String>;

    /// Decodes a record whose field count already matches the header.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] when a field holds an unparseable value.
    fn from_fields(record: &StringRecord) -> Result<Self, DecodeError>;
}

fn field<'r>(
    record: &'r StringRecord,
    index: usize,
    name: &'static str,
) -> Result<&'r str, DecodeError> {
    record
        .get(index)
        .ok_or_else(|| DecodeError::new(name, "missing".to_owned()))
}

fn parse_u32(record: &StringRecord, index: usize, name: &'static str) -> Result<u32, DecodeError> {
    field(record, index, name)?
        .parse::<u32>()
        .map_err(|err| DecodeError::new(name, err.to_string()))
}

fn parse_status(
    record: &StringRecord,
    index: usize,
    name: &'static str,
) -> Result<TaskStatus, DecodeError> {
    let raw = field(record, index, name)?
        .parse::<u8>()
        .map_err(|err| DecodeError::new(name, err.to_string()))?;
    TaskStatus::try_from(raw).map_err(|err| DecodeError::new(name, err.to_string()))
}

impl DelimitedRecord for User {
    const KIND: RecordKind = RecordKind::User;
    const HEADER: &'static [&'static str] = &["Code", "Name"];

    fn to_fields(&self) -> Vec<String> {
        vec![self.code().to_string(), self.name().to_owned()]
    }

    fn from_fields(record: &StringRecord) -> Result<Self, DecodeError> {
        let code = UserCode::new(parse_u32(record, 0, "Code")?);
        let name = field(record, 1, "Name")?;
        Ok(Self::new(code, name))
    }
}

impl DelimitedRecord for Task {
    const KIND: RecordKind = RecordKind::Task;
    const HEADER: &'static [&'static str] = &["Code", "Name", "Status", "Rep_User_Code"];

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.code().to_string(),
            self.name().to_string(),
            self.status().code().to_string(),
            self.owner().to_string(),
        ]
    }

    fn from_fields(record: &StringRecord) -> Result<Self, DecodeError> {
        let code = TaskCode::new(parse_u32(record, 0, "Code")?);
        let name = TaskName::new(field(record, 1, "Name")?)
            .map_err(|err| DecodeError::new("Name", err.to_string()))?;
        let status = parse_status(record, 2, "Status")?;
        let owner = UserCode::new(parse_u32(record, 3, "Rep_User_Code")?);
        Ok(Self::from_persisted(PersistedTaskData {
            code,
            name,
            status,
            owner,
        }))
    }
}

impl DelimitedRecord for LogEntry {
    const KIND: RecordKind = RecordKind::Log;
    const HEADER: &'static [&'static str] =
        &["Task_Code", "Change_User_Code", "Status", "Change_Date"];

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.task_code().to_string(),
            self.acting_user().to_string(),
            self.status().code().to_string(),
            self.date().format("%Y-%m-%d").to_string(),
        ]
    }

    fn from_fields(record: &StringRecord) -> Result<Self, DecodeError> {
        let task_code = TaskCode::new(parse_u32(record, 0, "Task_Code")?);
        let acting_user = UserCode::new(parse_u32(record, 1, "Change_User_Code")?);
        let status = parse_status(record, 2, "Status")?;
        let date = NaiveDate::parse_from_str(field(record, 3, "Change_Date")?, "%Y-%m-%d")
            .map_err(|err| DecodeError::new("Change_Date", err.to_string()))?;
        Ok(Self::new(task_code, acting_user, status, date))
    }
}
