//! A single header-prefixed delimited file holding one record kind.

use std::io::Write;
use std::marker::PhantomData;
use std::sync::Arc;

use cap_std::fs::OpenOptions;
use cap_std::fs_utf8::Dir;
use csv::{ReaderBuilder, Terminator, Trim, WriterBuilder};
use tracing::{debug, warn};

use super::codec::DelimitedRecord;
use crate::task::ports::{RecordStoreError, RecordStoreResult};

/// Reads, appends to, and rewrites one store file inside a data directory.
#[derive(Debug)]
pub struct DelimitedFile<R> {
    dir: Arc<Dir>,
    file_name: String,
    delimiter: u8,
    record: PhantomData<fn() -> R>,
}

impl<R: DelimitedRecord> DelimitedFile<R> {
    /// Binds a store file inside `dir`.
    #[must_use]
    pub fn new(dir: Arc<Dir>, file_name: impl Into<String>, delimiter: u8) -> Self {
        Self {
            dir,
            file_name: file_name.into(),
            delimiter,
            record: PhantomData,
        }
    }

    /// Returns the file name within the data directory.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Creates the file containing only its header when it is missing.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::Persistence`] when the file cannot be
    /// created.
    pub fn ensure_exists(&self) -> RecordStoreResult<()> {
        if self.dir.exists(&self.file_name) {
            return Ok(());
        }
        debug!(file = %self.file_name, kind = %R::KIND, "creating record store file");
        self.rewrite(&[])
    }

    /// Reads every well-formed record in file order.
    ///
    /// The header line is skipped. Lines with the wrong number of fields
    /// are skipped silently; lines with unparseable fields are skipped with
    /// a warning.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::Persistence`] when the file cannot be read.
    pub fn read_all(&self) -> RecordStoreResult<Vec<R>> {
        let contents = self
            .dir
            .read_to_string(&self.file_name)
            .map_err(RecordStoreError::persistence)?;
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(contents.as_bytes());

        let mut records = Vec::new();
        for result in reader.records() {
            let row = match result {
                Ok(row) => row,
                Err(err) => {
                    warn!(file = %self.file_name, error = %err, "skipping unreadable line");
                    continue;
                }
            };
            if row.len() != R::HEADER.len() {
                continue;
            }
            match R::from_fields(&row) {
                Ok(record) => records.push(record),
                Err(err) => warn!(
                    file = %self.file_name,
                    line = ?row.position().map(csv::Position::line),
                    error = %err,
                    "skipping unparseable record"
                ),
            }
        }
        Ok(records)
    }

    /// Appends one record as a new line.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::Persistence`] when the file cannot be
    /// read or written.
    pub fn append(&self, record: &R) -> RecordStoreResult<()> {
        self.ensure_exists()?;
        let existing = self
            .dir
            .read_to_string(&self.file_name)
            .map_err(RecordStoreError::persistence)?;
        let mut line = Vec::new();
        if !existing.is_empty() && !existing.ends_with('\n') {
            line.push(b'\n');
        }
        line.extend(self.encode(std::iter::once(record.to_fields()))?);

        let mut options = OpenOptions::new();
        options.append(true);
        let mut file = self
            .dir
            .open_with(&self.file_name, &options)
            .map_err(RecordStoreError::persistence)?;
        file.write_all(&line).map_err(RecordStoreError::persistence)
    }

    /// Replaces the file contents with the header followed by `records`.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::Persistence`] when the file cannot be
    /// written.
    pub fn rewrite(&self, records: &[R]) -> RecordStoreResult<()> {
        let header: Vec<String> = R::HEADER.iter().map(|column| (*column).to_owned()).collect();
        let rows = std::iter::once(header).chain(records.iter().map(R::to_fields));
        let contents = self.encode(rows)?;
        debug!(
            file = %self.file_name,
            records = records.len(),
            "rewriting record store file"
        );
        self.dir
            .write(&self.file_name, contents)
            .map_err(RecordStoreError::persistence)
    }

    fn encode(&self, rows: impl IntoIterator<Item = Vec<String>>) -> RecordStoreResult<Vec<u8>> {
        let mut writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(Vec::new());
        for row in rows {
            writer
                .write_record(&row)
                .map_err(RecordStoreError::persistence)?;
        }
        writer
            .into_inner()
            .map_err(|err| RecordStoreError::persistence(err.into_error()))
    }
}
