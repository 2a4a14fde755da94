use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use shared_types::{CandidateRecord, CANDIDATE_COLUMNS};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::NamedTempFile;

use super::StoreError;

/// CSV-backed candidate dataset.
///
/// Appends rewrite the whole file (read all, add one, write all) through a temp
/// file and rename. The cycle is serialized within the process; a single writer
/// process per dataset is assumed.
pub struct CsvRecordStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl CsvRecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Add `record` as the last row, keeping every existing row verbatim
    pub fn append(&self, record: &CandidateRecord) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().map_err(|_| StoreError::Poisoned)?;

        let mut rows = if self.path.exists() {
            self.read_rows()?
        } else {
            Vec::new()
        };
        rows.push(StringRecord::from(&record.to_row()[..]));

        self.write_rows(&rows)
    }

    /// All stored records, oldest first
    pub fn load_all(&self) -> Result<Vec<CandidateRecord>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let headers = StringRecord::from(&CANDIDATE_COLUMNS[..]);
        self.read_rows()?
            .iter()
            .map(|row| row.deserialize(Some(&headers)).map_err(StoreError::from))
            .collect()
    }

    fn read_rows(&self) -> Result<Vec<StringRecord>, StoreError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)?;

        let headers = reader.headers()?.clone();
        if !headers.iter().eq(CANDIDATE_COLUMNS.iter().copied()) {
            return Err(StoreError::SchemaMismatch {
                path: self.path.display().to_string(),
                found: headers.iter().collect::<Vec<_>>().join(","),
            });
        }

        let mut rows = Vec::new();
        for result in reader.records() {
            rows.push(result?);
        }

        Ok(rows)
    }

    fn write_rows(&self, rows: &[StringRecord]) -> Result<(), StoreError> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        let temp = NamedTempFile::new_in(parent)?;
        {
            let mut writer = WriterBuilder::new().from_writer(temp.as_file());
            writer.write_record(CANDIDATE_COLUMNS)?;
            for row in rows {
                writer.write_record(row)?;
            }
            writer.flush()?;
        }
        temp.as_file().sync_all()?;

        temp.persist(&self.path).map_err(|e| StoreError::Persist {
            path: self.path.display().to_string(),
            source: e.error,
        })?;

        tracing::debug!("Wrote {} rows to {:?}", rows.len(), self.path);
        Ok(())
    }
}
