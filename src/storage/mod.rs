//! JSON file storage layer
//!
//! The whole ledger lives in one JSON array, read fully and written back
//! fully. Record identity is the index in that array, so the store preserves
//! insertion order exactly and never reorders on save.

pub mod file_io;

use std::path::{Path, PathBuf};

use crate::error::SpendlogResult;
use crate::models::Record;

use file_io::{read_json_or_default, write_json_atomic};

/// Insertion-ordered record store backed by a single JSON file
///
/// Loading a missing or corrupt file yields an empty store; corruption is
/// treated as "no data yet" and never surfaced. Saving rewrites the whole
/// file atomically.
#[derive(Debug)]
pub struct RecordStore {
    path: PathBuf,
    records: Vec<Record>,
}

impl RecordStore {
    /// Open the store at `path`, loading whatever is there
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let records = read_json_or_default(&path);
        Self { path, records }
    }

    /// The backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All records in canonical (insertion) order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a record at the end of the canonical sequence and persist
    pub fn append(&mut self, record: Record) -> SpendlogResult<()> {
        self.records.push(record);
        self.save()
    }

    /// Remove the record at `index` and persist; `None` if out of range
    pub fn remove(&mut self, index: usize) -> SpendlogResult<Option<Record>> {
        if index >= self.records.len() {
            return Ok(None);
        }
        let removed = self.records.remove(index);
        self.save()?;
        Ok(Some(removed))
    }

    /// Replace the whole collection and persist
    pub fn replace(&mut self, records: Vec<Record>) -> SpendlogResult<()> {
        self.records = records;
        self.save()
    }

    /// Rewrite the backing file from the in-memory collection
    pub fn save(&self) -> SpendlogResult<()> {
        write_json_atomic(&self.path, &self.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordKind;
    use std::fs;
    use tempfile::TempDir;

    fn record(amount: f64, kind: RecordKind, date: &str) -> Record {
        Record::new(amount, kind, "", "", date)
    }

    #[test]
    fn test_open_missing_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = RecordStore::open(temp_dir.path().join("records.json"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_open_corrupt_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("records.json");
        fs::write(&path, "{ definitely not an array").unwrap();

        let store = RecordStore::open(&path);
        assert!(store.is_empty());
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("records.json");

        let mut store = RecordStore::open(&path);
        store
            .append(record(100.0, RecordKind::Income, "01/05/2024"))
            .unwrap();
        store
            .append(record(40.0, RecordKind::Expense, "15/05/2024"))
            .unwrap();

        let reloaded = RecordStore::open(&path);
        assert_eq!(reloaded.records(), store.records());
    }

    #[test]
    fn test_remove_preserves_order() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = RecordStore::open(temp_dir.path().join("records.json"));
        store
            .append(record(1.0, RecordKind::Income, "01/05/2024"))
            .unwrap();
        store
            .append(record(2.0, RecordKind::Expense, "02/05/2024"))
            .unwrap();
        store
            .append(record(3.0, RecordKind::Expense, "03/05/2024"))
            .unwrap();

        let removed = store.remove(1).unwrap().unwrap();
        assert_eq!(removed.amount, 2.0);
        assert_eq!(store.records()[0].amount, 1.0);
        assert_eq!(store.records()[1].amount, 3.0);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = RecordStore::open(temp_dir.path().join("records.json"));
        store
            .append(record(1.0, RecordKind::Income, "01/05/2024"))
            .unwrap();

        assert!(store.remove(5).unwrap().is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_replace_with_empty_clears_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("records.json");
        let mut store = RecordStore::open(&path);
        store
            .append(record(1.0, RecordKind::Income, "01/05/2024"))
            .unwrap();

        store.replace(Vec::new()).unwrap();
        assert!(RecordStore::open(&path).is_empty());
    }
}
