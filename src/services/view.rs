//! Filter views
//!
//! A view is a read-only projection of the store for one month bucket (or the
//! whole store). Every entry carries the record's canonical index, the index
//! it holds in the full unfiltered store. Display order reverses the entries
//! without touching those indices, so a row picked off a filtered,
//! newest-first listing still names the right record for deletion.

use crate::models::{MonthKey, Record};

use super::months::ALL_TIME;

/// Which slice of the store a view covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    /// Every record, including those with malformed dates
    AllTime,
    /// Only records whose derived month key equals this one
    Month(MonthKey),
}

impl MonthFilter {
    /// Parse a bucket label coming back from the selector
    ///
    /// Unknown labels fall back to `AllTime`, mirroring the selector's own
    /// reset-to-default behavior.
    pub fn from_label(label: &str) -> Self {
        if label == ALL_TIME {
            return Self::AllTime;
        }
        match MonthKey::from_label(label) {
            Some(key) => Self::Month(key),
            None => Self::AllTime,
        }
    }

    /// The label this filter answers to
    pub fn label(&self) -> String {
        match self {
            Self::AllTime => ALL_TIME.to_string(),
            Self::Month(key) => key.label(),
        }
    }

    /// Whether `record` belongs to this filter's slice
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Self::AllTime => true,
            Self::Month(key) => MonthKey::from_date(&record.date) == Some(*key),
        }
    }
}

/// One displayed record paired with its canonical store index
#[derive(Debug, Clone, PartialEq)]
pub struct ViewEntry {
    /// Position in the full unfiltered store; the only valid delete handle
    pub index: usize,
    pub record: Record,
}

/// A filtered projection of the store
#[derive(Debug, Clone)]
pub struct RecordView {
    filter: MonthFilter,
    entries: Vec<ViewEntry>,
}

impl RecordView {
    /// Build the view for `filter` over the current store contents
    pub fn build(records: &[Record], filter: MonthFilter) -> Self {
        let entries = records
            .iter()
            .enumerate()
            .filter(|(_, record)| filter.matches(record))
            .map(|(index, record)| ViewEntry {
                index,
                record: record.clone(),
            })
            .collect();
        Self { filter, entries }
    }

    /// The filter this view was built for
    pub fn filter(&self) -> MonthFilter {
        self.filter
    }

    /// Entries in canonical (insertion) order
    pub fn entries(&self) -> &[ViewEntry] {
        &self.entries
    }

    /// Entries in display order: most recently added first
    pub fn display_order(&self) -> impl Iterator<Item = &ViewEntry> {
        self.entries.iter().rev()
    }

    /// The records themselves, canonical order, for aggregation
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.entries.iter().map(|entry| &entry.record)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
