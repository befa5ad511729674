//! Mutation engine
//!
//! The `Ledger` is the only way records enter or leave the store. Adds are
//! validated at this boundary (the store itself accepts anything); deletes
//! take canonical indices only, and a stale out-of-range index is a silent
//! no-op rather than an error. There are no in-place edits: correcting a
//! record means delete-then-add.

use chrono::Local;

use crate::config::Settings;
use crate::error::{SpendlogError, SpendlogResult};
use crate::models::{Record, RecordKind};
use crate::storage::RecordStore;

use super::months;
use super::view::{MonthFilter, RecordView};

/// Raw field values for a new record, as entered by the user
///
/// Everything arrives as text except the kind, which the presentation layer
/// has already narrowed to the two permitted values.
#[derive(Debug, Clone, Default)]
pub struct RecordDraft {
    pub amount: String,
    pub kind: RecordKind,
    pub category: String,
    pub note: String,
    pub date: String,
}

/// The ledger: canonical record sequence plus the mutations allowed on it
#[derive(Debug)]
pub struct Ledger {
    store: RecordStore,
    date_format: String,
}

impl Ledger {
    /// Open the ledger over `store`, using `settings` for date substitution
    pub fn new(store: RecordStore, settings: &Settings) -> Self {
        Self {
            store,
            date_format: settings.date_format.clone(),
        }
    }

    /// All records in canonical order
    pub fn records(&self) -> &[Record] {
        self.store.records()
    }

    /// Number of records in the store
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Build a view for a bucket label
    pub fn view(&self, label: &str) -> RecordView {
        RecordView::build(self.records(), MonthFilter::from_label(label))
    }

    /// Bucket labels present in the store, `All Time` first
    pub fn bucket_labels(&self) -> Vec<String> {
        months::bucket_labels(self.records())
    }

    /// Validate `draft` and append it at the end of the canonical sequence
    ///
    /// A bad amount is a `Validation` error and leaves the store untouched.
    /// An empty date is substituted with today's date.
    pub fn add(&mut self, draft: RecordDraft) -> SpendlogResult<Record> {
        let amount = parse_amount(&draft.amount)?;

        let date = if draft.date.trim().is_empty() {
            Local::now().format(&self.date_format).to_string()
        } else {
            draft.date.trim().to_string()
        };

        let record = Record::new(
            amount,
            draft.kind,
            draft.category.trim(),
            draft.note.trim(),
            date,
        );
        self.store.append(record.clone())?;
        Ok(record)
    }

    /// Delete the record at `canonical_index`
    ///
    /// Returns `true` if a record was removed. Out-of-range indices are
    /// tolerated as benign staleness: `false`, no mutation, no error. The
    /// index must come from a view pairing, never from a display position.
    pub fn delete(&mut self, canonical_index: usize) -> SpendlogResult<bool> {
        Ok(self.store.remove(canonical_index)?.is_some())
    }

    /// Remove every record (the clear-all trigger)
    pub fn clear(&mut self) -> SpendlogResult<()> {
        self.store.replace(Vec::new())
    }
}

/// Parse a raw amount string: non-empty, numeric, finite, non-negative
fn parse_amount(raw: &str) -> SpendlogResult<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(SpendlogError::Validation("amount is empty".into()));
    }
    let amount: f64 = raw
        .parse()
        .map_err(|_| SpendlogError::Validation(format!("amount is not a number: {}", raw)))?;
    if !amount.is_finite() || amount < 0.0 {
        return Err(SpendlogError::Validation(format!(
            "amount must be a non-negative number: {}",
            raw
        )));
    }
    Ok(amount)
}
