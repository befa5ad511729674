//! Ledger logic
//!
//! The services build on the storage layer: the month index derives the
//! buckets present in the store, views project month-filtered slices that
//! carry canonical indices, the summary module aggregates, and the `Ledger`
//! applies validated mutations.

pub mod ledger;
pub mod months;
pub mod summary;
pub mod view;

pub use ledger::{Ledger, RecordDraft};
pub use months::{bucket_labels, month_keys, resolve_selection, ALL_TIME};
pub use summary::{kind_totals, Summary};
pub use view::{MonthFilter, RecordView, ViewEntry};
