//! Core data models
//!
//! Records are the atomic unit of the ledger; month keys are the derived
//! buckets used for filtering and reporting.

pub mod month;
pub mod record;

pub use month::MonthKey;
pub use record::{Record, RecordKind};
