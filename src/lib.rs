//! spendlog - Command-line personal finance ledger
//!
//! This library provides the core functionality for the spendlog ledger:
//! an insertion-ordered store of income/expense records with month-bucketed
//! filtering, summaries, and CSV export.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (records, month buckets)
//! - `storage`: JSON file storage layer
//! - `services`: Ledger logic (month index, filtered views, summaries, mutations)
//! - `display`: Terminal formatting helpers
//! - `export`: CSV export
//! - `cli`: Command handlers for the binary
//!
//! A record's identity is its position in the insertion-ordered store. Views
//! over the store (month-filtered, newest-first) always carry that canonical
//! index alongside each record, and deletion only ever accepts canonical
//! indices, so a filtered or reversed listing can never delete the wrong row.

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{SpendlogError, SpendlogResult};
