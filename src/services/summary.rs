//! Aggregation
//!
//! Computes income/expense/balance totals and chart-ready kind totals over
//! any record collection. Raw numbers only; formatting belongs to the
//! display layer.

use crate::models::{Record, RecordKind};

/// Income, expense, and balance totals for a record collection
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Summary {
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
}

impl Summary {
    /// Summarize any collection of records; empty input yields all zeros
    pub fn of<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let mut income = 0.0;
        let mut expense = 0.0;
        for record in records {
            match record.kind {
                RecordKind::Income => income += record.amount,
                RecordKind::Expense => expense += record.amount,
            }
        }
        Self {
            income,
            expense,
            balance: income - expense,
        }
    }
}

/// Chart-ready (kind, total) pairs: one bar per kind
pub fn kind_totals<'a, I>(records: I) -> [(RecordKind, f64); 2]
where
    I: IntoIterator<Item = &'a Record>,
{
    let summary = Summary::of(records);
    [
        (RecordKind::Income, summary.income),
        (RecordKind::Expense, summary.expense),
    ]
}
