//! Record model
//!
//! One income or expense entry. Records carry no identifier of their own:
//! identity is the record's position in the insertion-ordered store.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a record adds to income or expense totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// Money coming in
    Income,
    /// Money going out
    #[default]
    Expense,
}

impl RecordKind {
    /// Label used for chart pairs and CSV rows
    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(format!("unknown record kind: {}", other)),
        }
    }
}

/// A single ledger entry
///
/// Field names mirror the durable JSON format: `type` on disk maps to `kind`.
/// The `date` field is free text, `DD/MM/YYYY` by convention but unvalidated;
/// a malformed date only excludes the record from month buckets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Non-negative amount; sign is carried by `kind`, never by the number
    pub amount: f64,

    /// Free-form note, may be empty
    #[serde(default)]
    pub note: String,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: RecordKind,

    /// Short category label, not validated against any fixed set
    #[serde(default)]
    pub category: String,

    /// Calendar date as entered, `DD/MM/YYYY` by convention
    #[serde(default)]
    pub date: String,
}

impl Record {
    /// Create a record with all fields
    pub fn new(
        amount: f64,
        kind: RecordKind,
        category: impl Into<String>,
        note: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            note: note.into(),
            kind,
            category: category.into(),
            date: date.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse() {
        assert_eq!("income".parse::<RecordKind>().unwrap(), RecordKind::Income);
        assert_eq!(
            " Expense ".parse::<RecordKind>().unwrap(),
            RecordKind::Expense
        );
        assert!("transfer".parse::<RecordKind>().is_err());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(RecordKind::Income.to_string(), "income");
        assert_eq!(RecordKind::Expense.to_string(), "expense");
    }

    #[test]
    fn test_serialization_uses_type_key() {
        let record = Record::new(100.0, RecordKind::Income, "Salary", "", "01/05/2024");
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"type\":\"income\""));

        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_missing_text_fields_default_empty() {
        let json = r#"{"amount": 12.5, "type": "expense"}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.amount, 12.5);
        assert_eq!(record.kind, RecordKind::Expense);
        assert!(record.note.is_empty());
        assert!(record.category.is_empty());
        assert!(record.date.is_empty());
    }
}
