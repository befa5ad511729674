//! Month bucket keys
//!
//! A `MonthKey` is the derived (month, year) grouping used for filtering and
//! reporting. It is never stored: it is parsed out of a record's `date` field,
//! and a date that does not split into exactly three slash-delimited numeric
//! parts yields no key at all, so malformed dates fail closed instead of
//! mis-sorting.

use std::fmt;

/// A (month, year) bucket derived from a record date
///
/// Ordering is by parsed integers, year first, so unpadded months like
/// `5/2024` still sort chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    /// Derive the bucket for a `DD/MM/YYYY`-style date string
    ///
    /// Returns `None` unless the string splits into exactly three parts with
    /// numeric month and year; such records belong to no bucket.
    pub fn from_date(date: &str) -> Option<Self> {
        let parts: Vec<&str> = date.split('/').collect();
        if parts.len() != 3 {
            return None;
        }
        let month: u32 = parts[1].trim().parse().ok()?;
        let year: i32 = parts[2].trim().parse().ok()?;
        Some(Self { year, month })
    }

    /// Parse a `MM/YYYY` bucket label back into a key
    pub fn from_label(label: &str) -> Option<Self> {
        let parts: Vec<&str> = label.split('/').collect();
        if parts.len() != 2 {
            return None;
        }
        let month: u32 = parts[0].trim().parse().ok()?;
        let year: i32 = parts[1].trim().parse().ok()?;
        Some(Self { year, month })
    }

    /// The zero-padded `MM/YYYY` label shown in bucket listings
    pub fn label(&self) -> String {
        format!("{:02}/{:04}", self.month, self.year)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:04}", self.month, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_date_well_formed() {
        let key = MonthKey::from_date("15/05/2024").unwrap();
        assert_eq!(key.month, 5);
        assert_eq!(key.year, 2024);
    }

    #[test]
    fn test_from_date_unpadded_month() {
        let key = MonthKey::from_date("1/5/2024").unwrap();
        assert_eq!(key.month, 5);
        assert_eq!(key.label(), "05/2024");
    }

    #[test]
    fn test_from_date_malformed() {
        assert!(MonthKey::from_date("").is_none());
        assert!(MonthKey::from_date("2024-05-15").is_none());
        assert!(MonthKey::from_date("15/05").is_none());
        assert!(MonthKey::from_date("15/05/2024/extra").is_none());
        assert!(MonthKey::from_date("15/May/2024").is_none());
    }

    #[test]
    fn test_label_round_trip() {
        let key = MonthKey { year: 2024, month: 6 };
        assert_eq!(MonthKey::from_label(&key.label()), Some(key));
        assert!(MonthKey::from_label("All Time").is_none());
    }

    #[test]
    fn test_ordering_year_before_month() {
        let dec_2023 = MonthKey { year: 2023, month: 12 };
        let jan_2024 = MonthKey { year: 2024, month: 1 };
        let jun_2024 = MonthKey { year: 2024, month: 6 };
        assert!(dec_2023 < jan_2024);
        assert!(jan_2024 < jun_2024);
    }
}
