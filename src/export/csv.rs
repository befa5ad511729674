//! CSV export
//!
//! Serializes the full store to flat tabular text, one row per record in
//! canonical order. Write failures are surfaced to the caller with their
//! cause; there is no engine-level rollback or retry, the destination keeps
//! whatever partial state the underlying storage left.

use std::io::Write;

use crate::error::{SpendlogError, SpendlogResult};
use crate::models::Record;

/// Export records as CSV with a fixed five-column header
///
/// Missing fields render as empty strings; amounts render minimally (`100`,
/// not `100.00`). Quoting follows the CSV default rules.
pub fn export_records_csv<W: Write>(records: &[Record], writer: W) -> SpendlogResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["Date", "Type", "Category", "Amount", "Note"])
        .map_err(|e| SpendlogError::Export(e.to_string()))?;

    for record in records {
        let amount = format_raw_amount(record.amount);
        csv_writer
            .write_record([
                record.date.as_str(),
                record.kind.label(),
                record.category.as_str(),
                amount.as_str(),
                record.note.as_str(),
            ])
            .map_err(|e| SpendlogError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| SpendlogError::Export(e.to_string()))?;
    Ok(())
}

/// Render an amount without padding: whole numbers lose the decimal point
fn format_raw_amount(amount: f64) -> String {
    // f64 Display already picks the shortest round-trip form
    format!("{}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordKind;

    fn sample_records() -> Vec<Record> {
        vec![
            Record::new(100.0, RecordKind::Income, "", "", "01/05/2024"),
            Record::new(40.0, RecordKind::Expense, "Food", "", "15/05/2024"),
            Record::new(10.0, RecordKind::Expense, "Travel", "", "02/06/2024"),
        ]
    }

    #[test]
    fn test_header_plus_one_row_per_record() {
        let mut output = Vec::new();
        export_records_csv(&sample_records(), &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Date,Type,Category,Amount,Note");
        assert_eq!(lines[1], "01/05/2024,income,,100,");
    }

    #[test]
    fn test_rows_follow_canonical_order() {
        let mut output = Vec::new();
        export_records_csv(&sample_records(), &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[2].starts_with("15/05/2024,expense,Food"));
        assert!(lines[3].starts_with("02/06/2024,expense,Travel"));
    }

    #[test]
    fn test_empty_store_exports_header_only() {
        let mut output = Vec::new();
        export_records_csv(&[], &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_fractional_amount_kept() {
        let records = vec![Record::new(12.5, RecordKind::Expense, "", "", "01/05/2024")];
        let mut output = Vec::new();
        export_records_csv(&records, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains(",12.5,"));
    }

    #[test]
    fn test_note_with_comma_is_quoted() {
        let records = vec![Record::new(
            5.0,
            RecordKind::Expense,
            "Food",
            "lunch, with friends",
            "01/05/2024",
        )];
        let mut output = Vec::new();
        export_records_csv(&records, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("\"lunch, with friends\""));
    }
}
