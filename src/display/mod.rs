//! Terminal formatting helpers
//!
//! All formatting decisions (grouping separators, two-decimal rounding,
//! currency symbol) live here, driven by an explicit `Settings` argument.
//! The services return raw numbers and know nothing about presentation.

use num_format::{Locale, ToFormattedString};

use crate::config::Settings;
use crate::models::RecordKind;
use crate::services::{Summary, ViewEntry};

/// Width of the longest bar in the text chart
const CHART_WIDTH: usize = 30;

/// Format an amount as `$1,234.56` (symbol from settings)
pub fn format_amount(amount: f64, settings: &Settings) -> String {
    let cents_total = (amount * 100.0).round() as i64;
    let negative = cents_total < 0;
    let cents_total = cents_total.abs();

    let whole = (cents_total / 100).to_formatted_string(&Locale::en);
    let cents = cents_total % 100;

    let sign = if negative { "-" } else { "" };
    format!("{}{}{}.{:02}", sign, settings.currency_symbol, whole, cents)
}

/// Format one view entry as a listing row
///
/// The leading bracketed number is the record's canonical index, the handle
/// to pass to `delete`. The `+`/`-` tag distinguishes income from expense.
pub fn format_record_row(entry: &ViewEntry, settings: &Settings) -> String {
    let record = &entry.record;
    let tag = match record.kind {
        RecordKind::Income => '+',
        RecordKind::Expense => '-',
    };
    format!(
        "[{:>3}] {:10} | {}{:7} {:>12} | {} | {}",
        entry.index,
        record.date,
        tag,
        record.kind,
        format_amount(record.amount, settings),
        record.category,
        record.note
    )
}

/// Format the income/expense/balance block
pub fn format_summary(summary: &Summary, settings: &Settings) -> String {
    format!(
        "Income:  {}\nExpense: {}\nBalance: {}\n",
        format_amount(summary.income, settings),
        format_amount(summary.expense, settings),
        format_amount(summary.balance, settings)
    )
}

/// Render (kind, total) pairs as labelled text bars
pub fn format_kind_chart(totals: &[(RecordKind, f64)], settings: &Settings) -> String {
    let max = totals.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);

    let mut output = String::new();
    for (kind, value) in totals {
        let width = if max > 0.0 {
            ((value / max) * CHART_WIDTH as f64).round() as usize
        } else {
            0
        };
        output.push_str(&format!(
            "{:8} {:<width$} {}\n",
            kind.label(),
            "#".repeat(width),
            format_amount(*value, settings),
            width = CHART_WIDTH
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;

    #[test]
    fn test_format_amount_grouping_and_decimals() {
        let settings = Settings::default();
        assert_eq!(format_amount(1234.5, &settings), "$1,234.50");
        assert_eq!(format_amount(0.0, &settings), "$0.00");
        assert_eq!(format_amount(1_000_000.0, &settings), "$1,000,000.00");
    }

    #[test]
    fn test_format_amount_negative_balance() {
        let settings = Settings::default();
        assert_eq!(format_amount(-42.25, &settings), "-$42.25");
    }

    #[test]
    fn test_format_amount_custom_symbol() {
        let settings = Settings {
            currency_symbol: "฿".to_string(),
            ..Settings::default()
        };
        assert_eq!(format_amount(50.0, &settings), "฿50.00");
    }

    #[test]
    fn test_record_row_carries_canonical_index_and_tag() {
        let settings = Settings::default();
        let entry = ViewEntry {
            index: 7,
            record: Record::new(40.0, RecordKind::Expense, "Food", "lunch", "15/05/2024"),
        };
        let row = format_record_row(&entry, &settings);
        assert!(row.starts_with("[  7]"));
        assert!(row.contains("-expense"));
        assert!(row.contains("$40.00"));
        assert!(row.contains("lunch"));
    }

    #[test]
    fn test_summary_block() {
        let settings = Settings::default();
        let summary = Summary {
            income: 100.0,
            expense: 40.0,
            balance: 60.0,
        };
        let block = format_summary(&summary, &settings);
        assert!(block.contains("Income:  $100.00"));
        assert!(block.contains("Balance: $60.00"));
    }

    #[test]
    fn test_chart_scales_to_largest_total() {
        let settings = Settings::default();
        let chart = format_kind_chart(
            &[(RecordKind::Income, 100.0), (RecordKind::Expense, 50.0)],
            &settings,
        );
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].matches('#').count() == CHART_WIDTH);
        assert!(lines[1].matches('#').count() == CHART_WIDTH / 2);
    }

    #[test]
    fn test_chart_all_zero_draws_no_bars() {
        let settings = Settings::default();
        let chart = format_kind_chart(
            &[(RecordKind::Income, 0.0), (RecordKind::Expense, 0.0)],
            &settings,
        );
        assert!(!chart.contains('#'));
    }
}
