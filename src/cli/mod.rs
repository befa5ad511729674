//! Command handlers for the spendlog binary
//!
//! Each handler takes the ledger and settings explicitly and prints to
//! stdout. The binary in `main.rs` only parses arguments and dispatches.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::config::{Settings, SpendlogPaths};
use crate::display;
use crate::error::{SpendlogError, SpendlogResult};
use crate::export::export_records_csv;
use crate::models::RecordKind;
use crate::services::{kind_totals, months, Ledger, RecordDraft, Summary, ALL_TIME};

/// Handle `spendlog add`
pub fn handle_add(
    ledger: &mut Ledger,
    amount: String,
    kind: String,
    category: Option<String>,
    note: Option<String>,
    date: Option<String>,
) -> SpendlogResult<()> {
    let kind: RecordKind = kind.parse().map_err(SpendlogError::Validation)?;

    let record = ledger.add(RecordDraft {
        amount,
        kind,
        category: category.unwrap_or_default(),
        note: note.unwrap_or_default(),
        date: date.unwrap_or_default(),
    })?;

    println!("Added {} {} on {}", record.kind, record.amount, record.date);
    Ok(())
}

/// Handle `spendlog list`
pub fn handle_list(
    ledger: &Ledger,
    settings: &Settings,
    month: Option<String>,
) -> SpendlogResult<()> {
    let label = resolve_label(ledger, month);
    let view = ledger.view(&label);

    if view.is_empty() {
        println!("No records for {}.", label);
        return Ok(());
    }

    println!("Records for {}:", label);
    for entry in view.display_order() {
        println!("{}", display::format_record_row(entry, settings));
    }
    Ok(())
}

/// Handle `spendlog summary`
pub fn handle_summary(
    ledger: &Ledger,
    settings: &Settings,
    month: Option<String>,
) -> SpendlogResult<()> {
    let label = resolve_label(ledger, month);
    let view = ledger.view(&label);
    let summary = Summary::of(view.records());

    println!("Summary for {}:", label);
    print!("{}", display::format_summary(&summary, settings));
    Ok(())
}

/// Handle `spendlog months`
pub fn handle_months(ledger: &Ledger) -> SpendlogResult<()> {
    for label in ledger.bucket_labels() {
        println!("{}", label);
    }
    Ok(())
}

/// Handle `spendlog report`
///
/// Month-scoped totals plus the two-bar income/expense chart. Defaults to
/// the most recent month bucket; a requested month that is not present also
/// falls back to the freshest bucket.
pub fn handle_report(
    ledger: &Ledger,
    settings: &Settings,
    month: Option<String>,
) -> SpendlogResult<()> {
    let labels = ledger.bucket_labels();
    let freshest = match labels.get(1) {
        Some(label) => label.clone(),
        None => {
            println!("No dated records to report on.");
            return Ok(());
        }
    };

    let label = match month {
        Some(requested) if labels.contains(&requested) => requested,
        _ => freshest,
    };

    let view = ledger.view(&label);
    let summary = Summary::of(view.records());
    let totals = kind_totals(view.records());

    println!("Report for {}:", label);
    print!("{}", display::format_summary(&summary, settings));
    println!();
    print!("{}", display::format_kind_chart(&totals, settings));
    Ok(())
}

/// Handle `spendlog delete`
pub fn handle_delete(ledger: &mut Ledger, index: usize) -> SpendlogResult<()> {
    if ledger.delete(index)? {
        println!("Deleted record {}.", index);
    } else {
        // Stale index from an outdated listing; nothing was removed.
        println!("No record at index {}; nothing deleted.", index);
    }
    Ok(())
}

/// Handle `spendlog export`
pub fn handle_export(ledger: &Ledger, output: Option<&Path>) -> SpendlogResult<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| SpendlogError::Export(format!("{}: {}", path.display(), e)))?;
            export_records_csv(ledger.records(), file)?;
            println!("Exported {} records to {}", ledger.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            export_records_csv(ledger.records(), &mut handle)?;
            handle.flush().map_err(|e| SpendlogError::Export(e.to_string()))?;
        }
    }
    Ok(())
}

/// Handle `spendlog clear`
pub fn handle_clear(ledger: &mut Ledger) -> SpendlogResult<()> {
    ledger.clear()?;
    println!("Cleared all records.");
    Ok(())
}

/// Handle `spendlog config`
pub fn handle_config(paths: &SpendlogPaths, settings: &Settings) -> SpendlogResult<()> {
    println!("Data directory:  {}", paths.base_dir().display());
    println!("Records file:    {}", paths.records_file().display());
    println!("Settings file:   {}", paths.settings_file().display());
    println!("Currency symbol: {}", settings.currency_symbol);
    println!("Date format:     {}", settings.date_format);
    Ok(())
}

/// Resolve an optional `--month` argument against the buckets actually
/// present, resetting to `All Time` when the bucket is gone
fn resolve_label(ledger: &Ledger, month: Option<String>) -> String {
    match month {
        Some(label) => months::resolve_selection(ledger.records(), &label),
        None => ALL_TIME.to_string(),
    }
}
