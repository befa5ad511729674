use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use spendlog::cli::{
    handle_add, handle_clear, handle_config, handle_delete, handle_export, handle_list,
    handle_months, handle_report, handle_summary,
};
use spendlog::config::{paths::SpendlogPaths, settings::Settings};
use spendlog::services::Ledger;
use spendlog::storage::RecordStore;

#[derive(Parser)]
#[command(
    name = "spendlog",
    version,
    about = "Command-line personal finance ledger",
    long_about = "spendlog records income and expense entries in a plain JSON \
                  ledger and reports monthly summaries, bucket listings, and \
                  CSV exports from the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new record
    Add {
        /// Amount (non-negative number)
        amount: String,
        /// Record kind: income or expense
        kind: String,
        /// Category label
        #[arg(short, long)]
        category: Option<String>,
        /// Free-form note
        #[arg(short, long)]
        note: Option<String>,
        /// Date (DD/MM/YYYY); defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List records, newest first
    List {
        /// Month bucket (MM/YYYY); defaults to all time
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Show income/expense/balance totals
    Summary {
        /// Month bucket (MM/YYYY); defaults to all time
        #[arg(short, long)]
        month: Option<String>,
    },

    /// List the month buckets present in the ledger
    Months,

    /// Month report: totals plus income/expense chart
    Report {
        /// Month bucket (MM/YYYY); defaults to the most recent month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Delete the record at a canonical index (as shown by `list`)
    Delete {
        /// Canonical record index
        index: usize,
    },

    /// Export all records as CSV
    Export {
        /// Output file; defaults to stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Remove every record from the ledger
    Clear,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = SpendlogPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let store = RecordStore::open(paths.records_file());
    let mut ledger = Ledger::new(store, &settings);

    match cli.command {
        Commands::Add {
            amount,
            kind,
            category,
            note,
            date,
        } => handle_add(&mut ledger, amount, kind, category, note, date)?,
        Commands::List { month } => handle_list(&ledger, &settings, month)?,
        Commands::Summary { month } => handle_summary(&ledger, &settings, month)?,
        Commands::Months => handle_months(&ledger)?,
        Commands::Report { month } => handle_report(&ledger, &settings, month)?,
        Commands::Delete { index } => handle_delete(&mut ledger, index)?,
        Commands::Export { output } => handle_export(&ledger, output.as_deref())?,
        Commands::Clear => handle_clear(&mut ledger)?,
        Commands::Config => handle_config(&paths, &settings)?,
    }

    Ok(())
}
