//! User settings for spendlog
//!
//! Presentation preferences (currency symbol, date format) live here and are
//! passed explicitly to the display functions; the ledger services themselves
//! take no settings and return raw numbers.

use serde::{Deserialize, Serialize};

use super::paths::SpendlogPaths;
use crate::error::SpendlogResult;
use crate::storage::file_io::{read_json_or_default, write_json_atomic};

/// User settings for spendlog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol prefixed to formatted amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format used when substituting today's date (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%d/%m/%Y".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, writing defaults on first run
    pub fn load_or_create(paths: &SpendlogPaths) -> SpendlogResult<Self> {
        let path = paths.settings_file();
        if path.exists() {
            Ok(read_json_or_default(&path))
        } else {
            let settings = Self::default();
            paths.ensure_directories()?;
            write_json_atomic(&path, &settings)?;
            Ok(settings)
        }
    }

    /// Persist settings to disk
    pub fn save(&self, paths: &SpendlogPaths) -> SpendlogResult<()> {
        write_json_atomic(paths.settings_file(), self)
    }
}
