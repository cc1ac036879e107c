//! Normalizer input and output types.

use ged_core::models::DocumentEvent;
use ged_core::types::collections::BTreeMap;
use serde::{Deserialize, Serialize};

/// One raw input row: header name → field text.
pub type RawRow = BTreeMap<String, String>;

/// Row-level diagnostics gathered while normalizing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationReport {
    /// Data rows read from the source, dropped rows included.
    pub rows_read: u64,
    /// Rows whose record could not be read at all.
    pub rows_dropped: u64,
    /// Rows kept with a null deposit date.
    pub unparsable_dates: u64,
    /// Rows kept with at least one empty required categorical value.
    pub missing_values: u64,
    /// Optional columns absent from the header (filled with empty strings).
    pub missing_optional_columns: Vec<String>,
}

impl NormalizationReport {
    /// Rows that made it into the ledger.
    pub fn rows_kept(&self) -> u64 {
        self.rows_read - self.rows_dropped
    }

    /// True when no row needed any correction.
    pub fn is_clean(&self) -> bool {
        self.rows_dropped == 0 && self.unparsable_dates == 0 && self.missing_values == 0
    }
}

/// Normalizer output: events in input order plus diagnostics.
#[derive(Debug, Clone, Default)]
pub struct NormalizedRows {
    pub events: Vec<DocumentEvent>,
    pub report: NormalizationReport,
}
