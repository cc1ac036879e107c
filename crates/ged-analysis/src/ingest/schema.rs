//! Header validation: column names → field positions.

use ged_core::config::ColumnConfig;
use ged_core::errors::LoadError;

/// Positions of each event field within a record.
///
/// The six fields the aggregations depend on are required; `added_by` and
/// `document_label` are optional and read as empty strings when absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerSchema {
    pub deposit_date: usize,
    pub document_type: usize,
    pub project: usize,
    pub emitter: usize,
    pub lot: usize,
    pub revision_index: usize,
    pub added_by: Option<usize>,
    pub document_label: Option<usize>,
}

impl LedgerSchema {
    /// Resolve configured column names against a header row.
    ///
    /// Names match after trimming whitespace and a leading byte-order mark.
    /// Extra columns are ignored; if a name repeats, the first one wins.
    pub fn resolve<S: AsRef<str>>(headers: &[S], columns: &ColumnConfig) -> Result<Self, LoadError> {
        let normalized: Vec<&str> = headers
            .iter()
            .map(|h| h.as_ref().trim_start_matches('\u{feff}').trim())
            .collect();
        let find = |name: &str| normalized.iter().position(|h| *h == name.trim());
        let require = |name: &str| {
            find(name).ok_or_else(|| LoadError::MissingColumn {
                column: name.to_string(),
            })
        };

        Ok(Self {
            deposit_date: require(columns.effective_deposit_date())?,
            document_type: require(columns.effective_document_type())?,
            project: require(columns.effective_project())?,
            emitter: require(columns.effective_emitter())?,
            lot: require(columns.effective_lot())?,
            revision_index: require(columns.effective_revision_index())?,
            added_by: find(columns.effective_added_by()),
            document_label: find(columns.effective_document_label()),
        })
    }

    /// Configured names of the optional columns missing from the header.
    pub fn missing_optional(&self, columns: &ColumnConfig) -> Vec<String> {
        let mut missing = Vec::new();
        if self.added_by.is_none() {
            missing.push(columns.effective_added_by().to_string());
        }
        if self.document_label.is_none() {
            missing.push(columns.effective_document_label().to_string());
        }
        missing
    }
}
