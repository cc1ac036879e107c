//! Document deposit events and the identity key used for lineage.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single document deposit, validated at normalization time.
///
/// `deposit_date` is `None` when the source value did not parse; such events
/// stay in the ledger and take part in every non-temporal aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentEvent {
    pub project: String,
    pub emitter: String,
    pub document_type: String,
    pub lot: String,
    pub revision_index: String,
    pub deposit_date: Option<NaiveDate>,
    pub added_by: String,
    pub document_label: String,
}

impl DocumentEvent {
    /// The `(document_type, lot, document_label)` key grouping successive
    /// revisions of the same document.
    pub fn identity(&self) -> DocumentIdentity {
        DocumentIdentity {
            document_type: self.document_type.clone(),
            lot: self.lot.clone(),
            document_label: self.document_label.clone(),
        }
    }

    pub fn is_dated(&self) -> bool {
        self.deposit_date.is_some()
    }
}

/// Derived lineage key. Ordered by type, then lot, then label.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DocumentIdentity {
    pub document_type: String,
    pub lot: String,
    pub document_label: String,
}

impl std::fmt::Display for DocumentIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} / {} / {}",
            self.document_type, self.lot, self.document_label
        )
    }
}
