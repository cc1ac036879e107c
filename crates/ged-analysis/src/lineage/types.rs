//! Lineage output types.

use chrono::NaiveDate;
use ged_core::constants::INDEX_LIST_SEPARATOR;
use ged_core::models::{DocumentEvent, DocumentIdentity};
use serde::{Deserialize, Serialize};

/// Version timeline of one document identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineageRecord {
    pub identity: DocumentIdentity,
    pub first_version_date: Option<NaiveDate>,
    pub last_version_date: Option<NaiveDate>,
    /// Distinct revision indices, the empty index included.
    pub revision_count: usize,
    /// Sorted, de-duplicated revision indices.
    pub index_list: Vec<String>,
    /// Days since the previous dated event, one entry per dated event in
    /// chronological order; the first entry is 0.
    pub inter_revision_durations: Vec<i64>,
    pub event_count: usize,
    /// Days between the first and last version.
    pub span_days: Option<i64>,
}

impl LineageRecord {
    pub fn index_list_joined(&self) -> String {
        self.index_list.join(INDEX_LIST_SEPARATOR)
    }
}

/// Date range of every event sharing a lot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotRange {
    pub lot: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub event_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineageReport {
    /// Ordered by identity.
    pub records: Vec<LineageRecord>,
    /// Ordered by lot.
    pub lots: Vec<LotRange>,
}

impl LineageReport {
    pub fn record(&self, identity: &DocumentIdentity) -> Option<&LineageRecord> {
        self.records
            .binary_search_by(|r| r.identity.cmp(identity))
            .ok()
            .map(|i| &self.records[i])
    }

    pub fn lot(&self, lot: &str) -> Option<&LotRange> {
        self.lots.iter().find(|l| l.lot == lot)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCount {
    pub document_type: String,
    pub count: u64,
}

/// Deposit period and revision pace of one document type inside a lot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeSummary {
    pub document_type: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Mean of the inter-revision durations of the type's dated events.
    pub mean_days_between_versions: Option<f64>,
}

/// Sequential view of one lot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LotSummary {
    pub lot: String,
    /// Count descending, ties by type name.
    pub type_distribution: Vec<TypeCount>,
    /// Ordered by type name.
    pub type_summaries: Vec<TypeSummary>,
    /// Dated events of the lot in deposit order.
    pub sequence: Vec<DocumentEvent>,
}
