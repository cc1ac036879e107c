//! The normalized event collection of one source.

use ged_core::models::{DocumentEvent, EventField};
use ged_core::types::collections::FxHashSet;

use super::types::NormalizationReport;

/// Normalized events of one source plus their load diagnostics.
///
/// Immutable once built; share it behind an `Arc` across analyses.
#[derive(Debug, Clone)]
pub struct Ledger {
    /// Source name (file path or upload name).
    pub source: String,
    /// xxh3 hash of the raw source bytes.
    pub content_hash: u64,
    pub events: Vec<DocumentEvent>,
    pub report: NormalizationReport,
}

impl Ledger {
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Distinct projects, in first-seen order.
    pub fn projects(&self) -> Vec<String> {
        distinct_values(&self.events, EventField::Project)
    }

    /// Events of a single project, in input order.
    pub fn for_project(&self, project: &str) -> Vec<DocumentEvent> {
        self.events
            .iter()
            .filter(|e| e.project == project)
            .cloned()
            .collect()
    }

    /// Split the ledger into per-project collections, projects in first-seen order.
    pub fn split_by_project(&self) -> Vec<(String, Vec<DocumentEvent>)> {
        self.projects()
            .into_iter()
            .map(|p| {
                let events = self.for_project(&p);
                (p, events)
            })
            .collect()
    }
}

/// Distinct values of `field`, in first-seen order. Empty strings are values too.
pub fn distinct_values(events: &[DocumentEvent], field: EventField) -> Vec<String> {
    let mut seen = FxHashSet::default();
    let mut values = Vec::new();
    for event in events {
        let value = field.value_of(event);
        if seen.insert(value) {
            values.push(value.to_string());
        }
    }
    values
}
