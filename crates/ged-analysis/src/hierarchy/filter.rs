//! Revision-index selection.

use std::collections::BTreeSet;

use ged_core::models::DocumentEvent;
use serde::{Deserialize, Serialize};

/// Exact set membership over `revision_index`. An empty selection passes
/// every event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexFilter {
    selected: BTreeSet<String>,
}

impl IndexFilter {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selected: values.into_iter().map(Into::into).collect(),
        }
    }

    /// A filter that passes everything.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn matches(&self, event: &DocumentEvent) -> bool {
        self.selected.is_empty() || self.selected.contains(&event.revision_index)
    }

    /// Events passing the filter, in input order.
    pub fn apply<'a>(&self, events: &'a [DocumentEvent]) -> Vec<&'a DocumentEvent> {
        events.iter().filter(|e| self.matches(e)).collect()
    }
}
