//! Categorical fields of a `DocumentEvent`, addressable by name.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::event::DocumentEvent;
use crate::errors::AnalysisError;

/// A categorical field of a document event.
///
/// Used as a grouping key by the hierarchical aggregator and as the
/// dimension of flow graph nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventField {
    Project,
    Emitter,
    DocumentType,
    Lot,
    RevisionIndex,
    AddedBy,
    DocumentLabel,
}

impl EventField {
    /// Snake-case name of the field.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Emitter => "emitter",
            Self::DocumentType => "document_type",
            Self::Lot => "lot",
            Self::RevisionIndex => "revision_index",
            Self::AddedBy => "added_by",
            Self::DocumentLabel => "document_label",
        }
    }

    /// Borrow this field's value from an event.
    pub fn value_of<'a>(&self, event: &'a DocumentEvent) -> &'a str {
        match self {
            Self::Project => &event.project,
            Self::Emitter => &event.emitter,
            Self::DocumentType => &event.document_type,
            Self::Lot => &event.lot,
            Self::RevisionIndex => &event.revision_index,
            Self::AddedBy => &event.added_by,
            Self::DocumentLabel => &event.document_label,
        }
    }

    pub fn all() -> &'static [EventField] {
        &[
            Self::Project,
            Self::Emitter,
            Self::DocumentType,
            Self::Lot,
            Self::RevisionIndex,
            Self::AddedBy,
            Self::DocumentLabel,
        ]
    }
}

impl std::fmt::Display for EventField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EventField {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::all()
            .iter()
            .copied()
            .find(|f| f.name() == wanted)
            .or(match wanted.as_str() {
                "type" => Some(Self::DocumentType),
                "index" => Some(Self::RevisionIndex),
                "label" => Some(Self::DocumentLabel),
                _ => None,
            })
            .ok_or_else(|| AnalysisError::UnknownField {
                name: s.to_string(),
            })
    }
}
