//! Header names of the ledger columns.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Header name for each event field. Unset entries use the GED export names.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ColumnConfig {
    pub deposit_date: Option<String>,
    pub document_type: Option<String>,
    pub project: Option<String>,
    pub emitter: Option<String>,
    pub lot: Option<String>,
    pub revision_index: Option<String>,
    pub added_by: Option<String>,
    pub document_label: Option<String>,
}

impl ColumnConfig {
    pub fn effective_deposit_date(&self) -> &str {
        self.deposit_date.as_deref().unwrap_or(COLUMN_DEPOSIT_DATE)
    }

    pub fn effective_document_type(&self) -> &str {
        self.document_type.as_deref().unwrap_or(COLUMN_DOCUMENT_TYPE)
    }

    pub fn effective_project(&self) -> &str {
        self.project.as_deref().unwrap_or(COLUMN_PROJECT)
    }

    pub fn effective_emitter(&self) -> &str {
        self.emitter.as_deref().unwrap_or(COLUMN_EMITTER)
    }

    pub fn effective_lot(&self) -> &str {
        self.lot.as_deref().unwrap_or(COLUMN_LOT)
    }

    pub fn effective_revision_index(&self) -> &str {
        self.revision_index.as_deref().unwrap_or(COLUMN_REVISION_INDEX)
    }

    pub fn effective_added_by(&self) -> &str {
        self.added_by.as_deref().unwrap_or(COLUMN_ADDED_BY)
    }

    pub fn effective_document_label(&self) -> &str {
        self.document_label.as_deref().unwrap_or(COLUMN_DOCUMENT_LABEL)
    }
}
