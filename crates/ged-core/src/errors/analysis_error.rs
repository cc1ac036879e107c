//! Errors raised by aggregation requests with invalid parameters.

use super::error_code::{self, GedErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("grouping needs one or two fields, got {levels}")]
    InvalidGrouping { levels: usize },

    #[error("unknown event field: {name}")]
    UnknownField { name: String },

    #[error("unknown analysis window: {name} (expected 6m, 12m or all)")]
    UnknownWindow { name: String },
}

impl GedErrorCode for AnalysisError {
    fn error_code(&self) -> &'static str {
        error_code::ANALYSIS_ERROR
    }
}
