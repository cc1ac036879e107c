//! Fatal load errors.

use std::path::PathBuf;

use super::error_code::{self, GedErrorCode};

/// Errors that abort loading a ledger.
///
/// Row-level problems (unparsable dates, empty values) are never reported
/// here; they are counted in the normalization report instead.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("required column missing from header: {column}")]
    MissingColumn { column: String },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed input near line {line}: {message}")]
    Csv { line: u64, message: String },

    #[error("unsupported text encoding: {label}")]
    UnsupportedEncoding { label: String },

    #[error("input has no header row")]
    EmptyInput,
}

impl GedErrorCode for LoadError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingColumn { .. } => error_code::MISSING_COLUMN,
            Self::UnsupportedEncoding { .. } => error_code::UNSUPPORTED_ENCODING,
            Self::Io { .. } => error_code::IO_ERROR,
            _ => error_code::LOAD_ERROR,
        }
    }
}
