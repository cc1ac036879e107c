//! Top-level error aggregating every subsystem error.

use super::error_code::GedErrorCode;
use super::{AnalysisError, ConfigError, LoadError};

#[derive(Debug, thiserror::Error)]
pub enum GedError {
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),
}

impl GedErrorCode for GedError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Load(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Analysis(e) => e.error_code(),
        }
    }
}

pub type GedResult<T> = Result<T, GedError>;
