//! Error handling for the GED engine.
//! One error enum per subsystem, `thiserror` only.

pub mod analysis_error;
pub mod config_error;
pub mod error_code;
pub mod ged_error;
pub mod load_error;

pub use analysis_error::AnalysisError;
pub use config_error::ConfigError;
pub use error_code::GedErrorCode;
pub use ged_error::{GedError, GedResult};
pub use load_error::LoadError;
