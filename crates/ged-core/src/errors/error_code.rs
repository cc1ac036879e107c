//! GedErrorCode trait for adapter-facing error codes.

/// Trait for converting engine errors to stable error codes.
/// Every error enum implements this so adapters can report a
/// machine-readable code alongside the message.
pub trait GedErrorCode {
    /// Returns the error code string (e.g., "MISSING_COLUMN").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const LOAD_ERROR: &str = "LOAD_ERROR";
pub const MISSING_COLUMN: &str = "MISSING_COLUMN";
pub const UNSUPPORTED_ENCODING: &str = "UNSUPPORTED_ENCODING";
pub const IO_ERROR: &str = "IO_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const ANALYSIS_ERROR: &str = "ANALYSIS_ERROR";
