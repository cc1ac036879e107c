//! Names of the load diagnostics, shared by log fields and adapter output.
//!
//! Ingest logs these as tracing fields; the CLI summary uses the same keys.

/// Data rows read from the source.
pub const ROWS_READ: &str = "rows_read";

/// Rows dropped because the record could not be read.
pub const ROWS_DROPPED: &str = "rows_dropped";

/// Rows whose deposit date did not parse.
pub const UNPARSABLE_DATES: &str = "unparsable_dates";

/// Rows with at least one empty categorical value.
pub const MISSING_VALUES: &str = "missing_values";

/// xxh3 content hash of the raw source bytes.
pub const CONTENT_HASH: &str = "content_hash";
