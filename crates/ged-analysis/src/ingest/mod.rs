//! Record normalizer: decodes raw ledger bytes, validates the header
//! schema once, and turns every row into a `DocumentEvent`.
//!
//! This is the single entry point every aggregation depends on. Missing
//! required columns abort the load; row-level problems are counted in a
//! `NormalizationReport` and never drop the row from non-temporal views.

pub mod decode;
pub mod ledger;
pub mod normalizer;
pub mod schema;
pub mod types;

pub use decode::decode;
pub use ledger::{distinct_values, Ledger};
pub use normalizer::{load_bytes, load_path, normalize_rows, normalize_str, RecordNormalizer};
pub use schema::LedgerSchema;
pub use types::{NormalizationReport, NormalizedRows, RawRow};
