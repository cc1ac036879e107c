//! Lineage analyzer: per-document version timelines and per-lot date ranges.
//!
//! A document is recognised across revisions by its `(type, lot, label)`
//! identity. Undated events count toward an identity's revisions but never
//! toward its dates or durations.

pub mod analyze;
pub mod lot_summary;
pub mod types;

pub use analyze::{analyze, lot_ranges};
pub use lot_summary::lot_summary;
pub use types::{LineageRecord, LineageReport, LotRange, LotSummary, TypeCount, TypeSummary};
