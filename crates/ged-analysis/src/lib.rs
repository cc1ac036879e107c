//! # ged-analysis
//!
//! Aggregation engine for GED document-deposit ledgers.
//!
//! Pipeline: raw bytes → [`ingest`] → `Ledger` of `DocumentEvent`s, then
//! independent pure analyses over those events:
//! - [`temporal`]: monthly and cumulative deposit series per document type
//! - [`flow`]: project → emitter → type → index weighted graph
//! - [`hierarchy`]: one- or two-level grouped counts
//! - [`lineage`]: per-document version timelines and lot date ranges
//! - [`comparison`]: cross-project volume over a first-deposit window
//!
//! [`engine::GedEngine`] ties loading to the content-keyed [`cache`].

pub mod cache;
pub mod comparison;
pub mod engine;
pub mod flow;
pub mod hierarchy;
pub mod ingest;
pub mod lineage;
pub mod temporal;

pub use comparison::{compare_projects, ProjectVolume};
pub use engine::GedEngine;
pub use flow::{build_flow_graph, FlowGraph};
pub use hierarchy::{aggregate, aggregate_by_year, GroupOrder, Grouping, IndexFilter};
pub use ingest::{Ledger, NormalizationReport};
pub use lineage::{analyze, lot_summary, LineageRecord, LineageReport};
pub use temporal::{filter_window, monthly_series, TemporalSeries};
