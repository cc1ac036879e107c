//! # ged-core
//!
//! Foundation crate for the GED ledger analysis engine.
//! Defines the event model, errors, config, tracing setup, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::GedConfig;
pub use errors::{GedError, GedResult};
pub use models::{AnalysisWindow, DocumentEvent, DocumentIdentity, EventField};
