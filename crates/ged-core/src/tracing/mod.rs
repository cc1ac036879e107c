//! Structured logging for the GED engine.

pub mod metrics;
pub mod setup;

pub use setup::init_tracing;
