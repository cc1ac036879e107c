//! Domain model: one `DocumentEvent` per ledger row.

pub mod event;
pub mod field;
pub mod window;

pub use event::{DocumentEvent, DocumentIdentity};
pub use field::EventField;
pub use window::AnalysisWindow;
