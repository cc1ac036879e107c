//! Temporal aggregator: monthly deposit counts per document type and
//! their cumulative transform, plus first-deposit comparison windows.
//!
//! Series are sparse: a month without deposits has no point.

pub mod period;
pub mod series;
pub mod types;
pub mod window;

pub use period::YearMonth;
pub use series::{document_types, monthly_series};
pub use types::{flatten, TemporalPoint, TemporalRow, TemporalSeries};
pub use window::{filter_window, WindowedEvents};
