//! First-deposit comparison windows.

use chrono::{Duration, NaiveDate};
use ged_core::models::{AnalysisWindow, DocumentEvent};
use serde::Serialize;

/// Events inside a window plus the window bounds.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WindowedEvents {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub events: Vec<DocumentEvent>,
}

/// Keep the dated events within `window` of the earliest deposit.
///
/// The window is `[first, first + days]` for fixed windows and
/// `[first, last]` for `All`, bounds inclusive. Undated events never fall
/// inside a window; with no dated events the result is empty and unbounded.
pub fn filter_window(events: &[DocumentEvent], window: AnalysisWindow) -> WindowedEvents {
    let dates = events.iter().filter_map(|e| e.deposit_date);
    let Some(start) = dates.clone().min() else {
        return WindowedEvents::default();
    };
    let end = match window.days() {
        Some(days) => start + Duration::days(days),
        None => dates.max().unwrap_or(start),
    };

    let events = events
        .iter()
        .filter(|e| matches!(e.deposit_date, Some(d) if d >= start && d <= end))
        .cloned()
        .collect();

    WindowedEvents {
        start: Some(start),
        end: Some(end),
        events,
    }
}
