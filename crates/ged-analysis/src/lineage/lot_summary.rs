//! Sequential view of a single lot.

use chrono::NaiveDate;
use ged_core::models::DocumentEvent;
use ged_core::types::collections::BTreeMap;

use super::analyze::{dated_timeline, group_by_identity};
use super::types::{LotSummary, TypeCount, TypeSummary};

#[derive(Default)]
struct TypeAccumulator {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    duration_sum: i64,
    dated_events: u64,
}

/// Summarise one lot: type distribution, per-type deposit period and
/// revision pace, and the dated deposit sequence.
///
/// An unknown lot yields an empty summary.
pub fn lot_summary(events: &[DocumentEvent], lot: &str) -> LotSummary {
    let in_lot: Vec<DocumentEvent> = events.iter().filter(|e| e.lot == lot).cloned().collect();

    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for event in &in_lot {
        *counts.entry(event.document_type.as_str()).or_insert(0) += 1;
    }
    let mut type_distribution: Vec<TypeCount> = counts
        .iter()
        .map(|(document_type, count)| TypeCount {
            document_type: document_type.to_string(),
            count: *count,
        })
        .collect();
    type_distribution.sort_by(|a, b| b.count.cmp(&a.count));

    let mut per_type: BTreeMap<&str, TypeAccumulator> =
        counts.keys().map(|t| (*t, TypeAccumulator::default())).collect();
    for group in group_by_identity(&in_lot).into_values() {
        for (event, date, days) in dated_timeline(&group) {
            if let Some(acc) = per_type.get_mut(event.document_type.as_str()) {
                acc.start = Some(acc.start.map_or(date, |d| d.min(date)));
                acc.end = Some(acc.end.map_or(date, |d| d.max(date)));
                acc.duration_sum += days;
                acc.dated_events += 1;
            }
        }
    }
    let type_summaries = per_type
        .into_iter()
        .map(|(document_type, acc)| TypeSummary {
            document_type: document_type.to_string(),
            start_date: acc.start,
            end_date: acc.end,
            mean_days_between_versions: (acc.dated_events > 0)
                .then(|| acc.duration_sum as f64 / acc.dated_events as f64),
        })
        .collect();

    let mut sequence: Vec<DocumentEvent> =
        in_lot.iter().filter(|e| e.is_dated()).cloned().collect();
    sequence.sort_by_key(|e| e.deposit_date);

    LotSummary {
        lot: lot.to_string(),
        type_distribution,
        type_summaries,
        sequence,
    }
}
