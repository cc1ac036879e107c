//! Monthly bucketing and cumulative series.

use ged_core::models::{DocumentEvent, EventField};
use ged_core::types::collections::{BTreeMap, FxHashMap, FxHashSet};

use super::period::YearMonth;
use super::types::{TemporalPoint, TemporalSeries};
use crate::ingest::distinct_values;

/// Build one monthly series per selected document type.
///
/// Series follow the selection order (duplicates ignored). Undated events
/// are skipped. A type without dated events yields an empty series; an
/// empty selection yields no series.
pub fn monthly_series<S: AsRef<str>>(
    events: &[DocumentEvent],
    selected_types: &[S],
) -> Vec<TemporalSeries> {
    let mut seen = FxHashSet::default();
    let selection: Vec<&str> = selected_types
        .iter()
        .map(|t| t.as_ref())
        .filter(|t| seen.insert(*t))
        .collect();
    if selection.is_empty() {
        return Vec::new();
    }

    let mut buckets: FxHashMap<&str, BTreeMap<YearMonth, u64>> =
        selection.iter().map(|t| (*t, BTreeMap::new())).collect();
    for event in events {
        let Some(date) = event.deposit_date else {
            continue;
        };
        if let Some(months) = buckets.get_mut(event.document_type.as_str()) {
            *months.entry(YearMonth::of(date)).or_insert(0) += 1;
        }
    }

    selection
        .into_iter()
        .map(|document_type| {
            let mut cumulative = 0;
            let points = buckets
                .remove(document_type)
                .unwrap_or_default()
                .into_iter()
                .map(|(period, count)| {
                    cumulative += count;
                    TemporalPoint {
                        period,
                        count,
                        cumulative,
                    }
                })
                .collect();
            TemporalSeries {
                document_type: document_type.to_string(),
                points,
            }
        })
        .collect()
}

/// Document types present in `events`, in first-seen order.
pub fn document_types(events: &[DocumentEvent]) -> Vec<String> {
    distinct_values(events, EventField::DocumentType)
}
