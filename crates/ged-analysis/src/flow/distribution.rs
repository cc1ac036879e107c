//! Revision-index share of a project's events.

use ged_core::constants::PERCENTAGE_DECIMALS;
use ged_core::models::DocumentEvent;
use ged_core::types::collections::FxHashMap;
use serde::{Deserialize, Serialize};

/// One revision-index value with its share of all events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexShare {
    pub value: String,
    pub count: u64,
    /// Percentage of all events, rounded to two decimals.
    pub percentage: f64,
    /// `"<value> (<percentage>%)"`.
    pub label: String,
}

/// Share of every distinct revision index, most frequent first.
///
/// Ties keep first-appearance order. The empty index is a value like any other.
pub fn index_distribution(events: &[DocumentEvent]) -> Vec<IndexShare> {
    if events.is_empty() {
        return Vec::new();
    }

    let mut positions: FxHashMap<&str, usize> = FxHashMap::default();
    let mut counts: Vec<(&str, u64)> = Vec::new();
    for event in events {
        let value = event.revision_index.as_str();
        match positions.get(value) {
            Some(&pos) => counts[pos].1 += 1,
            None => {
                positions.insert(value, counts.len());
                counts.push((value, 1));
            }
        }
    }
    // Stable: equal counts stay in first-seen order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let total = events.len() as f64;
    counts
        .into_iter()
        .map(|(value, count)| {
            let percentage = round_percentage(count as f64 / total * 100.0);
            IndexShare {
                value: value.to_string(),
                count,
                percentage,
                label: annotate(value, percentage),
            }
        })
        .collect()
}

/// Render an index value with its percentage, e.g. `"A (60.00%)"`.
pub fn annotate(value: &str, percentage: f64) -> String {
    format!(
        "{value} ({percentage:.prec$}%)",
        prec = PERCENTAGE_DECIMALS
    )
}

fn round_percentage(raw: f64) -> f64 {
    let scale = 10f64.powi(PERCENTAGE_DECIMALS as i32);
    (raw * scale).round() / scale
}
