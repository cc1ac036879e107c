//! Grouped counting.

use chrono::Datelike;
use ged_core::errors::AnalysisError;
use ged_core::models::{DocumentEvent, EventField};
use ged_core::types::collections::{BTreeMap, SmallVec2};

use super::filter::IndexFilter;
use super::types::{GroupOrder, Grouping, HierarchicalGroup, YearGrouping};

/// Count events per group key over one or two fields.
///
/// Events failing `filter` are skipped. Any other number of fields is an
/// `InvalidGrouping` error.
pub fn aggregate(
    events: &[DocumentEvent],
    filter: &IndexFilter,
    fields: &[EventField],
    order: GroupOrder,
) -> Result<Grouping, AnalysisError> {
    check_levels(fields)?;
    let grouping = count_groups(&filter.apply(events), fields, order);

    tracing::debug!(
        fields = ?fields,
        rows_matched = grouping.rows_matched,
        groups = grouping.groups.len(),
        "grouping computed"
    );
    Ok(grouping)
}

/// One grouping per deposit year, years ascending.
///
/// Undated events belong to no year and are skipped, as are events failing
/// `filter`. Years without a matching event are absent.
pub fn aggregate_by_year(
    events: &[DocumentEvent],
    filter: &IndexFilter,
    fields: &[EventField],
    order: GroupOrder,
) -> Result<Vec<YearGrouping>, AnalysisError> {
    check_levels(fields)?;

    let mut per_year: BTreeMap<i32, Vec<&DocumentEvent>> = BTreeMap::new();
    for event in filter.apply(events) {
        if let Some(date) = event.deposit_date {
            per_year.entry(date.year()).or_default().push(event);
        }
    }

    let years: Vec<YearGrouping> = per_year
        .into_iter()
        .map(|(year, events)| YearGrouping {
            year,
            grouping: count_groups(&events, fields, order),
        })
        .collect();

    tracing::debug!(fields = ?fields, years = years.len(), "yearly groupings computed");
    Ok(years)
}

fn check_levels(fields: &[EventField]) -> Result<(), AnalysisError> {
    if (1..=2).contains(&fields.len()) {
        Ok(())
    } else {
        Err(AnalysisError::InvalidGrouping {
            levels: fields.len(),
        })
    }
}

fn count_groups(events: &[&DocumentEvent], fields: &[EventField], order: GroupOrder) -> Grouping {
    let mut counts: BTreeMap<SmallVec2<&str>, u64> = BTreeMap::new();
    for event in events.iter().copied() {
        let key = fields.iter().map(|f| f.value_of(event)).collect();
        *counts.entry(key).or_insert(0) += 1;
    }

    let mut groups: Vec<HierarchicalGroup> = counts
        .into_iter()
        .map(|(key, count)| HierarchicalGroup {
            key: key.into_iter().map(str::to_string).collect(),
            count,
        })
        .collect();
    if order == GroupOrder::CountDescending {
        groups.sort_by(|a, b| b.count.cmp(&a.count));
    }

    Grouping {
        fields: fields.iter().copied().collect(),
        rows_matched: events.len() as u64,
        groups,
    }
}

/// First-level totals of a grouping, ascending by key.
///
/// For a one-level grouping this is the natural-order copy of its groups.
pub fn rollup(grouping: &Grouping) -> Vec<HierarchicalGroup> {
    let mut totals: BTreeMap<&str, u64> = BTreeMap::new();
    for group in &grouping.groups {
        if let Some(parent) = group.key.first() {
            *totals.entry(parent.as_str()).or_insert(0) += group.count;
        }
    }
    totals
        .into_iter()
        .map(|(parent, count)| HierarchicalGroup {
            key: std::iter::once(parent.to_string()).collect(),
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(lot: &str, index: &str) -> DocumentEvent {
        DocumentEvent {
            project: "P".into(),
            emitter: "E".into(),
            document_type: "T".into(),
            lot: lot.into(),
            revision_index: index.into(),
            deposit_date: None,
            added_by: String::new(),
            document_label: String::new(),
        }
    }

    #[test]
    fn rejects_three_levels() {
        let err = aggregate(
            &[],
            &IndexFilter::none(),
            &[EventField::Lot, EventField::DocumentType, EventField::RevisionIndex],
            GroupOrder::Natural,
        )
        .unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidGrouping { levels: 3 }));
    }

    #[test]
    fn rollup_sums_children() {
        let events = vec![event("GO", "A"), event("GO", "B"), event("CVC", "A")];
        let grouping = aggregate(
            &events,
            &IndexFilter::none(),
            &[EventField::Lot, EventField::RevisionIndex],
            GroupOrder::Natural,
        )
        .unwrap();
        let parents = rollup(&grouping);
        assert_eq!(parents.len(), 2);
        assert_eq!(parents[0].key.as_slice(), ["CVC".to_string()]);
        assert_eq!(parents[1].count, 2);
    }
}
