//! Identity grouping and version timelines.

use chrono::NaiveDate;
use ged_core::models::{DocumentEvent, DocumentIdentity};
use ged_core::types::collections::{BTreeMap, FxHashSet};

use super::types::{LineageRecord, LineageReport, LotRange};

type IdentityKey<'a> = (&'a str, &'a str, &'a str);

fn identity_key(event: &DocumentEvent) -> IdentityKey<'_> {
    (
        event.document_type.as_str(),
        event.lot.as_str(),
        event.document_label.as_str(),
    )
}

/// Group events by identity, each group in input order, groups ordered by identity.
pub(crate) fn group_by_identity(
    events: &[DocumentEvent],
) -> BTreeMap<IdentityKey<'_>, Vec<&DocumentEvent>> {
    let mut groups: BTreeMap<IdentityKey<'_>, Vec<&DocumentEvent>> = BTreeMap::new();
    for event in events {
        groups.entry(identity_key(event)).or_default().push(event);
    }
    groups
}

/// Dated events of one identity in chronological order, paired with the
/// days elapsed since the previous one. Equal dates keep input order.
pub(crate) fn dated_timeline<'a>(group: &[&'a DocumentEvent]) -> Vec<(&'a DocumentEvent, NaiveDate, i64)> {
    let mut dated: Vec<(&DocumentEvent, NaiveDate)> = group
        .iter()
        .filter_map(|e| e.deposit_date.map(|d| (*e, d)))
        .collect();
    dated.sort_by_key(|(_, d)| *d);

    let mut previous: Option<NaiveDate> = None;
    dated
        .into_iter()
        .map(|(event, date)| {
            let days = previous.map(|p| (date - p).num_days()).unwrap_or(0);
            previous = Some(date);
            (event, date, days)
        })
        .collect()
}

/// Build one lineage record per identity plus the per-lot date ranges.
pub fn analyze(events: &[DocumentEvent]) -> LineageReport {
    let records: Vec<LineageRecord> = group_by_identity(events)
        .into_iter()
        .map(|((document_type, lot, document_label), group)| {
            let mut index_list: Vec<String> = group
                .iter()
                .map(|e| e.revision_index.as_str())
                .collect::<FxHashSet<_>>()
                .into_iter()
                .map(str::to_string)
                .collect();
            index_list.sort();

            let timeline = dated_timeline(&group);
            let first_version_date = timeline.first().map(|(_, d, _)| *d);
            let last_version_date = timeline.last().map(|(_, d, _)| *d);

            LineageRecord {
                identity: DocumentIdentity {
                    document_type: document_type.to_string(),
                    lot: lot.to_string(),
                    document_label: document_label.to_string(),
                },
                first_version_date,
                last_version_date,
                revision_count: index_list.len(),
                index_list,
                inter_revision_durations: timeline.iter().map(|(_, _, days)| *days).collect(),
                event_count: group.len(),
                span_days: first_version_date
                    .zip(last_version_date)
                    .map(|(first, last)| (last - first).num_days()),
            }
        })
        .collect();

    tracing::debug!(identities = records.len(), "lineage analyzed");

    LineageReport {
        records,
        lots: lot_ranges(events),
    }
}

/// Min/max deposit date of every lot, ordered by lot.
pub fn lot_ranges(events: &[DocumentEvent]) -> Vec<LotRange> {
    let mut lots: BTreeMap<&str, LotRange> = BTreeMap::new();
    for event in events {
        let range = lots.entry(event.lot.as_str()).or_insert_with(|| LotRange {
            lot: event.lot.clone(),
            start_date: None,
            end_date: None,
            event_count: 0,
        });
        range.event_count += 1;
        if let Some(date) = event.deposit_date {
            range.start_date = Some(range.start_date.map_or(date, |d| d.min(date)));
            range.end_date = Some(range.end_date.map_or(date, |d| d.max(date)));
        }
    }
    lots.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(label: &str, index: &str, date: Option<(i32, u32, u32)>) -> DocumentEvent {
        DocumentEvent {
            project: "P".into(),
            emitter: "E".into(),
            document_type: "PLAN".into(),
            lot: "GO".into(),
            revision_index: index.into(),
            deposit_date: date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
            added_by: String::new(),
            document_label: label.into(),
        }
    }

    #[test]
    fn equal_dates_keep_input_order() {
        let events = vec![
            event("D", "B", Some((2023, 1, 1))),
            event("D", "A", Some((2023, 1, 1))),
        ];
        let group: Vec<&DocumentEvent> = events.iter().collect();
        let timeline = dated_timeline(&group);
        assert_eq!(timeline[0].0.revision_index, "B");
        assert_eq!(timeline[1].2, 0);
    }

    #[test]
    fn undated_identity_has_no_timeline() {
        let report = analyze(&[event("D", "A", None), event("D", "", None)]);
        let record = &report.records[0];
        assert_eq!(record.revision_count, 2);
        assert_eq!(record.index_list, ["", "A"]);
        assert!(record.inter_revision_durations.is_empty());
        assert_eq!(record.span_days, None);
        assert_eq!(report.lots[0].start_date, None);
        assert_eq!(report.lots[0].event_count, 2);
    }
}
