//! Property-based invariants of the aggregation engine.

use chrono::NaiveDate;
use ged_analysis::flow::{build_flow_graph, index_distribution};
use ged_analysis::hierarchy::{aggregate, GroupOrder, IndexFilter};
use ged_analysis::lineage::analyze;
use ged_analysis::temporal::monthly_series;
use ged_core::models::{DocumentEvent, EventField};
use proptest::prelude::*;

fn arb_value(pool: &'static [&'static str]) -> impl Strategy<Value = String> {
    prop::sample::select(pool).prop_map(str::to_string)
}

fn arb_date() -> impl Strategy<Value = Option<NaiveDate>> {
    prop_oneof![
        1 => Just(None),
        6 => (0i64..900).prop_map(|offset| {
            NaiveDate::from_ymd_opt(2022, 1, 1).map(|d| d + chrono::Duration::days(offset))
        }),
    ]
}

fn arb_event() -> impl Strategy<Value = DocumentEvent> {
    (
        arb_value(&["Tour Sud", "Tour Nord"]),
        arb_value(&["ARC", "BET", "Tour Sud", ""]),
        arb_value(&["PLAN", "NOTE", "ARC"]),
        arb_value(&["GO", "CVC", "ELEC"]),
        arb_value(&["A", "B", "C", "0", ""]),
        arb_date(),
        arb_value(&["lea", "noel"]),
        arb_value(&["doc 1", "doc 2", "doc 3"]),
    )
        .prop_map(
            |(project, emitter, document_type, lot, revision_index, deposit_date, added_by, document_label)| {
                DocumentEvent {
                    project,
                    emitter,
                    document_type,
                    lot,
                    revision_index,
                    deposit_date,
                    added_by,
                    document_label,
                }
            },
        )
}

fn arb_events() -> impl Strategy<Value = Vec<DocumentEvent>> {
    prop::collection::vec(arb_event(), 0..60)
}

fn arb_fields() -> impl Strategy<Value = Vec<EventField>> {
    prop::collection::vec(prop::sample::select(EventField::all()), 1..=2)
}

// ── Revision-index shares ───────────────────────────────────────────────

proptest! {
    #[test]
    fn index_percentages_sum_to_100(events in arb_events()) {
        prop_assume!(!events.is_empty());
        let shares = index_distribution(&events);
        let sum: f64 = shares.iter().map(|s| s.percentage).sum();
        let tolerance = 0.005 * shares.len() as f64 + 1e-9;
        prop_assert!((sum - 100.0).abs() <= tolerance, "sum = {sum}");
        let counted: u64 = shares.iter().map(|s| s.count).sum();
        prop_assert_eq!(counted, events.len() as u64);
    }
}

// ── Temporal series ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn cumulative_is_monotone_and_totals_match(events in arb_events()) {
        let types = ["PLAN", "NOTE", "ARC"];
        for series in monthly_series(&events, &types) {
            let mut previous = 0;
            for window in series.points.windows(2) {
                prop_assert!(window[0].period < window[1].period);
            }
            for point in &series.points {
                prop_assert!(point.count > 0);
                prop_assert!(point.cumulative >= previous);
                previous = point.cumulative;
            }
            let expected = events
                .iter()
                .filter(|e| e.document_type == series.document_type && e.is_dated())
                .count() as u64;
            prop_assert_eq!(series.total(), expected);
        }
    }
}

// ── Flow graph ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn flow_layers_conserve_row_count(events in arb_events()) {
        let graph = build_flow_graph(&events);
        let rows = events.len() as u64;
        prop_assert_eq!(graph.layer_outflow(EventField::Project), rows);
        prop_assert_eq!(graph.layer_outflow(EventField::Emitter), rows);
        prop_assert_eq!(graph.layer_outflow(EventField::DocumentType), rows);
        prop_assert_eq!(graph.layer_inflow(EventField::RevisionIndex), rows);
    }

    #[test]
    fn flow_labels_are_unique(events in arb_events()) {
        let graph = build_flow_graph(&events);
        let mut labels: Vec<&str> = graph.nodes.iter().map(|n| n.label.as_str()).collect();
        labels.sort_unstable();
        let before = labels.len();
        labels.dedup();
        prop_assert_eq!(labels.len(), before);
        for (i, node) in graph.nodes.iter().enumerate() {
            prop_assert_eq!(node.id, i);
        }
    }

    #[test]
    fn flow_is_deterministic(events in arb_events()) {
        prop_assert_eq!(build_flow_graph(&events), build_flow_graph(&events));
    }
}

// ── Hierarchical groups ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn group_counts_sum_to_filtered_rows(
        events in arb_events(),
        fields in arb_fields(),
        selected in prop::collection::vec(arb_value(&["A", "B", "", "Z"]), 0..3),
    ) {
        let filter = IndexFilter::new(selected);
        let passing = events.iter().filter(|e| filter.matches(e)).count() as u64;
        let grouping = aggregate(&events, &filter, &fields, GroupOrder::CountDescending).unwrap();
        prop_assert_eq!(grouping.total(), passing);
        prop_assert_eq!(grouping.rows_matched, passing);
        for pair in grouping.groups.windows(2) {
            prop_assert!(pair[0].count >= pair[1].count);
        }
    }

    #[test]
    fn empty_index_selection_is_no_filter(events in arb_events(), fields in arb_fields()) {
        let none: Vec<String> = Vec::new();
        let filtered = aggregate(&events, &IndexFilter::new(none), &fields, GroupOrder::Natural).unwrap();
        let unfiltered = aggregate(&events, &IndexFilter::none(), &fields, GroupOrder::Natural).unwrap();
        prop_assert_eq!(filtered, unfiltered);
    }
}

// ── Lineage ─────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn lineage_records_are_consistent(events in arb_events()) {
        let report = analyze(&events);
        let mut covered = 0;
        for record in &report.records {
            covered += record.event_count;
            prop_assert_eq!(record.revision_count, record.index_list.len());
            let mut sorted = record.index_list.clone();
            sorted.sort();
            sorted.dedup();
            prop_assert_eq!(&sorted, &record.index_list);

            let durations = &record.inter_revision_durations;
            if let Some(first) = durations.first() {
                prop_assert_eq!(*first, 0);
            }
            prop_assert!(durations.iter().all(|d| *d >= 0));
            let span: i64 = durations.iter().sum();
            prop_assert_eq!(Some(span).filter(|_| !durations.is_empty()), record.span_days);
        }
        prop_assert_eq!(covered, events.len());
        for pair in report.records.windows(2) {
            prop_assert!(pair[0].identity < pair[1].identity);
        }
    }
}
