//! Temporal aggregator tests.

use chrono::NaiveDate;
use ged_analysis::temporal::{filter_window, flatten, monthly_series, YearMonth};
use ged_core::models::{AnalysisWindow, DocumentEvent};

fn deposit(doc_type: &str, date: Option<(i32, u32, u32)>) -> DocumentEvent {
    DocumentEvent {
        project: "P1".into(),
        emitter: "ARC".into(),
        document_type: doc_type.into(),
        lot: "GO".into(),
        revision_index: "A".into(),
        deposit_date: date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
        added_by: "u".into(),
        document_label: "doc".into(),
    }
}

fn ym(s: &str) -> YearMonth {
    s.parse().unwrap()
}

#[test]
fn months_are_sparse_and_cumulative() {
    let events = vec![
        deposit("PLAN", Some((2023, 3, 2))),
        deposit("PLAN", Some((2023, 1, 10))),
        deposit("PLAN", Some((2023, 1, 31))),
        deposit("NOTE", Some((2023, 2, 1))),
    ];
    let series = monthly_series(&events, &["PLAN"]);

    assert_eq!(series.len(), 1);
    let points = &series[0].points;
    assert_eq!(points.len(), 2, "February has no PLAN deposit and no point");
    assert_eq!(points[0].period, ym("2023-01"));
    assert_eq!((points[0].count, points[0].cumulative), (2, 2));
    assert_eq!(points[1].period, ym("2023-03"));
    assert_eq!((points[1].count, points[1].cumulative), (1, 3));
    assert_eq!(series[0].total(), 3);
}

#[test]
fn undated_events_are_excluded() {
    let events = vec![deposit("PLAN", None), deposit("PLAN", Some((2023, 1, 1)))];
    let series = monthly_series(&events, &["PLAN"]);
    assert_eq!(series[0].total(), 1);
}

#[test]
fn empty_selection_is_empty_result() {
    let events = vec![deposit("PLAN", Some((2023, 1, 1)))];
    let none: [&str; 0] = [];
    assert!(monthly_series(&events, &none).is_empty());
}

#[test]
fn series_follow_selection_order() {
    let events = vec![
        deposit("PLAN", Some((2023, 1, 1))),
        deposit("NOTE", Some((2023, 1, 1))),
    ];
    let series = monthly_series(&events, &["NOTE", "PLAN", "NOTE", "ABSENT"]);
    let types: Vec<_> = series.iter().map(|s| s.document_type.as_str()).collect();
    assert_eq!(types, ["NOTE", "PLAN", "ABSENT"]);
    assert!(series[2].is_empty());
}

#[test]
fn flatten_yields_tuples() {
    let events = vec![
        deposit("PLAN", Some((2022, 12, 5))),
        deposit("PLAN", Some((2023, 1, 5))),
    ];
    let rows = flatten(&monthly_series(&events, &["PLAN"]));
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].period.to_string(), "2023-01");
    assert_eq!(rows[1].cumulative, 2);
    let json = serde_json::to_value(&rows[0]).unwrap();
    assert_eq!(json["period"], "2022-12");
}

#[test]
fn six_month_window_is_anchored_at_first_deposit() {
    let events = vec![
        deposit("PLAN", Some((2023, 1, 1))),
        deposit("PLAN", Some((2023, 6, 30))),
        deposit("PLAN", Some((2023, 7, 1))),
        deposit("PLAN", None),
    ];
    let windowed = filter_window(&events, AnalysisWindow::FirstSixMonths);
    assert_eq!(windowed.start, NaiveDate::from_ymd_opt(2023, 1, 1));
    assert_eq!(windowed.end, NaiveDate::from_ymd_opt(2023, 6, 30));
    assert_eq!(windowed.events.len(), 2);

    let all = filter_window(&events, AnalysisWindow::All);
    assert_eq!(all.events.len(), 3);
    assert_eq!(all.end, NaiveDate::from_ymd_opt(2023, 7, 1));
}

#[test]
fn window_over_undated_events_is_empty() {
    let windowed = filter_window(&[deposit("PLAN", None)], AnalysisWindow::FirstYear);
    assert!(windowed.events.is_empty());
    assert_eq!(windowed.start, None);
}
