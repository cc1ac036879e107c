//! Subcommand execution. Each command returns the JSON it prints.

use std::sync::Arc;

use ged_analysis::comparison::compare_projects;
use ged_analysis::flow::{build_flow_graph, index_distribution};
use ged_analysis::hierarchy::{aggregate, aggregate_by_year, rollup, GroupOrder, IndexFilter};
use ged_analysis::ingest::Ledger;
use ged_analysis::lineage::{analyze, lot_summary};
use ged_analysis::temporal::{document_types, filter_window, flatten, monthly_series};
use ged_analysis::GedEngine;
use ged_core::errors::{GedError, GedResult};
use ged_core::models::DocumentEvent;
use ged_core::tracing::metrics;
use ged_core::GedConfig;
use serde_json::{json, Map, Value};

use crate::{Command, Input};

pub fn execute(command: Command, config: GedConfig) -> anyhow::Result<Value> {
    let engine = GedEngine::new(config);

    let output = match command {
        Command::Summary(input) => {
            let ledger = load(&engine, &input)?;
            summary(&ledger, selected_events(&ledger, &input))
        }
        Command::Temporal { input, types } => {
            let ledger = load(&engine, &input)?;
            let events = selected_events(&ledger, &input);
            let types = if types.is_empty() {
                document_types(&events)
            } else {
                types
            };
            let series = monthly_series(&events, &types);
            json!({
                "series": series,
                "rows": flatten(&series),
            })
        }
        Command::Flow(input) => {
            let ledger = load(&engine, &input)?;
            let events = selected_events(&ledger, &input);
            let graph = build_flow_graph(&events);
            tracing::info!(
                flow_nodes = graph.nodes.len(),
                flow_edges = graph.edges.len(),
                "flow graph ready"
            );
            json!({
                "index_distribution": index_distribution(&events),
                "graph": graph,
            })
        }
        Command::Groups {
            input,
            by,
            indices,
            ranked,
            per_year,
        } => {
            let ledger = load(&engine, &input)?;
            let events = selected_events(&ledger, &input);
            let order = if ranked {
                GroupOrder::CountDescending
            } else {
                GroupOrder::Natural
            };
            let filter = IndexFilter::new(indices);
            if per_year {
                let years =
                    aggregate_by_year(&events, &filter, &by, order).map_err(GedError::from)?;
                json!({ "years": years })
            } else {
                let grouping = aggregate(&events, &filter, &by, order).map_err(GedError::from)?;
                let parents = (grouping.fields.len() == 2).then(|| rollup(&grouping));
                json!({
                    "grouping": grouping,
                    "parents": parents,
                })
            }
        }
        Command::Lineage(input) => {
            let ledger = load(&engine, &input)?;
            let report = analyze(&selected_events(&ledger, &input));
            tracing::info!(identities = report.records.len(), "lineage ready");
            let records: Vec<Value> = report
                .records
                .iter()
                .map(|r| -> Result<Value, serde_json::Error> {
                    let mut value = serde_json::to_value(r)?;
                    if let Value::Object(fields) = &mut value {
                        fields.insert("index_list_joined".into(), r.index_list_joined().into());
                    }
                    Ok(value)
                })
                .collect::<Result<_, _>>()?;
            json!({
                "records": records,
                "lots": report.lots,
            })
        }
        Command::Lot { input, lot, window } => {
            let ledger = load(&engine, &input)?;
            let events = selected_events(&ledger, &input);
            // Without --window every event is kept, undated ones included.
            let events = match window {
                Some(window) => filter_window(&events, window).events,
                None => events,
            };
            json!({
                "window": window,
                "summary": lot_summary(&events, &lot),
            })
        }
        Command::Compare { files, .. } => {
            let window = engine.config().analysis.effective_window();
            let mut projects: Vec<(String, Vec<DocumentEvent>)> = Vec::new();
            for file in &files {
                let ledger = engine.load_path(file).map_err(GedError::from)?;
                projects.extend(ledger.split_by_project());
            }
            let borrowed: Vec<(&str, &[DocumentEvent])> = projects
                .iter()
                .map(|(name, events)| (name.as_str(), events.as_slice()))
                .collect();
            json!({
                "window": window,
                "projects": compare_projects(&borrowed, window),
            })
        }
    };
    Ok(output)
}

fn load(engine: &GedEngine, input: &Input) -> GedResult<Arc<Ledger>> {
    Ok(engine.load_path(&input.file)?)
}

/// The ledger's events, narrowed to `--project` when given.
fn selected_events(ledger: &Ledger, input: &Input) -> Vec<DocumentEvent> {
    match &input.project {
        Some(project) => ledger.for_project(project),
        None => ledger.events.clone(),
    }
}

fn summary(ledger: &Ledger, events: Vec<DocumentEvent>) -> Value {
    let report = &ledger.report;
    let mut out = Map::new();
    out.insert("source".into(), ledger.source.clone().into());
    out.insert(metrics::CONTENT_HASH.into(), format!("{:016x}", ledger.content_hash).into());
    out.insert(metrics::ROWS_READ.into(), report.rows_read.into());
    out.insert(metrics::ROWS_DROPPED.into(), report.rows_dropped.into());
    out.insert(metrics::UNPARSABLE_DATES.into(), report.unparsable_dates.into());
    out.insert(metrics::MISSING_VALUES.into(), report.missing_values.into());
    out.insert(
        "missing_optional_columns".into(),
        report.missing_optional_columns.clone().into(),
    );
    out.insert("events".into(), events.len().into());
    out.insert("projects".into(), ledger.projects().into());
    out.insert("document_types".into(), document_types(&events).into());
    out.insert(
        "lots".into(),
        ged_analysis::ingest::distinct_values(&events, ged_core::EventField::Lot).into(),
    );
    out.insert(
        "revision_indices".into(),
        ged_analysis::ingest::distinct_values(&events, ged_core::EventField::RevisionIndex).into(),
    );
    Value::Object(out)
}
