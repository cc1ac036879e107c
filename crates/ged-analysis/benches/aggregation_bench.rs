//! Aggregation benchmarks over synthetic GED exports.
//!
//! Run with: cargo bench -p ged-analysis --bench aggregation_bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ged_analysis::flow::build_flow_graph;
use ged_analysis::hierarchy::{aggregate, GroupOrder, IndexFilter};
use ged_analysis::ingest::load_bytes;
use ged_analysis::lineage::analyze;
use ged_analysis::temporal::monthly_series;
use ged_core::models::EventField;
use ged_core::GedConfig;

const TYPES: [&str; 4] = ["PLAN", "NOTE", "CR", "DOE"];
const LOTS: [&str; 5] = ["GO", "CVC", "ELEC", "PLB", "VRD"];
const INDICES: [&str; 4] = ["", "A", "B", "C"];

/// Build a UTF-8 export with `rows` deposits.
fn synthetic_export(rows: usize) -> Vec<u8> {
    let mut text = String::from(
        "Date dépôt GED;TYPE DE DOCUMENT;PROJET;EMET;LOT;INDICE;Ajouté par;Libellé du document\n",
    );
    for i in 0..rows {
        text.push_str(&format!(
            "{:02}/{:02}/2023;{};Tour Sud;EMET{};{};{};user{};doc {}\n",
            i % 28 + 1,
            i % 12 + 1,
            TYPES[i % TYPES.len()],
            i % 7,
            LOTS[i % LOTS.len()],
            INDICES[i % INDICES.len()],
            i % 3,
            i % 500,
        ));
    }
    text.into_bytes()
}

fn utf8_config() -> GedConfig {
    let mut config = GedConfig::default();
    config.input.encoding = Some("utf-8".to_string());
    config
}

fn normalize_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    group.sample_size(10);
    let config = utf8_config();

    for size in [1_000, 10_000, 50_000] {
        let bytes = synthetic_export(size);
        group.bench_with_input(BenchmarkId::new("load_bytes", size), &bytes, |b, bytes| {
            b.iter(|| load_bytes("bench.csv", bytes, &config).unwrap());
        });
    }
    group.finish();
}

fn aggregation_bench(c: &mut Criterion) {
    let ledger = load_bytes("bench.csv", &synthetic_export(10_000), &utf8_config()).unwrap();
    let events = &ledger.events;

    c.bench_function("monthly_series_10k", |b| {
        b.iter(|| monthly_series(events, &TYPES))
    });
    c.bench_function("flow_graph_10k", |b| b.iter(|| build_flow_graph(events)));
    c.bench_function("groups_lot_index_10k", |b| {
        b.iter(|| {
            aggregate(
                events,
                &IndexFilter::none(),
                &[EventField::Lot, EventField::RevisionIndex],
                GroupOrder::CountDescending,
            )
            .unwrap()
        })
    });
    c.bench_function("lineage_10k", |b| b.iter(|| analyze(events)));
}

criterion_group!(benches, normalize_bench, aggregation_bench);
criterion_main!(benches);
