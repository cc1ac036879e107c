//! FlowGraph construction over a petgraph `Graph`.

use std::time::Instant;

use ged_core::models::{DocumentEvent, EventField};
use ged_core::types::collections::{FxHashMap, FxHashSet};
use petgraph::graph::{EdgeIndex, Graph, NodeIndex};

use super::distribution::index_distribution;
use super::types::{FlowEdge, FlowGraph, FlowNode};

/// Dimensions in stage order. The last one is rendered with its percentage.
pub const FLOW_DIMENSIONS: [EventField; 4] = [
    EventField::Project,
    EventField::Emitter,
    EventField::DocumentType,
    EventField::RevisionIndex,
];

struct NodeData {
    dimension: EventField,
    value: String,
}

/// Build the flow graph of one project's events.
///
/// Node order is dimension-major, first-seen within a dimension; edge order
/// is stage-major, first-seen pair within a stage. Index values whose
/// annotated labels coincide share one node.
pub fn build_flow_graph(events: &[DocumentEvent]) -> FlowGraph {
    if events.is_empty() {
        return FlowGraph::default();
    }
    let start = Instant::now();

    let shares = index_distribution(events);
    let annotated: FxHashMap<&str, &str> = shares
        .iter()
        .map(|s| (s.value.as_str(), s.label.as_str()))
        .collect();
    let value_in = |event: &'_ DocumentEvent, stage: usize| -> String {
        let dimension = FLOW_DIMENSIONS[stage];
        let raw = dimension.value_of(event);
        if dimension == EventField::RevisionIndex {
            annotated.get(raw).copied().unwrap_or(raw).to_string()
        } else {
            raw.to_string()
        }
    };

    let mut graph: Graph<NodeData, u64> = Graph::new();
    let mut lookup: FxHashMap<(usize, String), NodeIndex> = FxHashMap::default();
    for (stage, dimension) in FLOW_DIMENSIONS.iter().enumerate() {
        for event in events {
            let value = value_in(event, stage);
            if !lookup.contains_key(&(stage, value.clone())) {
                let idx = graph.add_node(NodeData {
                    dimension: *dimension,
                    value: value.clone(),
                });
                lookup.insert((stage, value), idx);
            }
        }
    }

    let mut edge_lookup: FxHashMap<(NodeIndex, NodeIndex), EdgeIndex> = FxHashMap::default();
    for stage in 0..FLOW_DIMENSIONS.len() - 1 {
        for event in events {
            let source = lookup[&(stage, value_in(event, stage))];
            let target = lookup[&(stage + 1, value_in(event, stage + 1))];
            match edge_lookup.get(&(source, target)) {
                Some(&edge) => graph[edge] += 1,
                None => {
                    let edge = graph.add_edge(source, target, 1);
                    edge_lookup.insert((source, target), edge);
                }
            }
        }
    }

    let nodes = render_nodes(&graph);
    let edges = graph
        .edge_indices()
        .filter_map(|e| {
            let (source, target) = graph.edge_endpoints(e)?;
            Some(FlowEdge {
                source: source.index(),
                target: target.index(),
                weight: graph[e],
            })
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        flow_nodes = nodes.len(),
        flow_edges = edges.len(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "flow graph built"
    );

    FlowGraph { nodes, edges }
}

/// Assign unique rendered labels.
///
/// A value present in more than one dimension is qualified as
/// `"<dimension>: <value>"` in every dimension it appears in. A label that
/// still clashes gets the first free `" #<n>"` suffix, starting at the node id.
fn render_nodes(graph: &Graph<NodeData, u64>) -> Vec<FlowNode> {
    let mut dimensions_per_value: FxHashMap<&str, FxHashSet<EventField>> = FxHashMap::default();
    for idx in graph.node_indices() {
        let data = &graph[idx];
        dimensions_per_value
            .entry(data.value.as_str())
            .or_default()
            .insert(data.dimension);
    }

    let mut used: FxHashSet<String> = FxHashSet::default();
    graph
        .node_indices()
        .map(|idx| {
            let data = &graph[idx];
            let shared = dimensions_per_value
                .get(data.value.as_str())
                .is_some_and(|dims| dims.len() > 1);
            let mut label = if shared {
                format!("{}: {}", data.dimension, data.value)
            } else {
                data.value.clone()
            };
            if used.contains(&label) {
                let base = label;
                let mut n = idx.index();
                label = format!("{base} #{n}");
                while used.contains(&label) {
                    n += 1;
                    label = format!("{base} #{n}");
                }
            }
            used.insert(label.clone());
            FlowNode {
                id: idx.index(),
                label,
                value: data.value.clone(),
                dimension: data.dimension,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(project: &str, emitter: &str, doc_type: &str, index: &str) -> DocumentEvent {
        DocumentEvent {
            project: project.into(),
            emitter: emitter.into(),
            document_type: doc_type.into(),
            lot: "GO".into(),
            revision_index: index.into(),
            deposit_date: None,
            added_by: String::new(),
            document_label: String::new(),
        }
    }

    #[test]
    fn empty_input_is_empty_graph() {
        let graph = build_flow_graph(&[]);
        assert!(graph.nodes.is_empty());
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn nodes_are_dimension_major() {
        let events = vec![event("P1", "ARC", "PLAN", "A"), event("P1", "BET", "NOTE", "A")];
        let graph = build_flow_graph(&events);
        let labels: Vec<_> = graph.nodes.iter().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, ["P1", "ARC", "BET", "PLAN", "NOTE", "A (100.00%)"]);
        assert_eq!(graph.edges.len(), 6);
        assert_eq!(graph.edges[0], FlowEdge { source: 0, target: 1, weight: 1 });
    }

    #[test]
    fn shared_values_are_qualified() {
        let events = vec![event("X", "X", "PLAN", "A")];
        let graph = build_flow_graph(&events);
        assert_eq!(graph.nodes[0].label, "project: X");
        assert_eq!(graph.nodes[1].label, "emitter: X");
        assert_eq!(graph.nodes[0].value, "X");
        assert_eq!(graph.edges[0].weight, 1);
    }

    #[test]
    fn qualified_label_clash_gets_suffix() {
        let events = vec![
            event("X", "X", "PLAN", "A"),
            event("emitter: X", "ARC", "PLAN", "A"),
        ];
        let graph = build_flow_graph(&events);
        let labels: FxHashSet<_> = graph.nodes.iter().map(|n| n.label.clone()).collect();
        assert_eq!(labels.len(), graph.nodes.len());
    }

    #[test]
    fn suffix_skips_labels_already_taken() {
        let events = vec![
            event("emitter: X", "X", "X", "A"),
            event("emitter: X #3", "X", "X", "A"),
            event("Q", "X", "X", "A"),
        ];
        let graph = build_flow_graph(&events);
        let labels: Vec<_> = graph.nodes.iter().map(|n| n.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "emitter: X",
                "emitter: X #3",
                "Q",
                "emitter: X #4",
                "document_type: X",
                "A (100.00%)"
            ]
        );
        let unique: FxHashSet<_> = labels.iter().collect();
        assert_eq!(unique.len(), graph.nodes.len());
    }
}
