//! Flow graph output types.

use ged_core::models::EventField;
use serde::{Deserialize, Serialize};

/// A graph node: one distinct value of one dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowNode {
    /// Position in `FlowGraph::nodes`.
    pub id: usize,
    /// Rendered label, unique across the graph.
    pub label: String,
    /// Value within its dimension (the annotated label for revision indices).
    pub value: String,
    pub dimension: EventField,
}

/// Aggregated link between nodes of consecutive dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowEdge {
    pub source: usize,
    pub target: usize,
    pub weight: u64,
}

/// Multi-stage weighted graph across project, emitter, type and index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowGraph {
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
}

impl FlowGraph {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total weight leaving nodes of `dimension`.
    pub fn layer_outflow(&self, dimension: EventField) -> u64 {
        self.edges
            .iter()
            .filter(|e| self.nodes[e.source].dimension == dimension)
            .map(|e| e.weight)
            .sum()
    }

    /// Total weight arriving at nodes of `dimension`.
    pub fn layer_inflow(&self, dimension: EventField) -> u64 {
        self.edges
            .iter()
            .filter(|e| self.nodes[e.target].dimension == dimension)
            .map(|e| e.weight)
            .sum()
    }

    pub fn node_by_label(&self, label: &str) -> Option<&FlowNode> {
        self.nodes.iter().find(|n| n.label == label)
    }

    /// Nodes of one dimension, in graph order.
    pub fn nodes_of(&self, dimension: EventField) -> impl Iterator<Item = &FlowNode> {
        self.nodes.iter().filter(move |n| n.dimension == dimension)
    }

    pub fn inbound_weight(&self, node: usize) -> u64 {
        self.edges
            .iter()
            .filter(|e| e.target == node)
            .map(|e| e.weight)
            .sum()
    }

    pub fn outbound_weight(&self, node: usize) -> u64 {
        self.edges
            .iter()
            .filter(|e| e.source == node)
            .map(|e| e.weight)
            .sum()
    }
}
