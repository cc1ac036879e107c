//! Flow graph builder: project → emitter → type → annotated revision index.
//!
//! Nodes are the distinct values of the four dimensions, with revision
//! indices rendered together with their share of all events. Edges carry
//! the number of events linking two consecutive dimensions.

pub mod builder;
pub mod distribution;
pub mod types;

pub use builder::{build_flow_graph, FLOW_DIMENSIONS};
pub use distribution::{annotate, index_distribution, IndexShare};
pub use types::{FlowEdge, FlowGraph, FlowNode};
