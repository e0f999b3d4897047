//! Visualization export
//!
//! Converts a finished graph into the JSON payload a rendering front end
//! consumes: `{"nodes": [{id, label, x, y, size, color}], "edges": [{id,
//! source, target}]}`. Node size is a linear map of rank over the graph's
//! current min/max rank domain; coordinates are pseudo-random and the
//! renderer's layout takes over from there.

use crate::graph::ArtistGraph;
use rand::Rng;
use serde::{Deserialize, Serialize};

const MIN_PX: f64 = 10.0;
const MAX_PX: f64 = 50.0;
const NODE_COLOR: &str = "#EE651D";

/// Size emitted when the rank domain is degenerate (`min == max`, e.g. a
/// single-node graph). The midpoint value of a non-degenerate domain.
pub const DEGENERATE_SIZE: i64 = 70;

/// One renderable node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeJson {
    pub id: String,
    pub label: String,
    pub x: u32,
    pub y: u32,
    pub size: i64,
    pub color: String,
}

/// One renderable edge; `id` is the concatenation of the endpoint ids
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeJson {
    pub id: String,
    pub source: String,
    pub target: String,
}

/// The full rendering payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphJson {
    pub nodes: Vec<NodeJson>,
    pub edges: Vec<EdgeJson>,
}

/// Render the graph as a nodes/edges payload
///
/// Nodes and their outgoing edges are emitted in the graph's canonical
/// order, so the payload is stable apart from the random coordinates.
pub fn export(graph: &ArtistGraph) -> GraphJson {
    let min_pr = graph.min_rank_node().rank;
    let max_pr = graph.max_rank_node().rank;

    let mut rng = rand::thread_rng();
    let mut nodes = Vec::with_capacity(graph.len());
    let mut edges = Vec::new();

    for node in graph.nodes() {
        nodes.push(NodeJson {
            id: node.id.to_string(),
            label: node.name.clone(),
            x: rng.gen_range(1..=10),
            y: rng.gen_range(1..=10),
            size: size_for_rank(node.rank, min_pr, max_pr),
            color: NODE_COLOR.to_string(),
        });

        for target in &node.outgoing {
            edges.push(EdgeJson {
                id: format!("{}{}", node.id, target),
                source: node.id.to_string(),
                target: target.to_string(),
            });
        }
    }

    GraphJson { nodes, edges }
}

/// Linear map of `rank` over the `[min_pr, max_pr]` domain into the pixel
/// range, then subtracted from 100 per the renderer's size convention.
/// A degenerate domain takes the fixed fallback instead of dividing by
/// zero.
fn size_for_rank(rank: f64, min_pr: f64, max_pr: f64) -> i64 {
    if min_pr == max_pr {
        return DEGENERATE_SIZE;
    }

    let mapped = ((rank * (MIN_PX - MAX_PX) + min_pr * MAX_PX - MIN_PX * max_pr)
        / (min_pr - max_pr))
        .round() as i64;
    100 - mapped
}
