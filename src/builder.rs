//! Graph build orchestration
//!
//! The single entry point the UI layer calls: resolve the seed record,
//! explore, rank, and export, returning the extremal and root nodes
//! alongside the rendering payload.

use crate::algo::PageRankConfig;
use crate::export::{self, GraphJson};
use crate::graph::{ArtistGraph, ArtistId, ArtistNode, GraphResult, DEFAULT_MAX_SIZE};
use crate::provider::{RawArtist, RelatedProvider};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Knobs for one graph build
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Exploration bound; the final graph holds at least this many nodes
    /// when the relation is dense enough, possibly more (see
    /// [`ArtistGraph::populate`])
    pub max_size: usize,
    /// PageRank rounds
    pub iterations: usize,
    /// PageRank damping factor
    pub damping_factor: f64,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
            iterations: 150,
            damping_factor: 0.85,
        }
    }
}

/// Flat view of one node in the build report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSummary {
    pub id: ArtistId,
    pub name: String,
    pub rank: f64,
}

impl From<&ArtistNode> for NodeSummary {
    fn from(node: &ArtistNode) -> Self {
        NodeSummary {
            id: node.id.clone(),
            name: node.name.clone(),
            rank: node.rank,
        }
    }
}

/// Everything a caller needs after a successful build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildReport {
    pub max_node: NodeSummary,
    pub min_node: NodeSummary,
    pub root_node: NodeSummary,
    pub graph: GraphJson,
}

/// Result of a build attempt
///
/// An unresolvable seed is a defined outcome, not an error; provider and
/// data-contract failures still surface as [`crate::graph::GraphError`].
#[derive(Debug, Clone, PartialEq)]
pub enum BuildOutcome {
    Built(BuildReport),
    SeedNotFound,
}

/// Build, rank, and export the graph around `seed`
///
/// `seed` is the raw record for the root artist, or `None` when the lookup
/// that should have produced it came back empty.
pub fn build<P: RelatedProvider>(
    seed: Option<RawArtist>,
    provider: &P,
    config: &BuildConfig,
) -> GraphResult<BuildOutcome> {
    let Some(seed) = seed else {
        warn!("seed artist could not be resolved");
        return Ok(BuildOutcome::SeedNotFound);
    };

    let seed_node = ArtistNode::from_record(seed)?;
    info!(seed = %seed_node.id, max_size = config.max_size, "building artist graph");

    let mut graph = ArtistGraph::new(seed_node);
    graph.populate(provider, config.max_size)?;
    graph.run_page_rank(&PageRankConfig {
        damping_factor: config.damping_factor,
        iterations: config.iterations,
    });

    info!(
        nodes = graph.len(),
        rank_sum = graph.rank_sum(),
        "artist graph ready"
    );

    Ok(BuildOutcome::Built(BuildReport {
        max_node: graph.max_rank_node().into(),
        min_node: graph.min_rank_node().into(),
        root_node: graph.seed_node().into(),
        graph: export::export(&graph),
    }))
}
