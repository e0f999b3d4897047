//! In-memory artist graph arena
//!
//! Owns every node discovered during exploration, keyed by id in insertion
//! order. Adjacency is recorded as ids on the nodes and always in both
//! directions, so an edge A→B exists iff B is in A's outgoing set and A is
//! in B's incoming set.

use super::node::ArtistNode;
use super::types::ArtistId;
use crate::algo::{self, PageRankConfig};
use crate::provider::{ProviderError, RelatedProvider};
use indexmap::{IndexMap, IndexSet};
use thiserror::Error;
use tracing::{debug, info};

/// Default exploration bound
pub const DEFAULT_MAX_SIZE: usize = 10;

/// Errors that can occur during graph operations
#[derive(Error, Debug, PartialEq)]
pub enum GraphError {
    #[error("malformed artist record: missing required field '{0}'")]
    MalformedRecord(&'static str),

    #[error("graph is already populated; exploration is not re-entrant")]
    AlreadyPopulated,

    #[error("invalid edge: source node {0} does not exist")]
    InvalidEdgeSource(ArtistId),

    #[error("invalid edge: target node {0} does not exist")]
    InvalidEdgeTarget(ArtistId),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// The related-artist graph
///
/// Created around a single seed node, populated once by bounded
/// exploration, then ranked. The node arena is closed under the recorded
/// edges: every id in any adjacency set is a key of the arena.
#[derive(Debug, Clone)]
pub struct ArtistGraph {
    /// All discovered nodes, in discovery order
    nodes: IndexMap<ArtistId, ArtistNode>,

    /// Id of the seed node
    seed: ArtistId,

    /// Current max-rank node, the seed until ranking runs
    max_rank_id: ArtistId,

    /// Current min-rank node, the seed until ranking runs
    min_rank_id: ArtistId,

    /// Sum of all ranks over the last ranking round
    rank_sum: f64,

    populated: bool,
}

impl ArtistGraph {
    /// Create a graph holding only the seed node
    pub fn new(seed: ArtistNode) -> Self {
        let seed_id = seed.id.clone();
        let mut nodes = IndexMap::new();
        nodes.insert(seed_id.clone(), seed);

        ArtistGraph {
            nodes,
            seed: seed_id.clone(),
            max_rank_id: seed_id.clone(),
            min_rank_id: seed_id,
            rank_sum: 0.0,
            populated: false,
        }
    }

    /// Discover the graph around the seed, bounded by `max_size`
    ///
    /// Explicit worklist traversal in LIFO order: pop an id; if it has not
    /// been examined and fewer than `max_size` nodes have been, look up its
    /// related artists, resolve or create each neighbor in the arena, link
    /// both adjacency directions, and push the neighbor. The popped id is
    /// marked examined regardless, so repeated worklist entries are
    /// harmless.
    ///
    /// The final node count may exceed `max_size`: neighbors discovered by
    /// the last expansion stay in the graph as leaves with no outgoing
    /// edges, keeping the arena closed under its edges. Provider errors
    /// propagate verbatim; a record without an id fails the whole
    /// exploration.
    pub fn populate<P: RelatedProvider>(
        &mut self,
        provider: &P,
        max_size: usize,
    ) -> GraphResult<()> {
        if self.populated {
            return Err(GraphError::AlreadyPopulated);
        }

        info!(seed = %self.seed, max_size, "exploring related-artist graph");

        let mut worklist = vec![self.seed.clone()];
        let mut examined: IndexSet<ArtistId> = IndexSet::new();

        while let Some(current) = worklist.pop() {
            if !examined.contains(&current) && examined.len() < max_size {
                let records = provider.related(&current)?;
                debug!(artist = %current, related = records.len(), "expanding node");

                for record in records {
                    let related_id = match record.id.as_deref() {
                        Some(id) => ArtistId::new(id),
                        None => return Err(GraphError::MalformedRecord("id")),
                    };
                    if !self.nodes.contains_key(&related_id) {
                        let node = ArtistNode::from_record(record)?;
                        self.nodes.insert(node.id.clone(), node);
                    }
                    self.add_edge(&current, &related_id)?;
                    worklist.push(related_id);
                }
            }
            examined.insert(current);
        }

        self.initialize_ranks();
        self.populated = true;

        info!(nodes = self.nodes.len(), "exploration complete");
        Ok(())
    }

    /// Insert a node into the arena, replacing any previous node with the
    /// same id. Exploration creates nodes itself; this exists for building
    /// synthetic topologies.
    pub fn add_node(&mut self, node: ArtistNode) {
        self.nodes.insert(node.id.clone(), node);
    }

    /// Record a directed edge, updating both endpoints' adjacency sets
    pub fn add_edge(&mut self, source: &ArtistId, target: &ArtistId) -> GraphResult<()> {
        if !self.nodes.contains_key(source) {
            return Err(GraphError::InvalidEdgeSource(source.clone()));
        }
        match self.nodes.get_mut(target) {
            Some(node) => node.add_incoming(source.clone()),
            None => return Err(GraphError::InvalidEdgeTarget(target.clone())),
        };
        if let Some(node) = self.nodes.get_mut(source) {
            node.add_outgoing(target.clone());
        }
        Ok(())
    }

    /// Set every node's rank to 1.0, the starting point for ranking
    pub fn initialize_ranks(&mut self) {
        for node in self.nodes.values_mut() {
            node.set_rank(1.0);
        }
    }

    /// Run the fixed-iteration PageRank pass and re-derive the extremal
    /// nodes. See [`crate::algo::pagerank`].
    pub fn run_page_rank(&mut self, config: &PageRankConfig) {
        algo::pagerank::page_rank(self, config);
        self.update_extremes();
    }

    /// Get a node by id
    pub fn node(&self, id: &ArtistId) -> Option<&ArtistNode> {
        self.nodes.get(id)
    }

    pub(crate) fn node_mut(&mut self, id: &ArtistId) -> Option<&mut ArtistNode> {
        self.nodes.get_mut(id)
    }

    /// All nodes in canonical (discovery) order
    pub fn nodes(&self) -> impl Iterator<Item = &ArtistNode> {
        self.nodes.values()
    }

    /// All node ids in canonical order
    pub fn node_ids(&self) -> impl Iterator<Item = &ArtistId> {
        self.nodes.keys()
    }

    pub fn contains(&self, id: &ArtistId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Id of the seed node
    pub fn seed_id(&self) -> &ArtistId {
        &self.seed
    }

    /// The seed node
    pub fn seed_node(&self) -> &ArtistNode {
        &self.nodes[&self.seed]
    }

    /// The current max-rank node
    pub fn max_rank_node(&self) -> &ArtistNode {
        &self.nodes[&self.max_rank_id]
    }

    /// The current min-rank node
    pub fn min_rank_node(&self) -> &ArtistNode {
        &self.nodes[&self.min_rank_id]
    }

    /// Sum of all ranks over the last ranking round
    pub fn rank_sum(&self) -> f64 {
        self.rank_sum
    }

    pub(crate) fn set_rank_sum(&mut self, sum: f64) {
        self.rank_sum = sum;
    }

    /// Re-derive the max- and min-rank nodes by a pass in canonical order;
    /// the first extremum wins ties.
    pub(crate) fn update_extremes(&mut self) {
        let mut max_id = self.seed.clone();
        let mut min_id = self.seed.clone();
        let seed_rank = self.nodes[&self.seed].rank;
        let mut max_rank = seed_rank;
        let mut min_rank = seed_rank;

        for node in self.nodes.values() {
            if node.rank > max_rank {
                max_rank = node.rank;
                max_id = node.id.clone();
            }
            if node.rank < min_rank {
                min_rank = node.rank;
                min_id = node.id.clone();
            }
        }

        self.max_rank_id = max_id;
        self.min_rank_id = min_id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{ProviderResult, RawArtist};
    use rustc_hash::FxHashMap;

    fn seed_node() -> ArtistNode {
        ArtistNode::from_record(RawArtist::new("seed", "Seed Artist", 50)).unwrap()
    }

    /// Provider backed by a canned relation table; unknown ids have no
    /// related artists.
    fn table_provider(
        relations: &[(&str, &[&str])],
    ) -> impl Fn(&ArtistId) -> ProviderResult<Vec<RawArtist>> {
        let mut table: FxHashMap<String, Vec<RawArtist>> = FxHashMap::default();
        for (id, related) in relations {
            table.insert(
                id.to_string(),
                related
                    .iter()
                    .map(|rid| RawArtist::new(*rid, format!("Artist {}", rid), 40))
                    .collect(),
            );
        }
        move |id: &ArtistId| Ok(table.get(id.as_str()).cloned().unwrap_or_default())
    }

    #[test]
    fn test_populate_links_both_directions() {
        let mut graph = ArtistGraph::new(seed_node());
        let provider = table_provider(&[("seed", &["a", "b"]), ("a", &["seed"])]);
        graph.populate(&provider, 10).unwrap();

        assert_eq!(graph.len(), 3);
        assert_eq!(graph.seed_id(), &ArtistId::new("seed"));
        let seed = graph.node(&ArtistId::new("seed")).unwrap();
        assert!(seed.outgoing.contains(&ArtistId::new("a")));
        assert!(seed.incoming.contains(&ArtistId::new("a")));
        let a = graph.node(&ArtistId::new("a")).unwrap();
        assert!(a.incoming.contains(&ArtistId::new("seed")));
        assert!(a.outgoing.contains(&ArtistId::new("seed")));
    }

    #[test]
    fn test_populate_initializes_ranks() {
        let mut graph = ArtistGraph::new(seed_node());
        let provider = table_provider(&[("seed", &["a"])]);
        graph.populate(&provider, 10).unwrap();

        for node in graph.nodes() {
            assert_eq!(node.rank, 1.0);
        }
    }

    #[test]
    fn test_populate_empty_provider_keeps_only_seed() {
        let mut graph = ArtistGraph::new(seed_node());
        let provider = table_provider(&[]);
        graph.populate(&provider, 10).unwrap();

        assert_eq!(graph.len(), 1);
        let seed = graph.seed_node();
        assert!(seed.incoming.is_empty());
        assert!(seed.outgoing.is_empty());
    }

    #[test]
    fn test_populate_is_not_reentrant() {
        let mut graph = ArtistGraph::new(seed_node());
        let provider = table_provider(&[("seed", &["a"])]);
        graph.populate(&provider, 10).unwrap();

        let err = graph.populate(&provider, 10).unwrap_err();
        assert_eq!(err, GraphError::AlreadyPopulated);
    }

    #[test]
    fn test_populate_single_node_per_id() {
        // Both a and b point at c; c must be one arena entry with two
        // incoming edges, not two instances.
        let mut graph = ArtistGraph::new(seed_node());
        let provider = table_provider(&[("seed", &["a", "b"]), ("a", &["c"]), ("b", &["c"])]);
        graph.populate(&provider, 10).unwrap();

        let c = graph.node(&ArtistId::new("c")).unwrap();
        assert_eq!(c.in_degree(), 2);
        assert_eq!(
            graph.node_ids().filter(|id| id.as_str() == "c").count(),
            1
        );
    }

    #[test]
    fn test_populate_closure_invariant() {
        let mut graph = ArtistGraph::new(seed_node());
        let provider = table_provider(&[
            ("seed", &["a", "b"]),
            ("a", &["b", "c"]),
            ("b", &["seed", "c"]),
            ("c", &["d"]),
        ]);
        graph.populate(&provider, 10).unwrap();

        for node in graph.nodes() {
            for id in node.outgoing.iter().chain(node.incoming.iter()) {
                assert!(graph.contains(id), "dangling adjacency id {}", id);
            }
        }
    }

    #[test]
    fn test_populate_overshoots_bound_by_last_expansion() {
        // max_size 1: only the seed is expanded, but its neighbors stay in
        // the arena as non-explored leaves.
        let mut graph = ArtistGraph::new(seed_node());
        let provider = table_provider(&[("seed", &["a", "b", "c"]), ("a", &["d"])]);
        graph.populate(&provider, 1).unwrap();

        assert_eq!(graph.len(), 4);
        assert!(!graph.contains(&ArtistId::new("d")));
        let a = graph.node(&ArtistId::new("a")).unwrap();
        assert_eq!(a.out_degree(), 0);
    }

    #[test]
    fn test_populate_provider_error_propagates() {
        let mut graph = ArtistGraph::new(seed_node());
        let provider = |id: &ArtistId| -> ProviderResult<Vec<RawArtist>> {
            Err(ProviderError::lookup(id.clone(), "connection refused"))
        };

        let err = graph.populate(&provider, 10).unwrap_err();
        assert!(matches!(err, GraphError::Provider(_)));
    }

    #[test]
    fn test_populate_malformed_record_fails_fast() {
        let mut graph = ArtistGraph::new(seed_node());
        let provider = |_: &ArtistId| -> ProviderResult<Vec<RawArtist>> {
            Ok(vec![RawArtist {
                id: None,
                ..RawArtist::new("", "Nameless", 1)
            }])
        };

        let err = graph.populate(&provider, 10).unwrap_err();
        assert_eq!(err, GraphError::MalformedRecord("id"));
    }

    #[test]
    fn test_add_edge_requires_both_endpoints() {
        let mut graph = ArtistGraph::new(seed_node());
        let missing = ArtistId::new("ghost");
        let seed = ArtistId::new("seed");

        let err = graph.add_edge(&seed, &missing).unwrap_err();
        assert_eq!(err, GraphError::InvalidEdgeTarget(missing.clone()));
        let err = graph.add_edge(&missing, &seed).unwrap_err();
        assert_eq!(err, GraphError::InvalidEdgeSource(missing));
    }

    #[test]
    fn test_determinism_same_provider_same_id_set() {
        let relations: &[(&str, &[&str])] = &[
            ("seed", &["a", "b", "c"]),
            ("a", &["d", "e"]),
            ("b", &["f"]),
            ("c", &["a", "g"]),
            ("d", &["h"]),
        ];

        let mut first = ArtistGraph::new(seed_node());
        first.populate(&table_provider(relations), 4).unwrap();
        let mut second = ArtistGraph::new(seed_node());
        second.populate(&table_provider(relations), 4).unwrap();

        let first_ids: Vec<_> = first.node_ids().cloned().collect();
        let second_ids: Vec<_> = second.node_ids().cloned().collect();
        assert_eq!(first_ids, second_ids);
    }
}
