//! PageRank over the artist graph
//!
//! Fixed-iteration power method: every round recomputes each node's rank as
//! `(1 - d) + d * Σ rank(src) / out_degree(src)` over its incoming
//! neighbors, reading only the previous round's scores. There is no
//! convergence cutoff; the configured iteration count always runs to
//! completion.

use crate::graph::{ArtistGraph, ArtistId};
use rustc_hash::FxHashMap;
use tracing::debug;

/// PageRank configuration
#[derive(Debug, Clone)]
pub struct PageRankConfig {
    /// Damping factor (usually 0.85)
    pub damping_factor: f64,
    /// Number of update rounds; always run in full
    pub iterations: usize,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping_factor: 0.85,
            iterations: 150,
        }
    }
}

/// Run `config.iterations` synchronous update rounds over the graph
///
/// Scores live in two dense buffers: each round reads the previous round's
/// buffer and writes the next, then the buffers swap. A node never observes
/// a score written during the same round (Jacobi update, not Gauss-Seidel).
/// Sources with zero outgoing edges, which occur when exploration was cut
/// off by the size bound, contribute nothing to their targets.
///
/// Final scores are written back into the nodes and the last round's rank
/// sum is recorded on the graph. Ranks are not normalized; for a seed-rooted
/// graph the sum drifts toward the node count rather than 1.
pub fn page_rank(graph: &mut ArtistGraph, config: &PageRankConfig) {
    let n = graph.len();
    if n == 0 {
        return;
    }

    // Dense projection of the arena, in canonical order
    let ids: Vec<ArtistId> = graph.node_ids().cloned().collect();
    let mut index: FxHashMap<ArtistId, usize> = FxHashMap::default();
    for (i, id) in ids.iter().enumerate() {
        index.insert(id.clone(), i);
    }

    let mut incoming: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut out_degree: Vec<usize> = vec![0; n];
    for (i, node) in graph.nodes().enumerate() {
        out_degree[i] = node.out_degree();
        for source in &node.incoming {
            if let Some(&source_idx) = index.get(source) {
                incoming[i].push(source_idx);
            }
        }
    }

    let mut scores: Vec<f64> = graph.nodes().map(|node| node.rank).collect();
    let mut next_scores = vec![0.0; n];

    let d = config.damping_factor;
    let base_score = 1.0 - d;
    let mut rank_sum = graph.rank_sum();

    for _ in 0..config.iterations {
        let mut round_sum = 0.0;

        for i in 0..n {
            let mut sum_incoming = 0.0;
            for &source_idx in &incoming[i] {
                let degree = out_degree[source_idx];
                if degree > 0 {
                    sum_incoming += scores[source_idx] / degree as f64;
                }
            }

            next_scores[i] = base_score + d * sum_incoming;
            round_sum += next_scores[i];
        }

        scores.copy_from_slice(&next_scores);
        rank_sum = round_sum;
    }

    for (id, score) in ids.iter().zip(scores) {
        if let Some(node) = graph.node_mut(id) {
            node.set_rank(score);
        }
    }
    graph.set_rank_sum(rank_sum);

    debug!(
        nodes = n,
        iterations = config.iterations,
        rank_sum,
        "page rank complete"
    );
}
