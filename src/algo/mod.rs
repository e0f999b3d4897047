//! Graph algorithms
//!
//! Ranking over the artist graph. Algorithms project the arena into a
//! dense, integer-indexed view before iterating; id-keyed maps are good for
//! random access but slow for the tight per-round loops here.

pub mod pagerank;

pub use pagerank::{page_rank, PageRankConfig};
