//! Artistgraph
//!
//! A bounded related-artist graph explorer. Starting from a seed artist
//! and a relation-lookup capability, it discovers a closed node set by
//! stack-order exploration, scores every node with a fixed-iteration
//! PageRank pass, and exports a nodes/edges payload sized by rank for a
//! visualization front end.
//!
//! The crate is the algorithmic core only. The HTTP layer, the concrete
//! relation API client, and credential handling are external
//! collaborators; they meet this crate at [`provider::RelatedProvider`]
//! on the way in and [`export::GraphJson`] on the way out.
//!
//! # Example
//!
//! ```rust
//! use artistgraph::builder::{build, BuildConfig, BuildOutcome};
//! use artistgraph::graph::ArtistId;
//! use artistgraph::provider::{ProviderResult, RawArtist};
//!
//! // A canned relation: the seed is related to one other artist.
//! let provider = |id: &ArtistId| -> ProviderResult<Vec<RawArtist>> {
//!     if id.as_str() == "seed" {
//!         Ok(vec![RawArtist::new("other", "Other Artist", 42)])
//!     } else {
//!         Ok(Vec::new())
//!     }
//! };
//!
//! let seed = RawArtist::new("seed", "Seed Artist", 54);
//! let outcome = build(Some(seed), &provider, &BuildConfig::default()).unwrap();
//!
//! match outcome {
//!     BuildOutcome::Built(report) => {
//!         assert_eq!(report.graph.nodes.len(), 2);
//!         assert_eq!(report.root_node.id, "seed".into());
//!     }
//!     BuildOutcome::SeedNotFound => unreachable!(),
//! }
//! ```

#![warn(clippy::all)]

pub mod algo;
pub mod builder;
pub mod export;
pub mod graph;
pub mod provider;

// Re-export main types for convenience
pub use algo::PageRankConfig;
pub use builder::{build, BuildConfig, BuildOutcome, BuildReport, NodeSummary};
pub use export::{export, EdgeJson, GraphJson, NodeJson};
pub use graph::{ArtistGraph, ArtistId, ArtistNode, GraphError, GraphResult};
pub use provider::{ProviderError, ProviderResult, RawArtist, RawImage, RelatedProvider};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
