//! Related-artist graph core
//!
//! This module implements the bounded graph built around a seed artist:
//! - Nodes with provider-supplied attributes and id-keyed adjacency sets
//! - An insertion-ordered arena as the single owner of every node
//! - Stack-order bounded exploration through the relation provider

pub mod node;
pub mod store;
pub mod types;

// Re-export main types
pub use node::{ArtistNode, PLACEHOLDER_IMAGE_URL};
pub use store::{ArtistGraph, GraphError, GraphResult, DEFAULT_MAX_SIZE};
pub use types::ArtistId;
