//! Artist node implementation
//!
//! Nodes own their identity, display attributes, and two id-keyed adjacency
//! sets. Adjacency is stored as ids rather than node references; every
//! neighbor lookup resolves through the graph's arena, which keeps the
//! structure cycle-safe under ownership.

use super::store::{GraphError, GraphResult};
use super::types::ArtistId;
use crate::provider::RawArtist;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Image shown when a record carries none
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/450";

/// A node in the related-artist graph
///
/// `incoming` holds the ids of artists pointing at this one, `outgoing` the
/// ids this artist points to. Both are sets: re-adding an edge to the same
/// neighbor is a no-op, never a duplicate. Insertion order is preserved so
/// iteration is deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistNode {
    /// Provider-supplied unique identifier
    pub id: ArtistId,

    /// Display name
    pub name: String,

    /// Genre tags
    pub genres: Vec<String>,

    /// Image URL, placeholder when the record had none
    pub image_url: String,

    /// Popularity scalar from the provider
    pub popularity: u32,

    /// Current PageRank score, 0 until the graph initializes it
    pub rank: f64,

    /// Ids of artists with an edge into this node
    pub incoming: IndexSet<ArtistId>,

    /// Ids of artists this node has an edge to
    pub outgoing: IndexSet<ArtistId>,
}

impl ArtistNode {
    /// Build a node from a raw provider record
    ///
    /// Fails with [`GraphError::MalformedRecord`] when a required field is
    /// absent; a missing or empty image list falls back to
    /// [`PLACEHOLDER_IMAGE_URL`].
    pub fn from_record(record: RawArtist) -> GraphResult<Self> {
        let id = record.id.ok_or(GraphError::MalformedRecord("id"))?;
        let name = record.name.ok_or(GraphError::MalformedRecord("name"))?;
        let popularity = record
            .popularity
            .ok_or(GraphError::MalformedRecord("popularity"))?;
        let image_url = record
            .images
            .into_iter()
            .next()
            .map(|image| image.url)
            .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string());

        Ok(ArtistNode {
            id: ArtistId::new(id),
            name,
            genres: record.genres,
            image_url,
            popularity,
            rank: 0.0,
            incoming: IndexSet::new(),
            outgoing: IndexSet::new(),
        })
    }

    /// Register an outgoing edge to `target`
    ///
    /// Returns false if the edge was already present.
    pub fn add_outgoing(&mut self, target: ArtistId) -> bool {
        self.outgoing.insert(target)
    }

    /// Register an incoming edge from `source`
    pub fn add_incoming(&mut self, source: ArtistId) -> bool {
        self.incoming.insert(source)
    }

    /// Assign a rank unconditionally (initialization only)
    pub fn set_rank(&mut self, rank: f64) {
        self.rank = rank;
    }

    /// Number of outgoing edges
    pub fn out_degree(&self) -> usize {
        self.outgoing.len()
    }

    /// Number of incoming edges
    pub fn in_degree(&self) -> usize {
        self.incoming.len()
    }
}

impl PartialEq for ArtistNode {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ArtistNode {}

impl std::hash::Hash for ArtistNode {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
