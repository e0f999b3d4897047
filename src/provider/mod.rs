//! Relation provider capability
//!
//! The graph core never talks to a remote API itself. It consumes a single
//! capability of shape `lookup(id) -> raw records`, expressed here as the
//! [`RelatedProvider`] trait. The concrete client (HTTP, fixture file,
//! in-memory map) lives with the caller.

use crate::graph::types::ArtistId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by a relation provider
///
/// The core propagates these verbatim; retry and backoff policy belongs to
/// the provider implementation, not here.
#[derive(Error, Debug, PartialEq)]
pub enum ProviderError {
    #[error("related-artist lookup failed for {id}: {reason}")]
    Lookup { id: ArtistId, reason: String },
}

impl ProviderError {
    pub fn lookup(id: impl Into<ArtistId>, reason: impl Into<String>) -> Self {
        ProviderError::Lookup {
            id: id.into(),
            reason: reason.into(),
        }
    }
}

pub type ProviderResult<T> = Result<T, ProviderError>;

/// An image reference inside a raw artist record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawImage {
    pub url: String,
}

/// One raw record as returned by the relation provider
///
/// Field presence follows the upstream artist object: `id`, `name` and
/// `popularity` are required for a usable node, `genres` and `images` may
/// be absent or empty. Validation happens when the record is turned into a
/// node, so a malformed record fails fast instead of producing a corrupt
/// graph entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawArtist {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub images: Vec<RawImage>,
    pub popularity: Option<u32>,
}

impl RawArtist {
    /// Build a minimal well-formed record
    pub fn new(id: impl Into<String>, name: impl Into<String>, popularity: u32) -> Self {
        RawArtist {
            id: Some(id.into()),
            name: Some(name.into()),
            genres: Vec::new(),
            images: Vec::new(),
            popularity: Some(popularity),
        }
    }
}

/// The relation-lookup capability consumed by graph exploration
pub trait RelatedProvider {
    /// Return the raw records for every artist related to `id`.
    fn related(&self, id: &ArtistId) -> ProviderResult<Vec<RawArtist>>;
}

/// Plain functions are providers, so callers can pass a closure over a
/// fixture map or an API client method.
impl<F> RelatedProvider for F
where
    F: Fn(&ArtistId) -> ProviderResult<Vec<RawArtist>>,
{
    fn related(&self, id: &ArtistId) -> ProviderResult<Vec<RawArtist>> {
        self(id)
    }
}
