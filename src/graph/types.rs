//! Core type definitions for the artist graph

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for an artist node
///
/// Ids are opaque strings supplied by the relation provider and are stable
/// for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct ArtistId(String);

impl ArtistId {
    pub fn new(id: impl Into<String>) -> Self {
        ArtistId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArtistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ArtistId {
    fn from(s: String) -> Self {
        ArtistId(s)
    }
}

impl From<&str> for ArtistId {
    fn from(s: &str) -> Self {
        ArtistId(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artist_id() {
        let id = ArtistId::new("6lcwlkAjBPSKnFBZjjZFJs");
        assert_eq!(id.as_str(), "6lcwlkAjBPSKnFBZjjZFJs");
        assert_eq!(format!("{}", id), "6lcwlkAjBPSKnFBZjjZFJs");

        let id2: ArtistId = "abc".into();
        assert_eq!(id2.as_str(), "abc");
    }

    #[test]
    fn test_id_ordering() {
        let a = ArtistId::new("a");
        let b = ArtistId::new("b");
        assert!(a < b);
    }
}
