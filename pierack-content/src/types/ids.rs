//! Typed identifiers for content records

use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

/// Identifier for a pie record
///
/// Backed by a ULID string so IDs sort by creation time and stay
/// filesystem-safe (they become file stems in the store).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PieId(String);

impl PieId {
    /// Generate a fresh ID
    pub fn new() -> Self {
        Self(Ulid::new().to_string())
    }

    /// Reconstruct an ID from its string form (e.g. a file stem)
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// The ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PieId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PieId {
    fn from(s: &str) -> Self {
        Self::from_string(s)
    }
}

impl From<String> for PieId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = PieId::new();
        let b = PieId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_from_string_round_trip() {
        let id = PieId::from_string("01J8ZAVE8PZX5N2Y4Q6W0DEMO0");
        assert_eq!(id.as_str(), "01J8ZAVE8PZX5N2Y4Q6W0DEMO0");
        assert_eq!(id.to_string(), "01J8ZAVE8PZX5N2Y4Q6W0DEMO0");
    }

    #[test]
    fn test_serialize_transparent() {
        let id = PieId::from_string("abc");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abc\"");
    }
}
