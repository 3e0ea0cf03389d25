//! Member identifiers.
//!
//! A member is an opaque string naming a participant in a group. It is not
//! necessarily a registered user; a group may track people who never log in.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier for a group participant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(String);

impl MemberId {
    /// Creates a member identifier from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the identifier is empty or only whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MemberId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for MemberId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for MemberId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(MemberId::from("alice"), 1);
        assert_eq!(map.get("alice"), Some(&1));
    }

    #[test]
    fn test_blank() {
        assert!(MemberId::from("  ").is_blank());
        assert!(!MemberId::from("bob").is_blank());
    }

    #[test]
    fn test_transparent_serde() {
        let id: MemberId = serde_json::from_str("\"carol\"").unwrap();
        assert_eq!(id.as_str(), "carol");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"carol\"");
    }
}
