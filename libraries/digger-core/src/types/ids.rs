/// ID types for Crate Digger entities
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Album entity identifier
///
/// Opaque to callers: the repository assigns it on creation and it never
/// changes for the lifetime of the entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlbumId(String);

impl AlbumId {
    /// Wrap an existing album ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new random album ID
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AlbumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AlbumId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let a = AlbumId::generate();
        let b = AlbumId::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 36);
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = AlbumId::new("01HZX");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"01HZX\"");
    }
}
