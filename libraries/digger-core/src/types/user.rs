/// Seed user type
use serde::{Deserialize, Serialize};

/// A user from the seed list
///
/// Users are never persisted; reload only uses them to hand out album
/// ownership round-robin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedUser {
    /// Name copied into `Album::owner`
    pub username: String,
}

impl SeedUser {
    /// Create a seed user
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}
