/// Seed data used by reload
use crate::error::{Result, ServerError};
use digger_core::{AlbumInput, SeedUser};
use serde::de::DeserializeOwned;
use std::path::Path;

const BUNDLED_ALBUMS: &str = include_str!("../../seed/albums.json");
const BUNDLED_USERS: &str = include_str!("../../seed/users.json");

/// Static album and user lists a reload repopulates the store from
///
/// Album records are kept in their raw wire shape; each one is validated
/// when it is inserted so a bad record fails on its own.
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub albums: Vec<AlbumInput>,
    pub users: Vec<SeedUser>,
}

impl SeedData {
    pub fn new(albums: Vec<AlbumInput>, users: Vec<SeedUser>) -> Self {
        Self { albums, users }
    }

    /// Seed data compiled into the binary
    pub fn bundled() -> Result<Self> {
        Ok(Self {
            albums: parse("bundled albums.json", BUNDLED_ALBUMS)?,
            users: parse("bundled users.json", BUNDLED_USERS)?,
        })
    }

    /// Read `albums.json` and `users.json` from a directory
    pub async fn load_dir(dir: &Path) -> Result<Self> {
        let albums_path = dir.join("albums.json");
        let users_path = dir.join("users.json");

        let albums = tokio::fs::read_to_string(&albums_path).await?;
        let users = tokio::fs::read_to_string(&users_path).await?;

        Ok(Self {
            albums: parse(&albums_path.display().to_string(), &albums)?,
            users: parse(&users_path.display().to_string(), &users)?,
        })
    }

    /// Bundled data unless a directory is configured
    pub async fn load(dir: Option<&Path>) -> Result<Self> {
        let seed = match dir {
            Some(dir) => Self::load_dir(dir).await?,
            None => Self::bundled()?,
        };
        tracing::info!(
            "Loaded seed data: {} albums, {} users",
            seed.albums.len(),
            seed.users.len()
        );
        Ok(seed)
    }

    /// Owner for the album at `index`, assigned round-robin over the users
    pub fn owner_for(&self, index: usize) -> Option<&str> {
        if self.users.is_empty() {
            return None;
        }
        Some(self.users[index % self.users.len()].username.as_str())
    }
}

fn parse<T: DeserializeOwned>(source: &str, json: &str) -> Result<Vec<T>> {
    serde_json::from_str(json)
        .map_err(|e| ServerError::Config(format!("Invalid seed file {}: {}", source, e)))
}
