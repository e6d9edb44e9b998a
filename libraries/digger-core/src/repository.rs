//! Repository trait for album stores

use crate::error::Result;
use crate::types::{Album, AlbumId, NewAlbum, PageRequest, SearchRequest};
use async_trait::async_trait;

/// Capability interface over the document store holding albums
///
/// Implementations own ID assignment and the secondary search index. None of
/// the operations retry; a failed round-trip is reported to the caller as is.
#[async_trait]
pub trait AlbumRepository: Send + Sync {
    /// Delete every stored album
    async fn flush_all(&self) -> Result<()>;

    /// Assign an ID to a new album and persist it
    async fn create(&self, album: NewAlbum) -> Result<Album>;

    /// Fetch an album by ID
    ///
    /// # Returns
    /// - `Ok(Some(album))` if found
    /// - `Ok(None)` if not found
    async fn fetch(&self, id: &AlbumId) -> Result<Option<Album>>;

    /// Overwrite an existing album
    ///
    /// # Errors
    /// Returns `DiggerError::AlbumNotFound` if no album has this ID
    async fn save(&self, album: &Album) -> Result<Album>;

    /// Remove an album by ID
    ///
    /// # Returns
    /// - `Ok(true)` if an album was removed
    /// - `Ok(false)` if there was nothing to remove
    async fn remove(&self, id: &AlbumId) -> Result<bool>;

    /// List albums in store order
    async fn page(&self, page: PageRequest) -> Result<Vec<Album>>;

    /// Every album whose field matches the search value
    async fn search(&self, request: &SearchRequest) -> Result<Vec<Album>>;

    /// Drop the search index; a no-op if it does not exist
    async fn drop_index(&self) -> Result<()>;

    /// Create the search index if missing and rebuild it from stored albums
    async fn create_index(&self) -> Result<()>;
}
