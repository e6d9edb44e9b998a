use crate::{albums, search_index};
use async_trait::async_trait;
use digger_core::{error::Result, repository::AlbumRepository, types::*};
use sqlx::SqlitePool;

/// Album repository backed by `SQLite`
#[derive(Clone)]
pub struct SqliteAlbumRepository {
    pool: SqlitePool,
}

impl SqliteAlbumRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AlbumRepository for SqliteAlbumRepository {
    async fn flush_all(&self) -> Result<()> {
        let removed = albums::delete_all(&self.pool).await?;
        tracing::debug!("Flushed {} albums", removed);
        Ok(())
    }

    async fn create(&self, album: NewAlbum) -> Result<Album> {
        albums::create(&self.pool, album).await
    }

    async fn fetch(&self, id: &AlbumId) -> Result<Option<Album>> {
        albums::get_by_id(&self.pool, id).await
    }

    async fn save(&self, album: &Album) -> Result<Album> {
        albums::update(&self.pool, album).await
    }

    async fn remove(&self, id: &AlbumId) -> Result<bool> {
        albums::delete(&self.pool, id).await
    }

    async fn page(&self, page: PageRequest) -> Result<Vec<Album>> {
        albums::page(&self.pool, page).await
    }

    async fn search(&self, request: &SearchRequest) -> Result<Vec<Album>> {
        albums::search(&self.pool, request).await
    }

    async fn drop_index(&self) -> Result<()> {
        search_index::drop_index(&self.pool).await
    }

    async fn create_index(&self) -> Result<()> {
        search_index::create_index(&self.pool).await
    }
}
