/// Album catalogue service
use crate::{
    error::Result,
    jobs::{ReloadReport, SeedJob, SeedQueue},
    seed::SeedData,
};
use digger_core::{
    Album, AlbumId, AlbumInput, AlbumRepository, DiggerError, PageRequest, SearchRequest,
};
use std::sync::Arc;

/// Catalogue operations over an injected repository
pub struct AlbumService {
    repository: Arc<dyn AlbumRepository>,
    seed: Arc<SeedData>,
    reload_workers: usize,
}

impl AlbumService {
    pub fn new(
        repository: Arc<dyn AlbumRepository>,
        seed: SeedData,
        reload_workers: usize,
    ) -> Self {
        Self {
            repository,
            seed: Arc::new(seed),
            reload_workers,
        }
    }

    /// Wipe the store, reinsert every seed album and rebuild the search index
    ///
    /// Inserts run on a bounded worker pool and all of them finish before the
    /// index is dropped and recreated. Records that fail are reported, not
    /// retried.
    pub async fn reload(&self) -> Result<ReloadReport> {
        tracing::info!(
            "Reloading {} seed albums with {} workers",
            self.seed.albums.len(),
            self.reload_workers
        );

        self.repository.flush_all().await?;

        let queue = Arc::new(SeedQueue::new(
            Arc::clone(&self.repository),
            self.reload_workers,
        ));
        for (index, input) in self.seed.albums.iter().enumerate() {
            queue
                .enqueue(SeedJob {
                    index,
                    input: input.clone(),
                    owner: self.seed.owner_for(index).map(str::to_string),
                })
                .await;
        }
        let report = queue.run().await?;

        self.repository.drop_index().await?;
        self.repository.create_index().await?;

        if report.failed.is_empty() {
            tracing::info!("Reload complete: {} albums inserted", report.inserted);
        } else {
            tracing::warn!(
                "Reload complete: {} albums inserted, {} failed",
                report.inserted,
                report.failed.len()
            );
        }

        Ok(report)
    }

    pub async fn create(&self, input: AlbumInput) -> Result<Album> {
        let album = input.into_new_album()?;
        let album = self.repository.create(album).await?;
        tracing::info!("Created album {}", album.entity_id);
        Ok(album)
    }

    pub async fn get_all(&self, page: PageRequest) -> Result<Vec<Album>> {
        Ok(self.repository.page(page).await?)
    }

    pub async fn get_one(&self, id: &AlbumId) -> Result<Album> {
        self.repository
            .fetch(id)
            .await?
            .ok_or_else(|| DiggerError::AlbumNotFound(id.clone()).into())
    }

    pub async fn search(&self, request: &SearchRequest) -> Result<Vec<Album>> {
        Ok(self.repository.search(request).await?)
    }

    /// Fetch, merge the validated patch over the stored record, and save
    pub async fn update(&self, id: &AlbumId, input: AlbumInput) -> Result<Album> {
        let patch = input.into_patch()?;

        let mut album = self.get_one(id).await?;
        if patch.is_empty() {
            return Ok(album);
        }
        patch.apply_to(&mut album);

        let album = self.repository.save(&album).await?;
        tracing::info!("Updated album {}", album.entity_id);
        Ok(album)
    }

    /// Remove an album; removing a missing ID is not an error
    ///
    /// Returns whether anything was removed.
    pub async fn delete(&self, id: &AlbumId) -> Result<bool> {
        let removed = self.repository.remove(id).await?;
        if removed {
            tracing::info!("Deleted album {}", id);
        }
        Ok(removed)
    }

    /// Make sure the search index exists, e.g. on a fresh database
    pub async fn ensure_index(&self) -> Result<()> {
        Ok(self.repository.create_index().await?)
    }
}
