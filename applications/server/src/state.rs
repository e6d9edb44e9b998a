/// Shared application state
use crate::services::AlbumService;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub albums: Arc<AlbumService>,
}

impl AppState {
    pub fn new(albums: Arc<AlbumService>) -> Self {
        Self { albums }
    }
}
