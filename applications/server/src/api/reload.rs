/// Catalogue reload API route
use crate::{
    error::{Result, ServerError},
    jobs::ReloadReport,
    state::AppState,
};
use axum::{extract::State, Json};
use std::sync::Arc;

/// GET /api/reload
///
/// Replaces the whole catalogue with the seed data. Responds once every
/// insert has finished and the search index has been rebuilt.
///
/// The reload runs on its own task: if the request times out or the client
/// goes away, the reload still runs to completion and the index is rebuilt.
pub async fn reload(State(app_state): State<AppState>) -> Result<Json<ReloadReport>> {
    let albums = Arc::clone(&app_state.albums);
    let report = tokio::spawn(async move { albums.reload().await })
        .await
        .map_err(|e| ServerError::Internal(format!("Reload task failed: {}", e)))??;
    Ok(Json(report))
}
