/// Albums API routes
use crate::{error::Result, state::AppState};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use digger_core::{Album, AlbumId, AlbumInput, PageRequest, SearchRequest};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub removed: bool,
}

/// GET /api/albums?offset=&count=
pub async fn list_albums(
    State(app_state): State<AppState>,
    query: std::result::Result<Query<PageRequest>, QueryRejection>,
) -> Result<Json<Vec<Album>>> {
    let Query(page) = query?;
    let albums = app_state.albums.get_all(page).await?;
    Ok(Json(albums))
}

/// POST /api/albums
pub async fn create_album(
    State(app_state): State<AppState>,
    body: std::result::Result<Json<AlbumInput>, JsonRejection>,
) -> Result<Json<Album>> {
    let Json(input) = body?;
    let album = app_state.albums.create(input).await?;
    Ok(Json(album))
}

/// GET /api/albums/search?field=value
///
/// Exactly one parameter is accepted; its name picks the field to search.
pub async fn search_albums(
    State(app_state): State<AppState>,
    query: std::result::Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<Album>>> {
    let Query(pairs) = query?;
    let request = SearchRequest::from_pairs(pairs)?;
    let albums = app_state.albums.search(&request).await?;
    Ok(Json(albums))
}

/// GET /api/albums/:id
pub async fn get_album(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<Album>> {
    let album = app_state.albums.get_one(&AlbumId::new(id)).await?;
    Ok(Json(album))
}

/// PUT /api/albums/:id
pub async fn update_album(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    body: std::result::Result<Json<AlbumInput>, JsonRejection>,
) -> Result<Json<Album>> {
    let Json(input) = body?;
    let album = app_state.albums.update(&AlbumId::new(id), input).await?;
    Ok(Json(album))
}

/// DELETE /api/albums/:id
pub async fn delete_album(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<DeleteResponse>> {
    let removed = app_state.albums.delete(&AlbumId::new(id)).await?;
    Ok(Json(DeleteResponse {
        success: true,
        removed,
    }))
}
