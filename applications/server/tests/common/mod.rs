//! Common test utilities and fixtures
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use digger_core::{AlbumInput, AlbumRepository, SeedUser};
use digger_server::{api, config::ServerConfig, AlbumService, AppState, SeedData};
use digger_storage::SqliteAlbumRepository;
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

/// Application over a real SQLite file in a temp dir
pub struct TestApp {
    pub state: AppState,
    pub config: ServerConfig,
    _temp_dir: TempDir,
}

impl TestApp {
    /// App seeded with the bundled seed data
    pub async fn new() -> Self {
        Self::with_seed(SeedData::bundled().unwrap()).await
    }

    pub async fn with_seed(seed: SeedData) -> Self {
        Self::build(seed, ServerConfig::default(), |repository| {
            Arc::new(repository) as Arc<dyn AlbumRepository>
        })
        .await
    }

    /// App whose repository is wrapped, e.g. to slow down or fail calls
    pub async fn build<F>(seed: SeedData, config: ServerConfig, wrap: F) -> Self
    where
        F: FnOnce(SqliteAlbumRepository) -> Arc<dyn AlbumRepository>,
    {
        let temp_dir = TempDir::new().unwrap();
        let db_url = format!("sqlite://{}", temp_dir.path().join("albums.db").display());

        let pool = digger_storage::open(&db_url, 5).await.unwrap();
        let repository = wrap(SqliteAlbumRepository::new(pool));

        let albums = Arc::new(AlbumService::new(repository, seed, config.reload.workers));
        albums.ensure_index().await.unwrap();

        Self {
            state: AppState::new(albums),
            config,
            _temp_dir: temp_dir,
        }
    }

    /// Send a request through the full middleware stack
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let app = api::app(self.state.clone(), &self.config.server).unwrap();
        let response = app.oneshot(request).await.unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, body)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(
            Request::builder()
                .method(Method::DELETE)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> (StatusCode, Value) {
        self.send_json(Method::POST, uri, body.to_string()).await
    }

    pub async fn put_json(&self, uri: &str, body: &Value) -> (StatusCode, Value) {
        self.send_json(Method::PUT, uri, body.to_string()).await
    }

    pub async fn send_json(&self, method: Method, uri: &str, body: String) -> (StatusCode, Value) {
        self.send(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
    }
}

/// Test fixtures
pub mod fixtures {
    use super::*;
    use serde_json::json;

    pub fn seed_album(artist: &str, title: &str) -> AlbumInput {
        serde_json::from_value(json!({
            "artist": artist,
            "title": title,
            "condition": "8",
            "format": "CD",
            "comments": "",
            "price": "8",
            "forSale": "true"
        }))
        .unwrap()
    }

    pub fn users(names: &[&str]) -> Vec<SeedUser> {
        names.iter().map(|name| SeedUser::new(*name)).collect()
    }
}
