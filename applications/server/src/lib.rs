//! Crate Digger server library
//!
//! REST API over the album catalogue: CRUD, single-field search and the
//! reload operation that reseeds the store and rebuilds its search index.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod jobs;
pub mod seed;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use seed::SeedData;
pub use services::AlbumService;
pub use state::AppState;
