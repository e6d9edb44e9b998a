//! Crate Digger Core
//!
//! Store-agnostic domain types, the repository capability trait, and the
//! shared input validator for the album catalogue.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Album`, `NewAlbum`, `AlbumPatch`, `SeedUser`
//! - **Query Types**: `PageRequest`, `SearchRequest`, `SearchField`
//! - **Repository**: the `AlbumRepository` trait every store implements
//! - **Validation**: `AlbumInput`, the loose wire shape coerced into typed records
//! - **Error Handling**: unified `DiggerError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use digger_core::validation::AlbumInput;
//!
//! let input: AlbumInput = serde_json::from_value(serde_json::json!({
//!     "artist": "The Offspring",
//!     "title": "Smash",
//!     "condition": "8",
//!     "format": "CD",
//!     "price": "8",
//! }))
//! .unwrap();
//!
//! let album = input.into_new_album().unwrap();
//! assert_eq!(album.condition, 8);
//! assert!(album.for_sale);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod repository;
pub mod types;
pub mod validation;

pub use error::{DiggerError, Result};
pub use repository::AlbumRepository;
pub use types::{
    Album, AlbumId, AlbumPatch, NewAlbum, PageRequest, SearchField, SearchRequest, SeedUser,
};
pub use validation::AlbumInput;
