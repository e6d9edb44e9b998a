//! Crate Digger Storage
//!
//! `SQLite` implementation of the album repository.
//!
//! Albums live in a plain table; the secondary search index is an FTS5
//! external-content table kept in sync by triggers. Dropping and recreating
//! the index is an explicit repository operation, so a reload can rebuild it
//! after bulk inserts.
//!
//! # Example
//!
//! ```rust,no_run
//! use digger_core::{AlbumRepository, PageRequest};
//! use digger_storage::SqliteAlbumRepository;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = digger_storage::open("sqlite://albums.db", 5).await?;
//! let repository = SqliteAlbumRepository::new(pool);
//! repository.create_index().await?;
//!
//! let first_page = repository.page(PageRequest::default()).await?;
//! # Ok(())
//! # }
//! ```

mod error;
mod repository;

// Vertical slices
pub mod albums;
pub mod search_index;

pub use error::StorageError;
pub use repository::SqliteAlbumRepository;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://albums.db>`)
/// * `max_connections` - Upper bound on pooled connections
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!("Creating pool with URL: {}", database_url);

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Open the store: create the pool and bring the schema up to date
///
/// # Errors
///
/// Returns `StorageError::Connection` if the database cannot be opened and
/// `StorageError::Migration` if the schema cannot be migrated
pub async fn open(database_url: &str, max_connections: u32) -> Result<SqlitePool, StorageError> {
    if let Some(parent) = database_parent_dir(database_url) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let pool = create_pool(database_url, max_connections)
        .await
        .map_err(|e| StorageError::Connection(format!("{}: {}", database_url, e)))?;
    run_migrations(&pool).await?;
    tracing::info!("Store opened at {}", database_url);
    Ok(pool)
}

/// Directory that must exist before `SQLite` can create the database file
fn database_parent_dir(database_url: &str) -> Option<&std::path::Path> {
    let path = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?
        .split('?')
        .next()?;
    if path.is_empty() || path.starts_with(":memory:") {
        return None;
    }
    std::path::Path::new(path)
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
}
