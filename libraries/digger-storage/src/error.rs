/// Storage-specific errors
use thiserror::Error;

/// Errors raised while opening the store
#[derive(Error, Debug)]
pub enum StorageError {
    /// Database connection error
    #[error("Database connection error: {0}")]
    Connection(String),

    /// Migration error
    #[error("Migration error: {0}")]
    Migration(String),

    /// Database error from `SQLx`
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<sqlx::migrate::MigrateError> for StorageError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        Self::Migration(err.to_string())
    }
}

impl From<StorageError> for digger_core::DiggerError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Database(e) => e.into(),
            StorageError::Connection(msg) => digger_core::DiggerError::StoreUnavailable(msg),
            StorageError::Migration(msg) => digger_core::DiggerError::storage(msg),
            StorageError::Io(e) => digger_core::DiggerError::Io(e),
        }
    }
}
