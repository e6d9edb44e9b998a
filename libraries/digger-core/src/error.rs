/// Core error types for Crate Digger
use crate::types::AlbumId;
use thiserror::Error;

/// Result type alias using `DiggerError`
pub type Result<T> = std::result::Result<T, DiggerError>;

/// Core error type for Crate Digger
#[derive(Error, Debug)]
pub enum DiggerError {
    /// Album not found
    #[error("Album not found: {0}")]
    AlbumNotFound(AlbumId),

    /// A field failed coercion or validation
    #[error("Invalid {field}: {message}")]
    InvalidInput {
        /// Offending field, as named on the wire
        field: String,
        /// What was wrong with it
        message: String,
    },

    /// The store could not be reached
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// The store was reached but the operation failed
    #[error("Database error: {0}")]
    Database(String),

    /// Storage-related errors outside the database itself
    #[error("Storage error: {0}")]
    Storage(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DiggerError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(field: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: msg.into(),
        }
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for DiggerError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::WorkerCrashed => Self::StoreUnavailable(err.to_string()),
            other => Self::Database(other.to_string()),
        }
    }
}
