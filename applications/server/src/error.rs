/// Server error types
use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use digger_core::DiggerError;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    /// Machine-readable error kind sent to clients
    pub fn kind(&self) -> &'static str {
        match self {
            ServerError::NotFound(_) => "not_found",
            ServerError::BadRequest(_) => "invalid_input",
            ServerError::StoreUnavailable(_) => "store_unavailable",
            ServerError::Store(_) => "store_error",
            ServerError::Internal(_) | ServerError::Config(_) | ServerError::Io(_) => "internal",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ServerError::Store(_) => StatusCode::BAD_GATEWAY,
            ServerError::Internal(_) | ServerError::Config(_) | ServerError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<DiggerError> for ServerError {
    fn from(err: DiggerError) -> Self {
        match err {
            DiggerError::AlbumNotFound(id) => ServerError::NotFound(format!("Album {}", id)),
            DiggerError::InvalidInput { .. } => ServerError::BadRequest(err.to_string()),
            DiggerError::StoreUnavailable(msg) => ServerError::StoreUnavailable(msg),
            DiggerError::Database(msg) | DiggerError::Storage(msg) => ServerError::Store(msg),
            DiggerError::Io(e) => ServerError::Io(e),
        }
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        ServerError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ServerError {
    fn from(rejection: QueryRejection) -> Self {
        ServerError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ServerError::NotFound(msg) | ServerError::BadRequest(msg) => msg.clone(),
            ServerError::StoreUnavailable(msg) => {
                tracing::error!("Store unavailable: {}", msg);
                "The album store is unavailable".to_string()
            }
            ServerError::Store(msg) => {
                tracing::error!("Store error: {}", msg);
                "The album store failed to complete the operation".to_string()
            }
            ServerError::Config(msg) => {
                tracing::error!("Config error: {}", msg);
                "Configuration error".to_string()
            }
            ServerError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal server error".to_string()
            }
            ServerError::Io(e) => {
                tracing::error!("IO error: {:?}", e);
                "IO error".to_string()
            }
        };

        let body = Json(json!({
            "kind": self.kind(),
            "message": message,
        }));

        (status, body).into_response()
    }
}
