/// API route modules
pub mod albums;
pub mod health;
pub mod reload;

use crate::{
    config::ServerSettings,
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use std::time::Duration;
use tower::Layer;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    normalize_path::{NormalizePath, NormalizePathLayer},
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Routes under `/api`, without middleware
pub fn router() -> Router<AppState> {
    let routes = Router::new()
        .route("/health", get(health::health))
        .route("/reload", get(reload::reload))
        .route(
            "/albums",
            get(albums::list_albums).post(albums::create_album),
        )
        .route("/albums/search", get(albums::search_albums))
        .route(
            "/albums/:id",
            get(albums::get_album)
                .put(albums::update_album)
                .delete(albums::delete_album),
        );

    Router::new().nest("/api", routes)
}

/// Full application: routes, state, CORS, timeout and tracing
///
/// Trailing slashes are trimmed before routing, so the normalizing layer
/// wraps the router instead of being added with `Router::layer`.
pub fn app(app_state: AppState, settings: &ServerSettings) -> Result<NormalizePath<Router>> {
    let router = router()
        .layer(TimeoutLayer::new(Duration::from_secs(
            settings.request_timeout_secs,
        )))
        .layer(cors(&settings.cors_origin)?)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .with_state(app_state);

    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}

fn cors(origin: &str) -> Result<CorsLayer> {
    let allow_origin = if origin == "*" {
        AllowOrigin::any()
    } else {
        let origin = HeaderValue::from_str(origin)
            .map_err(|e| ServerError::Config(format!("Invalid CORS origin {:?}: {}", origin, e)))?;
        AllowOrigin::exact(origin)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]))
}
