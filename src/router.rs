use crate::logging::logging_middleware;
use crate::modules::health::router::init_health_router;
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method};
use axum::{Router, middleware};
use cohort_config::CorsConfig;
use tower_http::cors::CorsLayer;

pub fn init_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors);
    let body_limit = DefaultBodyLimit::max(state.config.uploads.max_content_length);

    Router::new()
        .nest(
            "/api",
            Router::new().nest("/health", init_health_router()),
        )
        .with_state(state)
        .layer(body_limit)
        .layer(cors)
        .layer(middleware::from_fn(logging_middleware))
}

/// Credentialed CORS restricted to the fixed allow-list.
fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .allow_credentials(true)
}
