pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::analysis::handlers;
use crate::config::Config;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let cors = build_cors(&state.config);
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/", get(health::home_handler))
        .route("/health", get(health::health_handler))
        .route("/analyze", post(handlers::handle_analyze))
        .route("/analyze/upload", post(handlers::handle_analyze_upload))
        .route("/ats-score", post(handlers::handle_ats_score))
        .layer(body_limit)
        .layer(cors)
        .with_state(state)
}

/// Permissive unless an origin allow-list is configured. Unparseable origins are skipped.
fn build_cors(config: &Config) -> CorsLayer {
    let Some(origins) = &config.cors_allowed_origins else {
        return CorsLayer::permissive();
    };

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{origin}'");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
