use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once at startup and never mutated; the analysis core does not read it.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}
