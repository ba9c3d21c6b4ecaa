use crate::config::Config;

/// Shared application state injected into route handlers via Axum extractors.
///
/// Every request owns its portfolio data end to end; the only thing shared is
/// the configuration fixed at startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}
