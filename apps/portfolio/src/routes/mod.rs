pub mod health;
pub mod pages;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::export::handlers::handle_download;
use crate::import::handlers::handle_import_json;
use crate::preview::handlers::handle_preview;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_body_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        // UI pages
        .route("/", get(pages::landing_handler))
        .route("/generator", get(pages::generator_handler))
        // Generator API
        .route("/preview", post(handle_preview))
        .route("/import-json", post(handle_import_json))
        .route("/download", post(handle_download))
        .layer(body_limit)
        .with_state(state)
}
