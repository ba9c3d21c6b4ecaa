//! Axum route handler for the static bundle download.

use axum::{
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Local;
use tracing::info;

use crate::content::filter_sections;
use crate::errors::AppError;
use crate::export::build_static_bundle;
use crate::models::Portfolio;

pub const ZIP_CONTENT_TYPE: &str = "application/zip";

/// POST /download
///
/// Builds the full archive in memory and returns it as an attachment named
/// `portfolio_static_<timestamp>.zip`.
pub async fn handle_download(Json(portfolio): Json<Portfolio>) -> Result<Response, AppError> {
    let filtered = filter_sections(&portfolio);
    let bundle = build_static_bundle(filtered, &Local::now())?;
    info!(
        "Built {} ({} bytes, {} images)",
        bundle.filename,
        bundle.bytes.len(),
        bundle.image_count
    );

    let headers = [
        (header::CONTENT_TYPE, ZIP_CONTENT_TYPE.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={}", bundle.filename),
        ),
    ];
    Ok((headers, bundle.bytes).into_response())
}
