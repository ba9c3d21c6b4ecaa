//! Axum route handler for the preview page.

use axum::{response::Html, Json};
use tracing::info;

use crate::content::{filter_sections, group_publications_by_year};
use crate::errors::AppError;
use crate::models::Portfolio;
use crate::preview::render_portfolio_page;

/// POST /preview
///
/// Filters the submitted portfolio to the selected sections, groups the
/// remaining publications by year and returns the rendered page.
pub async fn handle_preview(Json(portfolio): Json<Portfolio>) -> Result<Html<String>, AppError> {
    let filtered = filter_sections(&portfolio);
    let grouped = group_publications_by_year(&filtered.publications);
    info!(
        "Rendering preview: {} experience, {} publications in {} years, {} projects",
        filtered.experience.len(),
        filtered.publications.len(),
        grouped.len(),
        filtered.projects.len()
    );

    Ok(Html(render_portfolio_page(&filtered, &grouped)?))
}
