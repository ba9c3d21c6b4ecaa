use axum::response::Html;

const LANDING_PAGE: &str = include_str!("../../templates/pages/landing.html");
const GENERATOR_PAGE: &str = include_str!("../../templates/pages/generator.html");

/// GET /
pub async fn landing_handler() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

/// GET /generator
pub async fn generator_handler() -> Html<&'static str> {
    Html(GENERATOR_PAGE)
}
