pub mod handlers;
pub mod render;

pub use render::render_portfolio_page;
