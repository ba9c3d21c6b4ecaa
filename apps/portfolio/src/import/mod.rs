pub mod handlers;
pub mod json;

pub use json::parse_import;
