// Static bundle export: decoded images, data.json, README.md and the fixed
// site files packed into one in-memory ZIP archive.

pub mod bundle;
pub mod handlers;
pub mod images;
pub mod readme;

use thiserror::Error;

pub use bundle::build_static_bundle;

#[derive(Debug, Error)]
pub enum BundleError {
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
