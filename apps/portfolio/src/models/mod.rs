pub mod lenient;
pub mod portfolio;

pub use portfolio::{Experience, Portfolio, Project, Publication, Section};
