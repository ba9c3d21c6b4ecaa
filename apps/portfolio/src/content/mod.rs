// Section selection and the derived year view over publications.
// Both are pure: preview and export call them on the same request data.

pub mod filter;
pub mod grouping;

pub use filter::filter_sections;
pub use grouping::{group_publications_by_year, YearGroup};
