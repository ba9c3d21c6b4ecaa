use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::Publication;

/// Publications sharing one `year` value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearGroup {
    pub year: String,
    pub publications: Vec<Publication>,
}

/// Groups publications by their `year` text, newest first.
///
/// Years are compared as strings, not numbers. Records with an empty year are
/// left out of every group. Within a group the input order is kept.
pub fn group_publications_by_year(publications: &[Publication]) -> Vec<YearGroup> {
    let mut by_year: BTreeMap<&str, Vec<Publication>> = BTreeMap::new();
    for publication in publications.iter().filter(|p| !p.year.is_empty()) {
        by_year
            .entry(publication.year.as_str())
            .or_default()
            .push(publication.clone());
    }

    by_year
        .into_iter()
        .rev()
        .map(|(year, publications)| YearGroup {
            year: year.to_string(),
            publications,
        })
        .collect()
}
