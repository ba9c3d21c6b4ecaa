use crate::models::portfolio::GROUPED_PUBLICATIONS_KEY;
use crate::models::{Portfolio, Section};

/// Returns a copy of `portfolio` with every optional section the user did not
/// select emptied out.
///
/// An empty selection keeps everything. The about block is never removed here;
/// renderers decide whether to show it.
pub fn filter_sections(portfolio: &Portfolio) -> Portfolio {
    let mut filtered = portfolio.clone();

    if !portfolio.includes(Section::Publications) {
        filtered.publications.clear();
        filtered.extra.remove(GROUPED_PUBLICATIONS_KEY);
    }
    if !portfolio.includes(Section::Projects) {
        filtered.projects.clear();
    }
    if !portfolio.includes(Section::Experience) {
        filtered.experience.clear();
    }

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Experience, Project, Publication};
    use serde_json::json;

    fn sample(sections: &[&str]) -> Portfolio {
        let mut portfolio = Portfolio {
            name: "Ada Lovelace".into(),
            sections: sections.iter().map(|s| s.to_string()).collect(),
            publications: vec![Publication {
                title: "Notes".into(),
                year: "1843".into(),
                ..Default::default()
            }],
            projects: vec![Project {
                name: "Analytical Engine".into(),
                ..Default::default()
            }],
            experience: vec![Experience {
                title: "Translator".into(),
                ..Default::default()
            }],
            ..Default::default()
        };
        portfolio
            .extra
            .insert(GROUPED_PUBLICATIONS_KEY.into(), json!({"1843": []}));
        portfolio
    }

    #[test]
    fn test_empty_selection_is_identity() {
        let portfolio = sample(&[]);
        assert_eq!(filter_sections(&portfolio), portfolio);
    }

    #[test]
    fn test_all_selected_is_identity() {
        let portfolio = sample(&["about", "experience", "publications", "projects"]);
        assert_eq!(filter_sections(&portfolio), portfolio);
    }

    #[test]
    fn test_omitting_projects_clears_only_projects() {
        let portfolio = sample(&["about", "experience", "publications"]);
        let filtered = filter_sections(&portfolio);

        assert!(filtered.projects.is_empty());
        assert_eq!(filtered.publications, portfolio.publications);
        assert_eq!(filtered.experience, portfolio.experience);
        assert_eq!(filtered.name, portfolio.name);
    }

    #[test]
    fn test_omitting_publications_drops_grouped_view() {
        let filtered = filter_sections(&sample(&["projects"]));

        assert!(filtered.publications.is_empty());
        assert!(filtered.experience.is_empty());
        assert!(!filtered.extra.contains_key(GROUPED_PUBLICATIONS_KEY));
        assert_eq!(filtered.projects.len(), 1);
    }

    #[test]
    fn test_unknown_section_names_are_ignored() {
        let filtered = filter_sections(&sample(&["blog"]));
        assert!(filtered.publications.is_empty());
        assert!(filtered.projects.is_empty());
        assert!(filtered.experience.is_empty());
    }

    #[test]
    fn test_input_is_not_mutated() {
        let portfolio = sample(&["about"]);
        let before = portfolio.clone();
        let _ = filter_sections(&portfolio);
        assert_eq!(portfolio, before);
    }
}
