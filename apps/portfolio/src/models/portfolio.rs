use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::lenient;

/// Key of the derived year-grouped publication view. Never stored.
pub const GROUPED_PUBLICATIONS_KEY: &str = "publications_by_year";

/// Independently toggleable content blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    Experience,
    Publications,
    Projects,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Experience => "experience",
            Section::Publications => "publications",
            Section::Projects => "projects",
        }
    }
}

/// The complete user-submitted profile. Every field is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub profile_image: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub about: String,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub sections: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "lenient::record")]
    pub contact: Contact,
    #[serde(default, deserialize_with = "lenient::records")]
    pub experience: Vec<Experience>,
    #[serde(default, deserialize_with = "lenient::records")]
    pub publications: Vec<Publication>,
    #[serde(default, deserialize_with = "lenient::records")]
    pub projects: Vec<Project>,
    /// Embedded images (`relative path -> data URI`), consumed by the exporter
    /// and never written back out.
    #[serde(default, skip_serializing, deserialize_with = "lenient::string_map")]
    pub uploaded_images: BTreeMap<String, String>,
    /// Keys this service does not interpret, kept so a re-export preserves them.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Portfolio {
    /// An empty selection means every section is shown.
    pub fn includes(&self, section: Section) -> bool {
        self.sections.is_empty() || self.sections.iter().any(|s| s == section.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, deserialize_with = "lenient::string")]
    pub location: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub github: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub linkedin: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub researchgate: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub scholar: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub orcid: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub authors: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub venue: String,
    /// Kept as text: grouping and ordering compare the raw strings.
    #[serde(default, deserialize_with = "lenient::string")]
    pub year: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::optional_string"
    )]
    pub url: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::optional_string"
    )]
    pub image: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::optional_string"
    )]
    pub url: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::optional_string"
    )]
    pub image: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub organization: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub location: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub start_date: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub end_date: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub description: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `Some(text)` only when the optional field holds non-blank text.
pub fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
