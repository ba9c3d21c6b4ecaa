//! Server-side HTML rendering of a portfolio for in-browser preview.
//!
//! The page template mirrors the markup the exported `script.js` builds from
//! `data.json`, so the preview and the downloaded site look the same. The
//! stylesheet is inlined so the page stands alone in a new window.

use minijinja::{Environment, Value};
use serde::Serialize;

use crate::content::YearGroup;
use crate::models::portfolio::{non_blank, Contact};
use crate::models::{Experience, Portfolio, Project, Publication, Section};

const STYLESHEET: &str = include_str!("../../templates/static_site/styles.css");
const PAGE_TEMPLATE: &str = include_str!("../../templates/preview/page.html");

/// The `.html` suffix turns on minijinja's HTML auto-escaping.
const PAGE_NAME: &str = "preview.html";

/// Heading for publications that carry no year.
const UNDATED_HEADING: &str = "Other";

/// Escape text for HTML element content and quoted attribute values.
pub fn esc(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Template filter: escaped text with newlines turned into `<br>`.
fn multiline(text: String) -> Value {
    Value::from_safe_string(esc(&text).replace("\r\n", "\n").replace('\n', "<br>"))
}

/// Template filter for `href`/`src` values. Keeps `/` readable, which the
/// default escaper would encode.
fn href(url: String) -> Value {
    Value::from_safe_string(esc(&url))
}

/// `Some(text)` unless the text is blank.
fn present(s: &str) -> Option<&str> {
    (!s.trim().is_empty()).then_some(s)
}

/// "Ada Augusta King Lovelace" -> "Ada A. King Lovelace".
fn short_name(name: &str) -> String {
    let parts: Vec<&str> = name.split_whitespace().collect();
    match parts.as_slice() {
        [first, second, rest @ ..] if !rest.is_empty() => {
            let initial = second.chars().next().map(String::from).unwrap_or_default();
            format!("{first} {initial}. {}", rest.join(" "))
        }
        _ => name.to_string(),
    }
}

#[derive(Serialize)]
struct PageView<'a> {
    stylesheet: &'static str,
    name: &'a str,
    short_name: String,
    title: &'a str,
    profile_image: Option<&'a str>,
    initial: String,
    contact: Vec<ContactLink<'a>>,
    show: Shown,
    about: Option<&'a str>,
    skills: &'a [String],
    experience: Vec<ExperienceView<'a>>,
    scholar_href: Option<String>,
    publication_blocks: Vec<PublicationBlock<'a>>,
    projects: Vec<ProjectView<'a>>,
}

#[derive(Serialize)]
struct Shown {
    about: bool,
}

#[derive(Serialize)]
struct ContactLink<'a> {
    icon: &'static str,
    text: &'a str,
    label: Option<&'static str>,
    href: Option<String>,
}

#[derive(Serialize)]
struct ExperienceView<'a> {
    title: &'a str,
    organization: Option<&'a str>,
    location: Option<&'a str>,
    period: Option<String>,
    description: Option<&'a str>,
}

#[derive(Serialize)]
struct PublicationBlock<'a> {
    heading: &'a str,
    publications: Vec<PublicationView<'a>>,
}

#[derive(Serialize)]
struct PublicationView<'a> {
    title: &'a str,
    url: Option<&'a str>,
    image: Option<&'a str>,
    authors: Option<&'a str>,
    venue: Option<&'a str>,
    year: Option<&'a str>,
}

#[derive(Serialize)]
struct ProjectView<'a> {
    name: &'a str,
    url: Option<&'a str>,
    image: Option<&'a str>,
    description: Option<&'a str>,
}

/// Renders the full preview document.
///
/// `portfolio` is expected to be section-filtered already and `grouped` to be
/// the year view of its publications.
pub fn render_portfolio_page(
    portfolio: &Portfolio,
    grouped: &[YearGroup],
) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.add_filter("multiline", multiline);
    env.add_filter("href", href);
    env.add_template(PAGE_NAME, PAGE_TEMPLATE)?;

    env.get_template(PAGE_NAME)?.render(page_view(portfolio, grouped))
}

fn page_view<'a>(portfolio: &'a Portfolio, grouped: &'a [YearGroup]) -> PageView<'a> {
    let initial = portfolio
        .name
        .trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect::<String>())
        .unwrap_or_else(|| "?".to_string());

    PageView {
        stylesheet: STYLESHEET,
        name: &portfolio.name,
        short_name: short_name(&portfolio.name),
        title: &portfolio.title,
        profile_image: present(&portfolio.profile_image).map(str::trim),
        initial,
        contact: contact_links(&portfolio.contact),
        show: Shown {
            about: portfolio.includes(Section::About),
        },
        about: present(&portfolio.about),
        skills: &portfolio.skills,
        experience: portfolio.experience.iter().map(experience_view).collect(),
        scholar_href: present(&portfolio.contact.scholar)
            .map(|id| format!("https://scholar.google.com/citations?user={}", id.trim())),
        publication_blocks: publication_blocks(&portfolio.publications, grouped),
        projects: portfolio.projects.iter().map(project_view).collect(),
    }
}

fn contact_links(contact: &Contact) -> Vec<ContactLink<'_>> {
    // (value, icon, link prefix, label). No prefix means plain text.
    let rows: [(&str, &'static str, Option<&str>, Option<&'static str>); 7] = [
        (contact.location.as_str(), "\u{1F4CD}", None, None),
        (contact.email.as_str(), "\u{2709}", Some("mailto:"), None),
        (
            contact.researchgate.as_str(),
            "R",
            Some("https://www.researchgate.net/profile/"),
            Some("ResearchGate"),
        ),
        (
            contact.linkedin.as_str(),
            "in",
            Some("https://www.linkedin.com/in/"),
            Some("LinkedIn"),
        ),
        (contact.github.as_str(), "GH", Some("https://github.com/"), Some("GitHub")),
        (
            contact.scholar.as_str(),
            "GS",
            Some("https://scholar.google.com/citations?user="),
            Some("Google Scholar"),
        ),
        (contact.orcid.as_str(), "iD", Some("https://orcid.org/"), Some("ORCID")),
    ];

    rows.into_iter()
        .filter_map(|(value, icon, prefix, label)| {
            let text = present(value)?.trim();
            Some(ContactLink {
                icon,
                text,
                label,
                href: prefix.map(|prefix| format!("{prefix}{text}")),
            })
        })
        .collect()
}

fn experience_view(item: &Experience) -> ExperienceView<'_> {
    let period = present(&item.start_date).map(|start| {
        let end = present(&item.end_date).unwrap_or("Present");
        format!("{start} - {end}")
    });
    ExperienceView {
        title: &item.title,
        organization: present(&item.organization),
        location: present(&item.location),
        period,
        description: present(&item.description),
    }
}

/// Year groups in order, then any undated publications under one heading.
fn publication_blocks<'a>(
    publications: &'a [Publication],
    grouped: &'a [YearGroup],
) -> Vec<PublicationBlock<'a>> {
    if publications.is_empty() {
        return Vec::new();
    }

    let mut blocks: Vec<PublicationBlock<'a>> = grouped
        .iter()
        .map(|group| PublicationBlock {
            heading: &group.year,
            publications: group.publications.iter().map(publication_view).collect(),
        })
        .collect();

    let undated: Vec<PublicationView<'a>> = publications
        .iter()
        .filter(|p| p.year.is_empty())
        .map(publication_view)
        .collect();
    if !undated.is_empty() {
        blocks.push(PublicationBlock {
            heading: UNDATED_HEADING,
            publications: undated,
        });
    }
    blocks
}

fn publication_view(publication: &Publication) -> PublicationView<'_> {
    PublicationView {
        title: &publication.title,
        url: non_blank(&publication.url),
        image: non_blank(&publication.image),
        authors: present(&publication.authors),
        venue: present(&publication.venue),
        year: present(&publication.year),
    }
}

fn project_view(project: &Project) -> ProjectView<'_> {
    ProjectView {
        name: &project.name,
        url: non_blank(&project.url),
        image: non_blank(&project.image),
        description: present(&project.description),
    }
}
