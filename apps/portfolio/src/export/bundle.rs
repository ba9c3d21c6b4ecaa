//! Static site bundle assembly.
//!
//! The archive is built entirely in memory and only handed back once
//! finalized, so a failure part way through never yields a truncated file.

use std::io::{Cursor, Write};

use chrono::{DateTime, TimeZone};
use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::export::images::materialize_images;
use crate::export::readme::render_readme;
use crate::export::BundleError;
use crate::models::portfolio::GROUPED_PUBLICATIONS_KEY;
use crate::models::Portfolio;

pub const INDEX_HTML: &str = "index.html";
pub const STYLES_CSS: &str = "styles.css";
pub const SCRIPT_JS: &str = "script.js";
pub const DATA_JSON: &str = "data.json";
pub const README_MD: &str = "README.md";

/// Entry names every bundle contains. Images may not reuse them.
pub const FIXED_ENTRIES: [&str; 5] = [INDEX_HTML, STYLES_CSS, SCRIPT_JS, DATA_JSON, README_MD];

const SITE_FILES: [(&str, &str); 3] = [
    (
        INDEX_HTML,
        include_str!("../../templates/static_site/index.html"),
    ),
    (
        STYLES_CSS,
        include_str!("../../templates/static_site/styles.css"),
    ),
    (SCRIPT_JS, include_str!("../../templates/static_site/script.js")),
];

/// A finished archive plus the download name it should be served under.
#[derive(Debug, Clone)]
pub struct StaticBundle {
    pub filename: String,
    pub bytes: Vec<u8>,
    pub image_count: usize,
}

/// Download name for a bundle generated at `generated_at`.
pub fn bundle_filename<Tz>(generated_at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!(
        "portfolio_static_{}.zip",
        generated_at.format("%Y%m%d_%H%M%S")
    )
}

/// Packs a section-filtered portfolio into a deployable static site archive.
///
/// Layout: the three fixed site files, every embedded image that decodes, the
/// portfolio as pretty-printed `data.json` (without embedded images or the
/// year-grouped view) and a generated `README.md`.
pub fn build_static_bundle<Tz>(
    mut portfolio: Portfolio,
    generated_at: &DateTime<Tz>,
) -> Result<StaticBundle, BundleError>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let images = materialize_images(&mut portfolio, &FIXED_ENTRIES);
    portfolio.extra.remove(GROUPED_PUBLICATIONS_KEY);

    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

    for (name, contents) in SITE_FILES {
        zip.start_file(name, options)?;
        zip.write_all(contents.as_bytes())?;
    }

    for image in &images {
        debug!("Adding {} ({} bytes)", image.path, image.bytes.len());
        zip.start_file(image.path.as_str(), options)?;
        zip.write_all(&image.bytes)?;
    }

    zip.start_file(DATA_JSON, options)?;
    zip.write_all(&serde_json::to_vec_pretty(&portfolio)?)?;

    zip.start_file(README_MD, options)?;
    zip.write_all(render_readme(&portfolio, generated_at).as_bytes())?;

    let bytes = zip.finish()?.into_inner();

    Ok(StaticBundle {
        filename: bundle_filename(generated_at),
        bytes,
        image_count: images.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::filter_sections;
    use crate::models::Publication;
    use chrono::Utc;
    use serde_json::{json, Value};
    use std::io::Read;
    use zip::ZipArchive;

    fn generated_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 0).unwrap()
    }

    fn open(bytes: &[u8]) -> ZipArchive<Cursor<&[u8]>> {
        ZipArchive::new(Cursor::new(bytes)).unwrap()
    }

    fn read_entry(bytes: &[u8], name: &str) -> String {
        let mut archive = open(bytes);
        let mut entry = archive.by_name(name).unwrap();
        let mut out = String::new();
        entry.read_to_string(&mut out).unwrap();
        out
    }

    /// Entry names in central directory order.
    fn entry_names(bytes: &[u8]) -> Vec<String> {
        let mut archive = open(bytes);
        (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect()
    }

    fn sample() -> Portfolio {
        serde_json::from_value(json!({
            "name": "Ada Lovelace",
            "title": "Analyst",
            "profileImage": "assets/ada.png",
            "sections": ["about", "publications"],
            "skills": ["Mathematics"],
            "publications": [
                {"title": "Notes", "authors": "A. Lovelace", "venue": "Memoirs", "year": "1843", "url": "", "image": ""}
            ],
            "projects": [{"name": "Engine"}],
            "publications_by_year": {"1843": []},
            "uploadedImages": {
                "assets/ada.png": "data:image/png;base64,UE5H",
                "assets/broken.png": "data:image/png;base64,%%%"
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_archive_layout() {
        let bundle = build_static_bundle(filter_sections(&sample()), &generated_at()).unwrap();
        let names = entry_names(&bundle.bytes);

        assert_eq!(
            names,
            vec![
                "index.html",
                "styles.css",
                "script.js",
                "assets/ada.png",
                "data.json",
                "README.md"
            ]
        );
        assert_eq!(bundle.image_count, 1);
    }

    #[test]
    fn test_archive_without_images_has_exactly_fixed_entries() {
        let bundle = build_static_bundle(Portfolio::default(), &generated_at()).unwrap();
        let mut names = entry_names(&bundle.bytes);
        names.sort();

        let mut expected: Vec<String> = FIXED_ENTRIES.iter().map(|s| s.to_string()).collect();
        expected.sort();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_image_bytes_are_decoded() {
        let bundle = build_static_bundle(sample(), &generated_at()).unwrap();
        let mut archive = open(&bundle.bytes);
        let mut entry = archive.by_name("assets/ada.png").unwrap();
        let mut bytes = Vec::new();
        entry.read_to_end(&mut bytes).unwrap();
        assert_eq!(bytes, b"PNG");
    }

    #[test]
    fn test_data_json_excludes_derived_and_embedded_keys() {
        let bundle = build_static_bundle(filter_sections(&sample()), &generated_at()).unwrap();
        let data: Value = serde_json::from_str(&read_entry(&bundle.bytes, DATA_JSON)).unwrap();

        assert!(data.get(GROUPED_PUBLICATIONS_KEY).is_none());
        assert!(data.get("uploadedImages").is_none());
        assert_eq!(data["name"], "Ada Lovelace");
        assert_eq!(data["profileImage"], "assets/ada.png");
        assert_eq!(data["projects"], json!([]));
        assert_eq!(data["publications"][0]["year"], "1843");
    }

    #[test]
    fn test_data_json_is_pretty_printed() {
        let bundle = build_static_bundle(sample(), &generated_at()).unwrap();
        let data = read_entry(&bundle.bytes, DATA_JSON);
        assert!(data.starts_with("{\n  \""));
    }

    #[test]
    fn test_reimported_data_json_reexports_identically() {
        let first = build_static_bundle(filter_sections(&sample()), &generated_at()).unwrap();
        let first_data = read_entry(&first.bytes, DATA_JSON);

        let reimported: Portfolio = serde_json::from_str(&first_data).unwrap();
        let later = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let second = build_static_bundle(filter_sections(&reimported), &later).unwrap();

        assert_eq!(read_entry(&second.bytes, DATA_JSON), first_data);
        assert_ne!(
            read_entry(&second.bytes, README_MD),
            read_entry(&first.bytes, README_MD)
        );
    }

    #[test]
    fn test_fixed_files_are_copied_verbatim() {
        let bundle = build_static_bundle(Portfolio::default(), &generated_at()).unwrap();
        for (name, contents) in SITE_FILES {
            assert_eq!(read_entry(&bundle.bytes, name), contents);
        }
    }

    #[test]
    fn test_image_cannot_replace_fixed_entry() {
        let mut portfolio = Portfolio::default();
        portfolio
            .uploaded_images
            .insert("data.json".into(), "UE5H".into());
        portfolio.publications.push(Publication {
            title: "kept".into(),
            ..Default::default()
        });

        let bundle = build_static_bundle(portfolio, &generated_at()).unwrap();
        assert_eq!(bundle.image_count, 0);
        let data: Value = serde_json::from_str(&read_entry(&bundle.bytes, DATA_JSON)).unwrap();
        assert_eq!(data["publications"][0]["title"], "kept");
    }

    #[test]
    fn test_colliding_image_paths_do_not_abort_export() {
        let mut portfolio = Portfolio::default();
        portfolio
            .uploaded_images
            .insert("assets/a.png".into(), "UE5H".into());
        portfolio
            .uploaded_images
            .insert("./assets/a.png".into(), "UE5H".into());

        let bundle = build_static_bundle(portfolio, &generated_at()).unwrap();
        assert_eq!(bundle.image_count, 1);
        assert_eq!(
            entry_names(&bundle.bytes)
                .iter()
                .filter(|name| *name == "assets/a.png")
                .count(),
            1
        );
    }

    #[test]
    fn test_filename_carries_timestamp() {
        assert_eq!(
            bundle_filename(&generated_at()),
            "portfolio_static_20240517_093000.zip"
        );
    }
}
