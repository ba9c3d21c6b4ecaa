//! Embedded image decoding.
//!
//! The generator UI uploads images as data URIs under `uploadedImages`, keyed
//! by the relative path the site refers to them by (e.g. `assets/me.png`).
//! Each one is decoded on its own; a broken entry is logged and skipped so it
//! never blocks the rest of the export.

use std::collections::{BTreeMap, BTreeSet};

use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine};
use thiserror::Error;
use tracing::warn;

use crate::models::Portfolio;

/// A decoded image ready to be written into the archive.
#[derive(Debug, Clone, PartialEq)]
pub struct StagedImage {
    pub path: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Error, PartialEq)]
pub enum ImageError {
    #[error("unsafe or reserved archive path")]
    InvalidPath,

    #[error("invalid base64 payload: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("image payload is empty")]
    Empty,

    #[error("another image already uses archive path '{0}'")]
    DuplicatePath(String),
}

/// Removes the embedded images from `portfolio` and decodes them.
///
/// `reserved` names archive entries an image may not overwrite. Declared
/// paths that normalise to the same entry keep only the first in key order.
/// Output is ordered by declared path.
pub fn materialize_images(portfolio: &mut Portfolio, reserved: &[&str]) -> Vec<StagedImage> {
    let embedded: BTreeMap<String, String> = std::mem::take(&mut portfolio.uploaded_images);
    let mut taken = BTreeSet::new();

    embedded
        .into_iter()
        .filter_map(
            |(declared, data)| match stage_image(&declared, &data, reserved, &taken) {
                Ok(image) => {
                    taken.insert(image.path.clone());
                    Some(image)
                }
                Err(e) => {
                    warn!("Skipping embedded image '{declared}': {e}");
                    None
                }
            },
        )
        .collect()
}

fn stage_image(
    declared: &str,
    data: &str,
    reserved: &[&str],
    taken: &BTreeSet<String>,
) -> Result<StagedImage, ImageError> {
    let path = normalize_archive_path(declared, reserved).ok_or(ImageError::InvalidPath)?;
    if taken.contains(&path) {
        return Err(ImageError::DuplicatePath(path));
    }
    let bytes = decode_data_uri(data)?;
    if bytes.is_empty() {
        return Err(ImageError::Empty);
    }
    Ok(StagedImage { path, bytes })
}

/// Decodes a `data:<mime>;base64,<payload>` URI or bare base64 text.
pub fn decode_data_uri(data: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let data = data.trim();
    let payload = if data.starts_with("data:") {
        data.split_once(',').map_or("", |(_, payload)| payload)
    } else {
        data
    };
    let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    BASE64_STANDARD.decode(compact)
}

/// Cleans a declared relative path into an archive entry name.
///
/// Returns `None` for paths that are empty, absolute, climb out of the archive
/// root, or collide with a reserved entry.
pub fn normalize_archive_path(declared: &str, reserved: &[&str]) -> Option<String> {
    let unified = declared.trim().replace('\\', "/");
    if unified.starts_with('/') || unified.contains(':') {
        return None;
    }

    let mut parts = Vec::new();
    for part in unified.split('/') {
        match part {
            "" | "." => continue,
            ".." => return None,
            _ => parts.push(part),
        }
    }
    if parts.is_empty() {
        return None;
    }

    let path = parts.join("/");
    if reserved.contains(&path.as_str()) {
        return None;
    }
    Some(path)
}
