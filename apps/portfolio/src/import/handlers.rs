//! Axum route handler for importing a previously exported `data.json`.

use axum::extract::Multipart;
use axum::http::StatusCode;
use axum::Json;
use bytes::Bytes;
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::import::parse_import;

/// Name of the multipart part carrying the upload.
pub const FILE_FIELD: &str = "file";

struct UploadedFile {
    filename: String,
    contents: Bytes,
}

/// POST /import-json
///
/// Accepts a multipart upload and echoes the parsed JSON back so the
/// generator form can be filled from it.
pub async fn handle_import_json(mut multipart: Multipart) -> Result<Json<Value>, AppError> {
    let upload = read_file_field(&mut multipart)
        .await?
        .ok_or_else(|| AppError::Validation("No file provided".to_string()))?;

    let document = parse_import(&upload.filename, &upload.contents)?;
    info!(
        "Imported {} ({} bytes)",
        upload.filename,
        upload.contents.len()
    );

    Ok(Json(document))
}

/// Returns the first part named [`FILE_FIELD`], skipping any others.
async fn read_file_field(multipart: &mut Multipart) -> Result<Option<UploadedFile>, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let contents = field.bytes().await.map_err(multipart_error)?;
        return Ok(Some(UploadedFile { filename, contents }));
    }
    Ok(None)
}

/// Keeps the class of a multipart stream failure. An upload over the body
/// limit answers 413 like the JSON routes do.
fn multipart_error(e: axum::extract::multipart::MultipartError) -> AppError {
    match e.status() {
        StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge(e.body_text()),
        status if status.is_client_error() => AppError::Validation(e.body_text()),
        _ => AppError::Unexpected(e.body_text()),
    }
}
