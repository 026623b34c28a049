// ABOUTME: HTTP request handler serving stored image files
// ABOUTME: Content type is guessed from the filename extension

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use folio_projects::DbState;
use tracing::debug;

use crate::error::ApiError;

pub async fn get_image(
    State(db): State<DbState>,
    Path(filename): Path<String>,
) -> Result<Response, ApiError> {
    debug!("Serving image {}", filename);

    let bytes = db
        .image_store
        .read(&filename)
        .await?
        .ok_or(ApiError::ImageNotFound)?;

    let mime = mime_guess::from_path(&filename).first_or_octet_stream();

    Ok(([(header::CONTENT_TYPE, mime.as_ref().to_string())], bytes).into_response())
}
