// ABOUTME: HTTP request handlers for tag listings
// ABOUTME: Colors, types and categories in use, one entry per distinct value

use axum::{extract::State, Json};
use folio_projects::DbState;
use folio_tags::{Tag, TagKind};
use tracing::info;

use crate::error::ApiError;
use crate::response::ApiResponse;

async fn list(db: &DbState, kind: TagKind) -> Result<Json<ApiResponse<Vec<Tag>>>, ApiError> {
    info!("Listing {}", kind);
    let tags = db.tag_storage.list_distinct(kind).await?;
    Ok(Json(ApiResponse::success(tags)))
}

pub async fn list_colors(
    State(db): State<DbState>,
) -> Result<Json<ApiResponse<Vec<Tag>>>, ApiError> {
    list(&db, TagKind::Color).await
}

pub async fn list_types(
    State(db): State<DbState>,
) -> Result<Json<ApiResponse<Vec<Tag>>>, ApiError> {
    list(&db, TagKind::Type).await
}

pub async fn list_categories(
    State(db): State<DbState>,
) -> Result<Json<ApiResponse<Vec<Tag>>>, ApiError> {
    list(&db, TagKind::Category).await
}
