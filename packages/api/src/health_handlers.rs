// ABOUTME: Health check endpoint
// ABOUTME: Confirms the server is up and the database answers

use axum::{extract::State, Json};
use folio_projects::DbState;
use serde::Serialize;

use crate::error::ApiError;
use crate::response::ApiResponse;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn health(State(db): State<DbState>) -> Result<Json<ApiResponse<HealthStatus>>, ApiError> {
    ping_database(&db).await?;

    Ok(Json(ApiResponse::success(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })))
}

async fn ping_database(db: &DbState) -> Result<(), ApiError> {
    db.project_storage.count_projects().await?;
    Ok(())
}
