// ABOUTME: HTTP request handlers for project operations
// ABOUTME: List, create, replace and delete projects with their uploaded images

use axum::{
    extract::{multipart::MultipartRejection, rejection::JsonRejection, Multipart, State},
    Json,
};
use folio_core::Project;
use folio_projects::DbState;
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::ApiError;
use crate::project_form::ProjectForm;
use crate::response::{ApiResponse, ProjectId};

/// List all projects
pub async fn list_projects(
    State(db): State<DbState>,
) -> Result<Json<ApiResponse<Vec<Project>>>, ApiError> {
    info!("Listing projects");
    let projects = db.project_storage.list_projects().await?;
    Ok(Json(ApiResponse::success(projects)))
}

async fn read_form(multipart: Result<Multipart, MultipartRejection>) -> Result<ProjectForm, ApiError> {
    let multipart = multipart.map_err(|e| {
        warn!("Project request is not multipart: {}", e);
        ApiError::EmptyData
    })?;
    ProjectForm::read(multipart).await
}

/// Create a project from a multipart form
pub async fn create_project(
    State(db): State<DbState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ApiResponse<ProjectId>>, ApiError> {
    let form = read_form(multipart).await?;
    let mut input = form.to_input()?;
    let saved = form.save_uploads(&db.image_store, &mut input).await?;

    match db.project_storage.create_project(&input).await {
        Ok(id) => {
            info!("Created project {} with {} uploads", id, saved.len());
            Ok(Json(ApiResponse::done(ProjectId { id })))
        }
        Err(e) => {
            db.image_store.discard(&saved).await;
            Err(e.into())
        }
    }
}

/// Replace a project from a multipart form carrying its id
pub async fn replace_project(
    State(db): State<DbState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ApiResponse<ProjectId>>, ApiError> {
    let form = read_form(multipart).await?;
    let id = form.project_id()?;
    let mut input = form.to_input()?;
    let saved = form.save_uploads(&db.image_store, &mut input).await?;

    match db.project_storage.replace_project(id, &input).await {
        Ok(id) => {
            info!("Replaced project {} with {} uploads", id, saved.len());
            Ok(Json(ApiResponse::done(ProjectId { id })))
        }
        Err(e) => {
            db.image_store.discard(&saved).await;
            Err(e.into())
        }
    }
}

/// A project id as sent in JSON: a number or its decimal text
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ProjectIdValue {
    Number(i64),
    Text(String),
}

impl ProjectIdValue {
    pub fn to_id(&self) -> Result<i64, ApiError> {
        match self {
            ProjectIdValue::Number(id) => Ok(*id),
            ProjectIdValue::Text(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ApiError::IncorrectData(format!("'{}' is not a project id", raw))),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DeleteProjectRequest {
    pub id: Option<ProjectIdValue>,
}

/// Delete a project named by `{id}` in the JSON body
pub async fn delete_project(
    State(db): State<DbState>,
    body: Result<Json<DeleteProjectRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let request = match body {
        Ok(Json(request)) => request,
        Err(JsonRejection::JsonDataError(e)) => {
            return Err(ApiError::IncorrectData(e.body_text()));
        }
        Err(e) => {
            warn!("Unreadable delete body: {}", e);
            return Err(ApiError::EmptyData);
        }
    };

    let id = request.id.as_ref().ok_or(ApiError::EmptyData)?.to_id()?;
    db.project_storage.delete_project(id).await?;

    info!("Deleted project {}", id);
    Ok(Json(ApiResponse::ok_with_code()))
}
