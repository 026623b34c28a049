// ABOUTME: HTTP request handlers for login and token checks
// ABOUTME: Issues expiring tokens for valid credentials

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::{DateTime, SecondsFormat, Utc};
use folio_projects::DbState;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::ApiError;
use crate::response::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub login: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
    pub expired_at: String,
}

fn format_expiry(expires_at: DateTime<Utc>) -> String {
    expires_at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Exchange a login and password for a token
pub async fn login(
    State(db): State<DbState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let Json(request) = body.map_err(|e| {
        warn!("Unreadable login body: {}", e);
        ApiError::EmptyData
    })?;

    let (Some(login), Some(password)) = (request.login, request.password) else {
        return Err(ApiError::EmptyData);
    };

    let Some(user) = db.user_storage.verify_credentials(&login, &password).await? else {
        warn!("Failed login attempt");
        return Err(ApiError::IncorrectData("invalid credentials".to_string()));
    };

    let generated = db.token_storage.issue_token().await?;
    info!("User {} logged in", user.login);

    Ok(Json(LoginResponse {
        success: true,
        token: generated.token,
        expired_at: format_expiry(generated.expires_at),
    }))
}

/// Reached only when the token middleware accepted the request
pub async fn is_authed() -> Json<ApiResponse<()>> {
    Json(ApiResponse::ok())
}
