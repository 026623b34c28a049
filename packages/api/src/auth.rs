// ABOUTME: Token authentication middleware for mutating requests
// ABOUTME: Lets GET through and checks the Authorization token on everything else

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, Method},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use folio_projects::DbState;
use folio_security::TokenStatus;
use tracing::{debug, warn};

use crate::error::ApiError;

/// Extract the raw token from an Authorization header value
fn token_from_header(value: &str) -> Option<&str> {
    let value = value.trim();
    let token = value.strip_prefix("Bearer ").unwrap_or(value).trim();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// Token validation middleware
pub async fn require_token(
    State(db): State<DbState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if request.method() == Method::GET {
        return Ok(next.run(request).await);
    }

    let path = request.uri().path().to_string();

    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(token_from_header)
        .map(str::to_owned);

    let Some(token) = token else {
        warn!(path = %path, "Missing token");
        return Err(ApiError::MissingToken);
    };

    match db.token_storage.check_token_at(&token, Utc::now()).await? {
        TokenStatus::Valid { expires_at } => {
            debug!(path = %path, expires_at = %expires_at, "Token validated");
            Ok(next.run(request).await)
        }
        TokenStatus::Expired => {
            warn!(path = %path, "Expired token");
            Err(ApiError::TokenExpired)
        }
        TokenStatus::Unknown => {
            warn!(path = %path, "Unknown token");
            Err(ApiError::WrongToken)
        }
    }
}
