// ABOUTME: API error type mapped onto the fixed failure envelopes
// ABOUTME: Data, token and not-found failures get their code; anything else is a logged 500

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use folio_storage::StorageError;
use thiserror::Error;
use tracing::{error, warn};
use uuid::Uuid;

use crate::response::{ApiResponse, ErrorCode};

pub const EMPTY_DATA_MESSAGE: &str = "Not enough data";
pub const INCORRECT_DATA_MESSAGE: &str = "Incorrect data";
pub const MISSING_TOKEN_MESSAGE: &str = "Missing token";
pub const WRONG_TOKEN_MESSAGE: &str = "Wrong token";
pub const TOKEN_EXPIRED_MESSAGE: &str = "Token has expired";

/// Error type returned by every handler and by the token middleware
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Required data is missing")]
    EmptyData,

    #[error("Incorrect data: {0}")]
    IncorrectData(String),

    #[error("Authorization header is missing")]
    MissingToken,

    #[error("Unknown token")]
    WrongToken,

    #[error("Token has expired")]
    TokenExpired,

    #[error("Image not found")]
    ImageNotFound,

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl ApiError {
    fn to_status_and_code(&self) -> (StatusCode, Option<ErrorCode>) {
        match self {
            ApiError::EmptyData | ApiError::IncorrectData(_) => {
                (StatusCode::BAD_REQUEST, Some(ErrorCode::InvalidData))
            }
            ApiError::MissingToken | ApiError::WrongToken => {
                (StatusCode::UNAUTHORIZED, Some(ErrorCode::InvalidToken))
            }
            ApiError::TokenExpired => (StatusCode::UNAUTHORIZED, Some(ErrorCode::TokenExpired)),
            ApiError::ImageNotFound => (StatusCode::NOT_FOUND, Some(ErrorCode::InvalidData)),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, None),
            ApiError::Storage(StorageError::NotFound | StorageError::Validation(_)) => {
                (StatusCode::BAD_REQUEST, Some(ErrorCode::InvalidData))
            }
            ApiError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, None),
        }
    }

    /// Message sent to the client; never includes internal details
    fn to_user_message(&self) -> &'static str {
        match self {
            ApiError::EmptyData => EMPTY_DATA_MESSAGE,
            ApiError::IncorrectData(_) => INCORRECT_DATA_MESSAGE,
            ApiError::MissingToken => MISSING_TOKEN_MESSAGE,
            ApiError::WrongToken => WRONG_TOKEN_MESSAGE,
            ApiError::TokenExpired => TOKEN_EXPIRED_MESSAGE,
            ApiError::ImageNotFound => "Image not found",
            ApiError::Storage(StorageError::NotFound | StorageError::Validation(_)) => {
                INCORRECT_DATA_MESSAGE
            }
            ApiError::Internal(_) | ApiError::Storage(_) => "Internal server error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status_code, error_code) = self.to_status_and_code();

        if status_code == StatusCode::INTERNAL_SERVER_ERROR {
            let request_id = Uuid::new_v4().to_string();
            error!(
                request_id = %request_id,
                error = %self,
                "Internal server error occurred"
            );
        } else {
            match &self {
                ApiError::IncorrectData(detail) => warn!(detail = %detail, "Rejected request data"),
                ApiError::Storage(err) => warn!(error = %err, "Rejected request data"),
                _ => {}
            }
        }

        let body = ApiResponse::failure(self.to_user_message(), error_code);
        (status_code, Json(body)).into_response()
    }
}

impl From<axum::extract::multipart::MultipartError> for ApiError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        ApiError::IncorrectData(format!("multipart: {}", err))
    }
}
