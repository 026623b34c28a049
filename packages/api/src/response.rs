// ABOUTME: Shared API response envelope
// ABOUTME: Every endpoint answers with {success, data?, message?, error?}

use serde::Serialize;

/// Numeric error codes carried in the `error` field of the envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,
    TokenExpired = 1,
    InvalidToken = 2,
    InvalidData = 3,
}

impl Serialize for ErrorCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorCode>,
}

impl<T> ApiResponse<T> {
    /// `{success: true, data}`
    pub fn success(data: T) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            message: None,
            error: None,
        }
    }

    /// `{success: true, error: 0, data}`, used by mutating endpoints
    pub fn done(data: T) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            message: None,
            error: Some(ErrorCode::Success),
        }
    }
}

impl ApiResponse<()> {
    /// `{success: true}`
    pub fn ok() -> Self {
        ApiResponse {
            success: true,
            data: None,
            message: None,
            error: None,
        }
    }

    /// `{success: true, error: 0}`
    pub fn ok_with_code() -> Self {
        ApiResponse {
            error: Some(ErrorCode::Success),
            ..Self::ok()
        }
    }

    pub fn failure(message: impl Into<String>, code: Option<ErrorCode>) -> Self {
        ApiResponse {
            success: false,
            data: None,
            message: Some(message.into()),
            error: code,
        }
    }
}

/// Id of a project that was just created or replaced
#[derive(Debug, Serialize)]
pub struct ProjectId {
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_success_omits_empty_fields() {
        let body = serde_json::to_value(ApiResponse::success(vec![1, 2])).unwrap();
        assert_eq!(body, json!({"success": true, "data": [1, 2]}));
    }

    #[test]
    fn test_ok_with_code() {
        let body = serde_json::to_value(ApiResponse::ok_with_code()).unwrap();
        assert_eq!(body, json!({"success": true, "error": 0}));
    }

    #[test]
    fn test_failure_carries_numeric_code() {
        let body = serde_json::to_value(ApiResponse::failure(
            "Token has expired",
            Some(ErrorCode::TokenExpired),
        ))
        .unwrap();

        assert_eq!(
            body,
            json!({"success": false, "message": "Token has expired", "error": 1})
        );
    }
}
