// ABOUTME: User type definitions
// ABOUTME: Login accounts whose password hash never leaves the server

use chrono::{DateTime, Utc};
use serde::Serialize;

pub const MAX_LOGIN_LENGTH: usize = 64;

#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i64,
    pub login: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}
