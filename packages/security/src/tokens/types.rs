// ABOUTME: Type definitions for login tokens
// ABOUTME: Issued token handed to the client and the outcome of validating one

use chrono::{DateTime, Utc};

/// Token generation result - includes plaintext token for the login response
/// This is the ONLY time the plaintext token is available
#[derive(Debug, Clone)]
pub struct TokenGeneration {
    pub token: String,      // Plaintext token - returned to the client
    pub token_hash: String, // Hash stored in database
    pub expires_at: DateTime<Utc>,
}

/// Result of checking a presented token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenStatus {
    /// Known and not yet expired
    Valid { expires_at: DateTime<Utc> },
    /// Known but past its expiry
    Expired,
    /// Never issued
    Unknown,
}

impl TokenStatus {
    pub fn is_valid(&self) -> bool {
        matches!(self, TokenStatus::Valid { .. })
    }
}
