// ABOUTME: Storage operations for login tokens
// ABOUTME: Token generation, hashing, verification against expiry and database operations

use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use folio_storage::StorageError;
use rand::Rng;
use sha2::{Digest, Sha256};
use sqlx::{Row, SqlitePool};
use tracing::debug;

use super::types::{TokenGeneration, TokenStatus};

pub struct TokenStorage {
    pool: SqlitePool,
    validity: Duration,
}

impl TokenStorage {
    /// Tokens issued by this storage stay valid for `validity_secs` seconds
    pub fn new(pool: SqlitePool, validity_secs: i64) -> Self {
        Self {
            pool,
            validity: Duration::seconds(validity_secs),
        }
    }

    /// Generate a cryptographically secure random token
    /// Returns a base64-encoded 32-byte token
    pub fn generate_token() -> String {
        let mut rng = rand::thread_rng();
        let random_bytes: [u8; 32] = rng.gen();
        base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(random_bytes)
    }

    /// Hash a token using SHA-256
    /// This is what gets stored in the database
    pub fn hash_token(token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Verify a token against a stored hash using constant-time comparison
    pub fn verify_token_hash(token: &str, stored_hash: &str) -> bool {
        use subtle::ConstantTimeEq;

        let computed_hash = Self::hash_token(token);
        computed_hash
            .as_bytes()
            .ct_eq(stored_hash.as_bytes())
            .into()
    }

    /// Issue a new token valid from now
    pub async fn issue_token(&self) -> Result<TokenGeneration, StorageError> {
        self.issue_token_at(Utc::now()).await
    }

    /// Issue a new token as if the current time were `now`
    pub async fn issue_token_at(&self, now: DateTime<Utc>) -> Result<TokenGeneration, StorageError> {
        let token = Self::generate_token();
        let token_hash = Self::hash_token(&token);
        let expires_at = now + self.validity;

        sqlx::query("INSERT INTO tokens (token_hash, expires_at, created_at) VALUES (?, ?, ?)")
            .bind(&token_hash)
            .bind(expires_at)
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        debug!(expires_at = %expires_at, "Issued login token");

        Ok(TokenGeneration {
            token,
            token_hash,
            expires_at,
        })
    }

    /// Check a presented token against the current time
    pub async fn check_token(&self, token: &str) -> Result<TokenStatus, StorageError> {
        self.check_token_at(token, Utc::now()).await
    }

    /// Check a presented token as if the current time were `now`.
    ///
    /// A token is rejected once `now` is strictly past its expiry.
    pub async fn check_token_at(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<TokenStatus, StorageError> {
        let token_hash = Self::hash_token(token);

        let row = sqlx::query("SELECT token_hash, expires_at FROM tokens WHERE token_hash = ?")
            .bind(&token_hash)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        let Some(row) = row else {
            return Ok(TokenStatus::Unknown);
        };

        let stored_hash: String = row.try_get("token_hash").map_err(StorageError::Sqlx)?;
        if !Self::verify_token_hash(token, &stored_hash) {
            return Ok(TokenStatus::Unknown);
        }

        let expires_at: DateTime<Utc> = row.try_get("expires_at").map_err(StorageError::Sqlx)?;
        if now > expires_at {
            Ok(TokenStatus::Expired)
        } else {
            Ok(TokenStatus::Valid { expires_at })
        }
    }

    /// Count issued tokens, expired ones included
    pub async fn count_tokens(&self) -> Result<i64, StorageError> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM tokens")
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        let count: i64 = row.try_get("count").map_err(StorageError::Sqlx)?;
        Ok(count)
    }
}
