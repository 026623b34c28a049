// ABOUTME: User storage layer using SQLite
// ABOUTME: Creates accounts with Argon2 hashes and checks login credentials

use chrono::Utc;
use folio_core::ValidationError;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use tracing::debug;

use super::types::{User, MAX_LOGIN_LENGTH};
use crate::password::{hash_password, verify_password};
use folio_storage::StorageError;

pub struct UserStorage {
    pool: SqlitePool,
}

impl UserStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create_user(&self, login: &str, password: &str) -> Result<User, StorageError> {
        let login = login.trim();

        let mut errors = Vec::new();
        if login.is_empty() {
            errors.push(ValidationError::new("login", "Login is required"));
        } else if login.chars().count() > MAX_LOGIN_LENGTH {
            errors.push(ValidationError::new(
                "login",
                format!("Login cannot exceed {} characters", MAX_LOGIN_LENGTH),
            ));
        }
        if password.is_empty() {
            errors.push(ValidationError::new("password", "Password is required"));
        }
        if !errors.is_empty() {
            return Err(StorageError::Validation(errors));
        }

        let password_hash = hash_password(password)?;
        let created_at = Utc::now();

        let result = sqlx::query(
            "INSERT INTO users (login, password_hash, created_at) VALUES (?, ?, ?)",
        )
        .bind(login)
        .bind(&password_hash)
        .bind(created_at)
        .execute(&self.pool)
        .await;

        let id = match result {
            Ok(done) => done.last_insert_rowid(),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                return Err(StorageError::Database(format!(
                    "User '{}' already exists",
                    login
                )));
            }
            Err(e) => return Err(StorageError::Sqlx(e)),
        };

        debug!("Created user {} with id {}", login, id);

        Ok(User {
            id,
            login: login.to_string(),
            password_hash,
            created_at,
        })
    }

    pub async fn get_user_by_login(&self, login: &str) -> Result<Option<User>, StorageError> {
        let row = sqlx::query("SELECT * FROM users WHERE login = ?")
            .bind(login)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        row.as_ref().map(row_to_user).transpose()
    }

    /// Returns the user only when the login exists and the password matches.
    /// Callers cannot tell an unknown login from a wrong password.
    pub async fn verify_credentials(
        &self,
        login: &str,
        password: &str,
    ) -> Result<Option<User>, StorageError> {
        let Some(user) = self.get_user_by_login(login).await? else {
            debug!("Login attempt for unknown user");
            return Ok(None);
        };

        if verify_password(password, &user.password_hash)? {
            Ok(Some(user))
        } else {
            debug!("Password mismatch for user {}", user.login);
            Ok(None)
        }
    }

    pub async fn list_users(&self) -> Result<Vec<User>, StorageError> {
        let rows = sqlx::query("SELECT * FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        rows.iter().map(row_to_user).collect()
    }
}

fn row_to_user(row: &SqliteRow) -> Result<User, StorageError> {
    Ok(User {
        id: row.try_get("id").map_err(StorageError::Sqlx)?,
        login: row.try_get("login").map_err(StorageError::Sqlx)?,
        password_hash: row.try_get("password_hash").map_err(StorageError::Sqlx)?,
        created_at: row.try_get("created_at").map_err(StorageError::Sqlx)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_storage::test_utils::memory_pool;

    #[tokio::test]
    async fn test_create_user_stores_hash_not_password() {
        let storage = UserStorage::new(memory_pool().await);

        let user = storage.create_user("admin", "hunter2").await.unwrap();

        assert_eq!(user.login, "admin");
        assert_ne!(user.password_hash, "hunter2");
        assert!(user.password_hash.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn test_create_user_rejects_duplicate_login() {
        let storage = UserStorage::new(memory_pool().await);
        storage.create_user("admin", "one").await.unwrap();

        let err = storage.create_user("admin", "two").await.unwrap_err();

        assert!(matches!(err, StorageError::Database(msg) if msg.contains("already exists")));
    }

    #[tokio::test]
    async fn test_create_user_validates_fields() {
        let storage = UserStorage::new(memory_pool().await);

        let err = storage.create_user("  ", "").await.unwrap_err();
        match err {
            StorageError::Validation(errors) => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
                assert_eq!(fields, vec!["login", "password"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }

        let long_login = "x".repeat(MAX_LOGIN_LENGTH + 1);
        assert!(storage.create_user(&long_login, "pw").await.is_err());
    }

    #[tokio::test]
    async fn test_verify_credentials() {
        let storage = UserStorage::new(memory_pool().await);
        storage.create_user("admin", "correct").await.unwrap();

        let user = storage.verify_credentials("admin", "correct").await.unwrap();
        assert_eq!(user.map(|u| u.login), Some("admin".to_string()));

        assert!(storage
            .verify_credentials("admin", "wrong")
            .await
            .unwrap()
            .is_none());
        assert!(storage
            .verify_credentials("nobody", "correct")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_list_users_in_creation_order() {
        let storage = UserStorage::new(memory_pool().await);
        storage.create_user("first", "a").await.unwrap();
        storage.create_user("second", "b").await.unwrap();

        let logins: Vec<String> = storage
            .list_users()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.login)
            .collect();

        assert_eq!(logins, vec!["first", "second"]);
    }

    #[test]
    fn test_password_hash_is_not_serialized() {
        let user = User {
            id: 1,
            login: "admin".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["login"], "admin");
    }
}
