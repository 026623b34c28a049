// ABOUTME: Integration tests for login token issuance and expiry
// ABOUTME: Drives validation with explicit clock values around the validity window

use chrono::{Duration, TimeZone, Utc};
use folio_security::{TokenStatus, TokenStorage};
use folio_storage::test_utils::memory_pool;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_token_valid_inside_window() {
    let storage = TokenStorage::new(memory_pool().await, 3600);
    let issued_at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

    let generated = storage.issue_token_at(issued_at).await.unwrap();

    let status = storage
        .check_token_at(&generated.token, issued_at + Duration::seconds(1))
        .await
        .unwrap();
    assert_eq!(
        status,
        TokenStatus::Valid {
            expires_at: issued_at + Duration::seconds(3600)
        }
    );
}

#[tokio::test]
async fn test_token_still_valid_at_exact_expiry() {
    let storage = TokenStorage::new(memory_pool().await, 3600);
    let issued_at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let generated = storage.issue_token_at(issued_at).await.unwrap();

    let status = storage
        .check_token_at(&generated.token, generated.expires_at)
        .await
        .unwrap();

    assert!(status.is_valid());
}

#[tokio::test]
async fn test_token_expired_after_window() {
    let storage = TokenStorage::new(memory_pool().await, 3600);
    let issued_at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let generated = storage.issue_token_at(issued_at).await.unwrap();

    let status = storage
        .check_token_at(&generated.token, issued_at + Duration::seconds(3601))
        .await
        .unwrap();

    assert_eq!(status, TokenStatus::Expired);
}

#[tokio::test]
async fn test_unknown_token() {
    let storage = TokenStorage::new(memory_pool().await, 3600);
    storage.issue_token().await.unwrap();

    let status = storage.check_token("not-a-real-token").await.unwrap();

    assert_eq!(status, TokenStatus::Unknown);
}

#[tokio::test]
async fn test_only_the_hash_is_stored() {
    let pool = memory_pool().await;
    let storage = TokenStorage::new(pool.clone(), 60);
    let generated = storage.issue_token().await.unwrap();

    let stored: String = sqlx::query_scalar("SELECT token_hash FROM tokens")
        .fetch_one(&pool)
        .await
        .unwrap();

    assert_eq!(stored, generated.token_hash);
    assert_ne!(stored, generated.token);
    assert_eq!(storage.count_tokens().await.unwrap(), 1);
}

#[tokio::test]
async fn test_custom_validity_window() {
    let storage = TokenStorage::new(memory_pool().await, 10);
    let issued_at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let generated = storage.issue_token_at(issued_at).await.unwrap();

    assert_eq!(generated.expires_at, issued_at + Duration::seconds(10));
    assert_eq!(
        storage
            .check_token_at(&generated.token, issued_at + Duration::seconds(11))
            .await
            .unwrap(),
        TokenStatus::Expired
    );
}
