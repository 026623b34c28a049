// ABOUTME: Authentication data for Folio
// ABOUTME: User accounts with Argon2 password hashes and expiring login tokens

pub mod password;
pub mod tokens;
pub mod users;

// Re-export main types for convenience
pub use password::{hash_password, verify_password};
pub use tokens::{TokenGeneration, TokenStatus, TokenStorage};
pub use users::storage::UserStorage;
pub use users::User;
