// ABOUTME: Login token management module
// ABOUTME: Token generation, hashing, expiry and validation

pub mod storage;
pub mod types;

pub use storage::TokenStorage;
pub use types::{TokenGeneration, TokenStatus};
