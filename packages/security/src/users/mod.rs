// ABOUTME: User management module
// ABOUTME: Provides types and storage for login accounts

pub mod storage;
pub mod types;

pub use storage::UserStorage;
pub use types::*;
