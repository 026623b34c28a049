// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names used across Folio

// Server
pub const PORT: &str = "PORT";
pub const HOST: &str = "HOST";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_HOST: &str = "127.0.0.1";

// Storage
pub const DATABASE_PATH: &str = "DATABASE_PATH";
pub const IMAGES_STATIC_PATH: &str = "IMAGES_STATIC_PATH";

// Authentication
pub const TOKEN_VALIDITY_TIME_SS: &str = "TOKEN_VALIDITY_TIME_SS";
pub const DEFAULT_TOKEN_VALIDITY_SECS: i64 = 60 * 60;

// CORS Configuration
pub const CORS_ORIGIN: &str = "CORS_ORIGIN";

// Request limits
pub const MAX_UPLOAD_BYTES: &str = "MAX_UPLOAD_BYTES";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

// Logging
pub const RUST_LOG: &str = "RUST_LOG";
