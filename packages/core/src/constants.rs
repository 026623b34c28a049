// ABOUTME: Filesystem locations used when no explicit configuration is given
// ABOUTME: Everything lives under ~/.folio by default

use std::env;
use std::path::PathBuf;

/// Get the path to the Folio directory (~/.folio)
pub fn folio_dir() -> PathBuf {
    // First try HOME environment variable (useful for tests)
    if let Ok(home) = env::var("HOME") {
        PathBuf::from(home).join(".folio")
    } else {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".folio")
    }
}

/// Default SQLite database file (~/.folio/folio.db)
pub fn default_database_path() -> PathBuf {
    folio_dir().join("folio.db")
}

/// Default directory for uploaded project images (~/.folio/images)
pub fn default_images_dir() -> PathBuf {
    folio_dir().join("images")
}
