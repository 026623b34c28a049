// ABOUTME: Core types, validation and utilities for Folio
// ABOUTME: Foundational package shared by the storage, project and API packages

pub mod constants;
pub mod types;
pub mod utils;
pub mod validation;

// Re-export main types
pub use types::{Project, ProjectCreateInput};

// Re-export constants
pub use constants::{default_database_path, default_images_dir, folio_dir};

// Re-export utilities
pub use utils::{generate_nonce, prefixed_filename, sanitize_filename};

// Re-export validation
pub use validation::{is_plain_filename, validate_project_input, ValidationError};
