// ABOUTME: Input validation for project payloads and stored filenames
// ABOUTME: Limits follow the column sizes of the project and tag tables

use thiserror::Error;

use crate::types::ProjectCreateInput;
use crate::utils::sanitize_filename;

pub const MAX_TITLE_LENGTH: usize = 128;
pub const MAX_DESCRIPTION_LENGTH: usize = 1024;
pub const MAX_COLOR_LENGTH: usize = 8;
pub const MAX_TAG_TITLE_LENGTH: usize = 64;
pub const MAX_IMAGE_NAME_LENGTH: usize = 128;

/// Validation error for a single field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// True when `name` is a bare filename that sanitation would leave untouched
pub fn is_plain_filename(name: &str) -> bool {
    !name.is_empty() && sanitize_filename(name) == name
}

fn check_values(
    errors: &mut Vec<ValidationError>,
    field: &str,
    values: &[String],
    max_length: usize,
) {
    for value in values {
        if value.trim().is_empty() {
            errors.push(ValidationError::new(field, "Values cannot be empty"));
            break;
        }
        if value.chars().count() > max_length {
            errors.push(ValidationError::new(
                field,
                format!("'{}' exceeds {} characters", value, max_length),
            ));
            break;
        }
    }
}

/// Validates a project payload before it reaches the store
pub fn validate_project_input(data: &ProjectCreateInput) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if data.title.trim().is_empty() {
        errors.push(ValidationError::new("title", "Project title is required"));
    } else if data.title.chars().count() > MAX_TITLE_LENGTH {
        errors.push(ValidationError::new(
            "title",
            format!("Project title exceeds {} characters", MAX_TITLE_LENGTH),
        ));
    }

    if data.description.chars().count() > MAX_DESCRIPTION_LENGTH {
        errors.push(ValidationError::new(
            "description",
            format!("Description exceeds {} characters", MAX_DESCRIPTION_LENGTH),
        ));
    }

    check_values(&mut errors, "colors", &data.colors, MAX_COLOR_LENGTH);
    check_values(&mut errors, "types", &data.types, MAX_TAG_TITLE_LENGTH);
    check_values(&mut errors, "categories", &data.categories, MAX_TAG_TITLE_LENGTH);

    for image in &data.images {
        if !is_plain_filename(image) || image.len() > MAX_IMAGE_NAME_LENGTH {
            errors.push(ValidationError::new(
                "images",
                format!("'{}' is not a valid image name", image),
            ));
            break;
        }
    }

    errors
}
