// ABOUTME: Multipart form parsing for project create and replace requests
// ABOUTME: Collects text fields, JSON-encoded lists and uploaded files before anything is stored

use axum::extract::Multipart;
use folio_core::{validate_project_input, ProjectCreateInput};
use folio_projects::ImageStore;
use tracing::debug;

use crate::error::ApiError;

/// An uploaded file held in memory until the request is known to be valid
#[derive(Debug)]
pub struct Upload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Raw contents of a project form; every field is optional until checked
#[derive(Debug, Default)]
pub struct ProjectForm {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub colors: Option<String>,
    pub types: Option<String>,
    pub categories: Option<String>,
    pub images: Option<String>,
    pub uploads: Vec<Upload>,
}

impl ProjectForm {
    /// Drain every part of the multipart body.
    ///
    /// Parts that carry a filename are uploads whatever their field name.
    pub async fn read(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut form = ProjectForm::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();

            if let Some(file_name) = field.file_name().map(str::to_owned) {
                let bytes = field.bytes().await?;
                // Browsers send an empty part for a file input left blank
                if file_name.is_empty() && bytes.is_empty() {
                    continue;
                }
                form.uploads.push(Upload {
                    file_name,
                    bytes: bytes.to_vec(),
                });
                continue;
            }

            let text = field.text().await?;
            match name.as_str() {
                "id" => form.id = Some(text),
                "title" => form.title = Some(text),
                "description" => form.description = Some(text),
                "colors" => form.colors = Some(text),
                "types" => form.types = Some(text),
                "categories" => form.categories = Some(text),
                "images" => form.images = Some(text),
                other => debug!("Ignoring form field {}", other),
            }
        }

        Ok(form)
    }

    /// Project id sent with a replace request
    pub fn project_id(&self) -> Result<i64, ApiError> {
        let raw = self.id.as_deref().ok_or(ApiError::EmptyData)?;
        raw.trim()
            .parse()
            .map_err(|_| ApiError::IncorrectData(format!("'{}' is not a project id", raw)))
    }

    /// Check the text fields and build the input without the new uploads.
    ///
    /// `images` holds only the references to files stored earlier.
    pub fn to_input(&self) -> Result<ProjectCreateInput, ApiError> {
        let title = self.title.clone().ok_or(ApiError::EmptyData)?;
        let description = self.description.clone().ok_or(ApiError::EmptyData)?;

        let input = ProjectCreateInput {
            title,
            description,
            colors: parse_list("colors", self.colors.as_deref())?,
            types: parse_list("types", self.types.as_deref())?,
            categories: parse_list("categories", self.categories.as_deref())?,
            images: parse_references(self.images.as_deref())?,
        };

        let errors = validate_project_input(&input);
        if let Some(first) = errors.first() {
            return Err(ApiError::IncorrectData(first.to_string()));
        }

        Ok(input)
    }

    /// Write the uploads and put their stored names in front of the references
    pub async fn save_uploads(
        &self,
        store: &ImageStore,
        input: &mut ProjectCreateInput,
    ) -> Result<Vec<String>, ApiError> {
        let mut saved = Vec::with_capacity(self.uploads.len());

        for upload in &self.uploads {
            match store.save(&upload.file_name, &upload.bytes).await {
                Ok(name) => saved.push(name),
                Err(e) => {
                    store.discard(&saved).await;
                    return Err(e.into());
                }
            }
        }

        let references = std::mem::take(&mut input.images);
        input.images = saved.iter().cloned().chain(references).collect();
        Ok(saved)
    }
}

/// Decode a JSON array of strings sent as a form field
fn parse_list(field: &str, raw: Option<&str>) -> Result<Vec<String>, ApiError> {
    let raw = raw.ok_or(ApiError::EmptyData)?;
    serde_json::from_str(raw)
        .map_err(|e| ApiError::IncorrectData(format!("{}: {}", field, e)))
}

/// Decode the stored-image references; an absent field or JSON `null` means none
fn parse_references(raw: Option<&str>) -> Result<Vec<String>, ApiError> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };
    let references: Option<Vec<String>> = serde_json::from_str(raw)
        .map_err(|e| ApiError::IncorrectData(format!("images: {}", e)))?;
    Ok(references.unwrap_or_default())
}
