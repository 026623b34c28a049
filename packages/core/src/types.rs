// ABOUTME: Project type definitions shared across packages
// ABOUTME: Mirrors the JSON shape served by the projects endpoint

use serde::{Deserialize, Serialize};

/// A portfolio project with its tag values and image filenames flattened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub colors: Vec<String>,
    pub types: Vec<String>,
    pub categories: Vec<String>,
    pub images: Vec<String>,
}

/// Everything needed to create (or recreate) a project.
///
/// `images` holds stored filenames: freshly saved uploads followed by
/// references to files that were uploaded earlier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCreateInput {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
}
