// ABOUTME: Tag store for project colors, types, categories and image references
// ABOUTME: Creation, per-project lookup, display-time dedup and deletion-time reclaiming

pub mod dedup;
pub mod images;
pub mod lifecycle;
pub mod storage;
pub mod types;

// Re-export main types
pub use dedup::dedup_by_value;
pub use images::{
    count_images, image_names_by_project, image_names_for_project, insert_project_images,
};
pub use lifecycle::{reclaim_project, reclaim_tags, remove_project_images, ReclaimReport, Reclaimed};
pub use storage::{attach_tags, insert_tags, values_for_project, TagStorage};
pub use types::{Tag, TagKind};
