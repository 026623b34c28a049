// ABOUTME: Tag type definitions
// ABOUTME: The three uniform tag kinds and the table layout behind each

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// The three kinds of tag entity a project can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagKind {
    Color,
    Type,
    Category,
}

impl TagKind {
    pub const ALL: [TagKind; 3] = [TagKind::Color, TagKind::Type, TagKind::Category];

    /// Table holding the tag rows
    pub fn table(self) -> &'static str {
        match self {
            TagKind::Color => "colors",
            TagKind::Type => "types",
            TagKind::Category => "categories",
        }
    }

    /// Association table linking projects to tag rows
    pub fn link_table(self) -> &'static str {
        match self {
            TagKind::Color => "project_colors",
            TagKind::Type => "project_types",
            TagKind::Category => "project_categories",
        }
    }

    /// Foreign key column in the association table
    pub fn link_column(self) -> &'static str {
        match self {
            TagKind::Color => "color_id",
            TagKind::Type => "type_id",
            TagKind::Category => "category_id",
        }
    }

    /// Column (and JSON field) carrying the tag's semantic value
    pub fn value_field(self) -> &'static str {
        match self {
            TagKind::Color => "value",
            TagKind::Type | TagKind::Category => "title",
        }
    }
}

impl std::fmt::Display for TagKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TagKind::Color => "color",
            TagKind::Type => "type",
            TagKind::Category => "category",
        };
        f.write_str(name)
    }
}

/// A single tag row. Two tags with the same value are still distinct entities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: i64,
    pub kind: TagKind,
    pub value: String,
}

// Colors serialize as {id, value}, types and categories as {id, title}.
impl Serialize for Tag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry(self.kind.value_field(), &self.value)?;
        map.end()
    }
}
