// ABOUTME: Display-time deduplication of tag rows
// ABOUTME: Storage keeps one row per project; listings show one row per value

use std::collections::HashSet;

use crate::types::Tag;

/// Keep exactly one representative per distinct value: the first one seen.
///
/// Callers feed rows in id order, so the representative is the oldest row.
pub fn dedup_by_value(tags: Vec<Tag>) -> Vec<Tag> {
    let mut seen = HashSet::new();
    tags.into_iter()
        .filter(|tag| seen.insert(tag.value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TagKind;
    use pretty_assertions::assert_eq;

    fn color(id: i64, value: &str) -> Tag {
        Tag {
            id,
            kind: TagKind::Color,
            value: value.to_string(),
        }
    }

    #[test]
    fn test_dedup_keeps_first_row_per_value() {
        let tags = vec![color(1, "red"), color(2, "blue"), color(3, "red"), color(4, "red")];

        let deduped = dedup_by_value(tags);

        assert_eq!(deduped, vec![color(1, "red"), color(2, "blue")]);
    }

    #[test]
    fn test_dedup_is_case_sensitive() {
        let deduped = dedup_by_value(vec![color(1, "Red"), color(2, "red")]);
        assert_eq!(deduped.len(), 2);
    }

    #[test]
    fn test_dedup_empty() {
        assert!(dedup_by_value(Vec::new()).is_empty());
    }
}
