// ABOUTME: Reclaims tag entities when a project is deleted
// ABOUTME: Shared tags are detached, orphaned tags are deleted, images always go

use folio_storage::{StorageError, StorageResult};
use sqlx::SqliteConnection;
use tracing::debug;

use crate::types::TagKind;

/// Outcome of reclaiming one tag kind for a deleted project
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Reclaimed {
    /// Rows deleted because no other project referenced them
    pub removed: u64,
    /// Rows kept because another project still references them
    pub detached: u64,
}

/// Outcome of reclaiming everything a deleted project referenced
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReclaimReport {
    pub colors: Reclaimed,
    pub types: Reclaimed,
    pub categories: Reclaimed,
    pub images_removed: u64,
}

/// Reclaim the tags of one kind attached to `project_id`.
///
/// A tag counts as shared when another project links the same row id; equal
/// values on different rows are unrelated. Both statements are writes, so the
/// surrounding transaction holds the database write lock from its first
/// statement and no other deletion can interleave between check and delete.
pub async fn reclaim_tags(
    conn: &mut SqliteConnection,
    kind: TagKind,
    project_id: i64,
) -> StorageResult<Reclaimed> {
    let delete_orphans = format!(
        "DELETE FROM {table} \
         WHERE id IN (SELECT {column} FROM {link} WHERE project_id = ?) \
         AND NOT EXISTS ( \
             SELECT 1 FROM {link} other \
             WHERE other.{column} = {table}.id AND other.project_id <> ? \
         )",
        table = kind.table(),
        link = kind.link_table(),
        column = kind.link_column(),
    );

    let removed = sqlx::query(&delete_orphans)
        .bind(project_id)
        .bind(project_id)
        .execute(&mut *conn)
        .await
        .map_err(StorageError::Sqlx)?
        .rows_affected();

    // Orphans took their association rows with them (ON DELETE CASCADE); what is
    // left links this project to rows other projects still use.
    let detach = format!("DELETE FROM {} WHERE project_id = ?", kind.link_table());

    let detached = sqlx::query(&detach)
        .bind(project_id)
        .execute(&mut *conn)
        .await
        .map_err(StorageError::Sqlx)?
        .rows_affected();

    debug!(
        project_id,
        kind = %kind,
        removed,
        detached,
        "Reclaimed project tags"
    );

    Ok(Reclaimed { removed, detached })
}

/// Delete every image row attached to `project_id`, shared or not
pub async fn remove_project_images(
    conn: &mut SqliteConnection,
    project_id: i64,
) -> StorageResult<u64> {
    let removed = sqlx::query(
        "DELETE FROM images WHERE id IN (SELECT image_id FROM project_images WHERE project_id = ?)",
    )
    .bind(project_id)
    .execute(&mut *conn)
    .await
    .map_err(StorageError::Sqlx)?
    .rows_affected();

    debug!(project_id, removed, "Removed project images");
    Ok(removed)
}

/// Reclaim all three tag kinds and the images of `project_id`
pub async fn reclaim_project(
    conn: &mut SqliteConnection,
    project_id: i64,
) -> StorageResult<ReclaimReport> {
    Ok(ReclaimReport {
        colors: reclaim_tags(conn, TagKind::Color, project_id).await?,
        types: reclaim_tags(conn, TagKind::Type, project_id).await?,
        categories: reclaim_tags(conn, TagKind::Category, project_id).await?,
        images_removed: remove_project_images(conn, project_id).await?,
    })
}
