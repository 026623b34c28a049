// ABOUTME: Tag storage layer using SQLite
// ABOUTME: Creates tag rows, links them to projects and reads them back per project or deduplicated

use std::collections::HashMap;

use folio_storage::{StorageError, StorageResult};
use sqlx::{Row, SqliteConnection, SqlitePool};
use tracing::debug;

use crate::dedup::dedup_by_value;
use crate::types::{Tag, TagKind};

// SQL assembled with format! below only interpolates the static table and column
// names from TagKind; user values always go through bind().

/// Insert one fresh row per value and return the new ids in input order.
///
/// No lookup against existing rows happens: equal values produce new entities.
pub async fn insert_tags(
    conn: &mut SqliteConnection,
    kind: TagKind,
    values: &[String],
) -> StorageResult<Vec<i64>> {
    let sql = format!(
        "INSERT INTO {} ({}) VALUES (?)",
        kind.table(),
        kind.value_field()
    );

    let mut ids = Vec::with_capacity(values.len());
    for value in values {
        let result = sqlx::query(&sql)
            .bind(value)
            .execute(&mut *conn)
            .await
            .map_err(StorageError::Sqlx)?;
        ids.push(result.last_insert_rowid());
    }

    debug!("Inserted {} {} rows", ids.len(), kind);
    Ok(ids)
}

/// Link existing tag rows to a project
pub async fn attach_tags(
    conn: &mut SqliteConnection,
    kind: TagKind,
    project_id: i64,
    tag_ids: &[i64],
) -> StorageResult<()> {
    let sql = format!(
        "INSERT OR IGNORE INTO {} (project_id, {}) VALUES (?, ?)",
        kind.link_table(),
        kind.link_column()
    );

    for tag_id in tag_ids {
        sqlx::query(&sql)
            .bind(project_id)
            .bind(tag_id)
            .execute(&mut *conn)
            .await
            .map_err(StorageError::Sqlx)?;
    }

    Ok(())
}

/// Values of one kind attached to a project, in creation order
pub async fn values_for_project(
    conn: &mut SqliteConnection,
    kind: TagKind,
    project_id: i64,
) -> StorageResult<Vec<String>> {
    let sql = format!(
        "SELECT t.{field} AS value FROM {table} t \
         INNER JOIN {link} l ON l.{column} = t.id \
         WHERE l.project_id = ? ORDER BY t.id",
        field = kind.value_field(),
        table = kind.table(),
        link = kind.link_table(),
        column = kind.link_column(),
    );

    let values = sqlx::query_scalar::<_, String>(&sql)
        .bind(project_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(StorageError::Sqlx)?;

    Ok(values)
}

pub struct TagStorage {
    pool: SqlitePool,
}

impl TagStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Values of one kind grouped by project id, in creation order
    pub async fn values_by_project(
        &self,
        kind: TagKind,
    ) -> Result<HashMap<i64, Vec<String>>, StorageError> {
        debug!("Fetching {} values for all projects", kind);

        let sql = format!(
            "SELECT l.project_id, t.{field} AS value FROM {table} t \
             INNER JOIN {link} l ON l.{column} = t.id \
             ORDER BY l.project_id, t.id",
            field = kind.value_field(),
            table = kind.table(),
            link = kind.link_table(),
            column = kind.link_column(),
        );

        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        let mut grouped: HashMap<i64, Vec<String>> = HashMap::new();
        for row in rows {
            let project_id: i64 = row.try_get("project_id").map_err(StorageError::Sqlx)?;
            let value: String = row.try_get("value").map_err(StorageError::Sqlx)?;
            grouped.entry(project_id).or_default().push(value);
        }

        Ok(grouped)
    }

    /// Every tag row of `kind` linked to at least one project, in id order
    pub async fn list_linked(&self, kind: TagKind) -> Result<Vec<Tag>, StorageError> {
        let sql = format!(
            "SELECT DISTINCT t.id, t.{field} AS value FROM {table} t \
             INNER JOIN {link} l ON l.{column} = t.id \
             ORDER BY t.id",
            field = kind.value_field(),
            table = kind.table(),
            link = kind.link_table(),
            column = kind.link_column(),
        );

        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        rows.iter().map(|row| row_to_tag(kind, row)).collect()
    }

    /// One representative row per distinct value across all projects, sorted by value
    pub async fn list_distinct(&self, kind: TagKind) -> Result<Vec<Tag>, StorageError> {
        debug!("Listing distinct {} values", kind);

        let mut tags = dedup_by_value(self.list_linked(kind).await?);
        tags.sort_by(|a, b| a.value.cmp(&b.value));
        Ok(tags)
    }

    /// Whether a tag row with this id exists
    pub async fn exists(&self, kind: TagKind, tag_id: i64) -> Result<bool, StorageError> {
        let sql = format!("SELECT EXISTS(SELECT 1 FROM {} WHERE id = ?)", kind.table());

        let exists: i64 = sqlx::query_scalar(&sql)
            .bind(tag_id)
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        Ok(exists != 0)
    }

    /// Total number of rows of `kind`, linked or not
    pub async fn count(&self, kind: TagKind) -> Result<i64, StorageError> {
        let sql = format!("SELECT COUNT(*) FROM {}", kind.table());

        let count: i64 = sqlx::query_scalar(&sql)
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        Ok(count)
    }

    /// Ids of the rows of `kind` linked to a project
    pub async fn ids_for_project(
        &self,
        kind: TagKind,
        project_id: i64,
    ) -> Result<Vec<i64>, StorageError> {
        let sql = format!(
            "SELECT {column} FROM {link} WHERE project_id = ? ORDER BY {column}",
            column = kind.link_column(),
            link = kind.link_table(),
        );

        let ids = sqlx::query_scalar::<_, i64>(&sql)
            .bind(project_id)
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        Ok(ids)
    }
}

/// Convert a database row to a Tag
fn row_to_tag(kind: TagKind, row: &sqlx::sqlite::SqliteRow) -> Result<Tag, StorageError> {
    Ok(Tag {
        id: row.try_get("id").map_err(StorageError::Sqlx)?,
        kind,
        value: row.try_get("value").map_err(StorageError::Sqlx)?,
    })
}
