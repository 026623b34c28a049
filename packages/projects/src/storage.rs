// ABOUTME: Project storage layer using SQLite
// ABOUTME: Create, replace, delete and read projects together with their tags and images

use std::collections::HashMap;

use folio_core::{validate_project_input, Project, ProjectCreateInput};
use folio_storage::StorageError;
use folio_tags::{
    attach_tags, image_names_by_project, image_names_for_project, insert_project_images,
    insert_tags, reclaim_project, values_for_project, ReclaimReport, TagKind, TagStorage,
};
use sqlx::{Row, SqliteConnection, SqlitePool};
use tracing::{debug, info};

pub struct ProjectStorage {
    pool: SqlitePool,
    tags: TagStorage,
}

impl ProjectStorage {
    pub fn new(pool: SqlitePool) -> Self {
        let tags = TagStorage::new(pool.clone());
        Self { pool, tags }
    }

    /// Create a project with fresh tag and image rows, returning its id
    pub async fn create_project(&self, input: &ProjectCreateInput) -> Result<i64, StorageError> {
        validate(input)?;

        let mut tx = self.pool.begin().await.map_err(StorageError::Sqlx)?;
        let id = insert_project(&mut tx, None, input).await?;
        tx.commit().await.map_err(StorageError::Sqlx)?;

        info!("Created project {} ({})", id, input.title);
        Ok(id)
    }

    /// Delete a project, reclaiming tags no other project uses
    pub async fn delete_project(&self, id: i64) -> Result<ReclaimReport, StorageError> {
        let mut tx = self.pool.begin().await.map_err(StorageError::Sqlx)?;

        let report = reclaim_project(&mut tx, id).await?;
        let deleted = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(StorageError::Sqlx)?
            .rows_affected();

        if deleted == 0 {
            tx.rollback().await.map_err(StorageError::Sqlx)?;
            return Err(StorageError::NotFound);
        }

        tx.commit().await.map_err(StorageError::Sqlx)?;

        info!(
            project_id = id,
            colors_removed = report.colors.removed,
            types_removed = report.types.removed,
            categories_removed = report.categories.removed,
            images_removed = report.images_removed,
            "Deleted project"
        );
        Ok(report)
    }

    /// Replace every field and association of a project, keeping its id.
    ///
    /// Deletion and recreation share one transaction.
    pub async fn replace_project(
        &self,
        id: i64,
        input: &ProjectCreateInput,
    ) -> Result<i64, StorageError> {
        validate(input)?;

        let mut tx = self.pool.begin().await.map_err(StorageError::Sqlx)?;

        reclaim_project(&mut tx, id).await?;
        let deleted = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(StorageError::Sqlx)?
            .rows_affected();

        if deleted == 0 {
            tx.rollback().await.map_err(StorageError::Sqlx)?;
            return Err(StorageError::NotFound);
        }

        insert_project(&mut tx, Some(id), input).await?;
        tx.commit().await.map_err(StorageError::Sqlx)?;

        info!("Replaced project {} ({})", id, input.title);
        Ok(id)
    }

    pub async fn get_project(&self, id: i64) -> Result<Project, StorageError> {
        let mut conn = self.pool.acquire().await.map_err(StorageError::Sqlx)?;

        let row = sqlx::query("SELECT id, title, description FROM projects WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(StorageError::Sqlx)?
            .ok_or(StorageError::NotFound)?;

        Ok(Project {
            id,
            title: row.try_get("title").map_err(StorageError::Sqlx)?,
            description: row.try_get("description").map_err(StorageError::Sqlx)?,
            colors: values_for_project(&mut conn, TagKind::Color, id).await?,
            types: values_for_project(&mut conn, TagKind::Type, id).await?,
            categories: values_for_project(&mut conn, TagKind::Category, id).await?,
            images: image_names_for_project(&mut conn, id).await?,
        })
    }

    /// All projects in creation order, tag lists in association order
    pub async fn list_projects(&self) -> Result<Vec<Project>, StorageError> {
        debug!("Fetching all projects");

        let rows = sqlx::query("SELECT id, title, description FROM projects ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        let mut colors = self.tags.values_by_project(TagKind::Color).await?;
        let mut types = self.tags.values_by_project(TagKind::Type).await?;
        let mut categories = self.tags.values_by_project(TagKind::Category).await?;
        let mut images = image_names_by_project(&self.pool).await?;

        rows.iter()
            .map(|row| {
                let id: i64 = row.try_get("id").map_err(StorageError::Sqlx)?;
                Ok(Project {
                    id,
                    title: row.try_get("title").map_err(StorageError::Sqlx)?,
                    description: row.try_get("description").map_err(StorageError::Sqlx)?,
                    colors: take(&mut colors, id),
                    types: take(&mut types, id),
                    categories: take(&mut categories, id),
                    images: take(&mut images, id),
                })
            })
            .collect()
    }

    pub async fn count_projects(&self) -> Result<i64, StorageError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM projects")
            .fetch_one(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        Ok(count)
    }
}

fn validate(input: &ProjectCreateInput) -> Result<(), StorageError> {
    let errors = validate_project_input(input);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(StorageError::Validation(errors))
    }
}

fn take(grouped: &mut HashMap<i64, Vec<String>>, id: i64) -> Vec<String> {
    grouped.remove(&id).unwrap_or_default()
}

/// Insert the project row and every association inside the caller's transaction
async fn insert_project(
    conn: &mut SqliteConnection,
    id: Option<i64>,
    input: &ProjectCreateInput,
) -> Result<i64, StorageError> {
    let project_id = sqlx::query("INSERT INTO projects (id, title, description) VALUES (?, ?, ?)")
        .bind(id)
        .bind(&input.title)
        .bind(&input.description)
        .execute(&mut *conn)
        .await
        .map_err(StorageError::Sqlx)?
        .last_insert_rowid();

    for (kind, values) in [
        (TagKind::Color, &input.colors),
        (TagKind::Type, &input.types),
        (TagKind::Category, &input.categories),
    ] {
        let tag_ids = insert_tags(conn, kind, values).await?;
        attach_tags(conn, kind, project_id, &tag_ids).await?;
    }

    insert_project_images(conn, project_id, &input.images).await?;

    debug!(
        "Inserted project {} with {} colors, {} types, {} categories, {} images",
        project_id,
        input.colors.len(),
        input.types.len(),
        input.categories.len(),
        input.images.len()
    );

    Ok(project_id)
}
