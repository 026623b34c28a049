// ABOUTME: Image reference rows attached to projects
// ABOUTME: Only filenames live here; the bytes sit in the external image directory

use std::collections::HashMap;

use folio_storage::{StorageError, StorageResult};
use sqlx::{Row, SqliteConnection, SqlitePool};

/// Insert one image row per filename and link each to the project
pub async fn insert_project_images(
    conn: &mut SqliteConnection,
    project_id: i64,
    names: &[String],
) -> StorageResult<Vec<i64>> {
    let mut ids = Vec::with_capacity(names.len());

    for name in names {
        let image_id = sqlx::query("INSERT INTO images (name) VALUES (?)")
            .bind(name)
            .execute(&mut *conn)
            .await
            .map_err(StorageError::Sqlx)?
            .last_insert_rowid();

        sqlx::query("INSERT INTO project_images (project_id, image_id) VALUES (?, ?)")
            .bind(project_id)
            .bind(image_id)
            .execute(&mut *conn)
            .await
            .map_err(StorageError::Sqlx)?;

        ids.push(image_id);
    }

    Ok(ids)
}

/// Image filenames of one project, in creation order
pub async fn image_names_for_project(
    conn: &mut SqliteConnection,
    project_id: i64,
) -> StorageResult<Vec<String>> {
    let names = sqlx::query_scalar::<_, String>(
        r#"
        SELECT i.name FROM images i
        INNER JOIN project_images pi ON pi.image_id = i.id
        WHERE pi.project_id = ?
        ORDER BY i.id
        "#,
    )
    .bind(project_id)
    .fetch_all(&mut *conn)
    .await
    .map_err(StorageError::Sqlx)?;

    Ok(names)
}

/// Image filenames grouped by project id
pub async fn image_names_by_project(
    pool: &SqlitePool,
) -> StorageResult<HashMap<i64, Vec<String>>> {
    let rows = sqlx::query(
        r#"
        SELECT pi.project_id, i.name FROM images i
        INNER JOIN project_images pi ON pi.image_id = i.id
        ORDER BY pi.project_id, i.id
        "#,
    )
    .fetch_all(pool)
    .await
    .map_err(StorageError::Sqlx)?;

    let mut grouped: HashMap<i64, Vec<String>> = HashMap::new();
    for row in rows {
        let project_id: i64 = row.try_get("project_id").map_err(StorageError::Sqlx)?;
        let name: String = row.try_get("name").map_err(StorageError::Sqlx)?;
        grouped.entry(project_id).or_default().push(name);
    }

    Ok(grouped)
}

/// Number of image rows in the store
pub async fn count_images(pool: &SqlitePool) -> StorageResult<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM images")
        .fetch_one(pool)
        .await
        .map_err(StorageError::Sqlx)?;

    Ok(count)
}
