// ABOUTME: Integration tests for the project repository
// ABOUTME: Create, list, replace and delete with the tag lifecycle observed through the store

use folio_core::ProjectCreateInput;
use folio_projects::{ProjectStorage, StorageError};
use folio_storage::test_utils::memory_pool;
use folio_tags::{count_images, TagKind, TagStorage};
use pretty_assertions::assert_eq;
use sqlx::SqlitePool;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn input(title: &str, colors: &[&str], types: &[&str], categories: &[&str]) -> ProjectCreateInput {
    ProjectCreateInput {
        title: title.to_string(),
        description: format!("{} description", title),
        colors: strings(colors),
        types: strings(types),
        categories: strings(categories),
        images: vec![],
    }
}

async fn setup() -> (SqlitePool, ProjectStorage, TagStorage) {
    let pool = memory_pool().await;
    let projects = ProjectStorage::new(pool.clone());
    let tags = TagStorage::new(pool.clone());
    (pool, projects, tags)
}

#[tokio::test]
async fn test_create_and_get_project() {
    let (_pool, projects, _tags) = setup().await;
    let mut data = input("Lighthouse", &["#fff", "#000"], &["Branding"], &["Print", "Web"]);
    data.images = strings(&["a1b2c3d4cover.png", "e5f6g7h8detail.jpg"]);

    let id = projects.create_project(&data).await.unwrap();
    let project = projects.get_project(id).await.unwrap();

    assert_eq!(project.title, "Lighthouse");
    assert_eq!(project.description, "Lighthouse description");
    assert_eq!(project.colors, data.colors);
    assert_eq!(project.types, data.types);
    assert_eq!(project.categories, data.categories);
    assert_eq!(project.images, data.images);
}

#[tokio::test]
async fn test_create_persists_one_tag_row_per_value() {
    let (_pool, projects, tags) = setup().await;

    let id = projects
        .create_project(&input("Atlas", &["#111", "#222", "#333"], &["Logo", "Poster"], &["Print"]))
        .await
        .unwrap();

    assert_eq!(projects.count_projects().await.unwrap(), 1);
    assert_eq!(tags.count(TagKind::Color).await.unwrap(), 3);
    assert_eq!(tags.count(TagKind::Type).await.unwrap(), 2);
    assert_eq!(tags.count(TagKind::Category).await.unwrap(), 1);

    let project = projects.get_project(id).await.unwrap();
    assert_eq!(project.colors.len() + project.types.len() + project.categories.len(), 6);
}

#[tokio::test]
async fn test_create_project_with_no_associations() {
    let (_pool, projects, _tags) = setup().await;

    let id = projects.create_project(&input("Bare", &[], &[], &[])).await.unwrap();
    let project = projects.get_project(id).await.unwrap();

    assert!(project.colors.is_empty());
    assert!(project.types.is_empty());
    assert!(project.categories.is_empty());
    assert!(project.images.is_empty());
}

#[tokio::test]
async fn test_create_rejects_invalid_input_without_writing() {
    let (_pool, projects, tags) = setup().await;

    let err = projects
        .create_project(&input("", &["red"], &[], &[]))
        .await
        .unwrap_err();

    assert!(matches!(err, StorageError::Validation(_)));
    assert_eq!(projects.count_projects().await.unwrap(), 0);
    assert_eq!(tags.count(TagKind::Color).await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_does_not_dedup_values() {
    let (_pool, projects, tags) = setup().await;

    projects
        .create_project(&input("A", &["red", "red"], &[], &[]))
        .await
        .unwrap();
    projects
        .create_project(&input("B", &["red"], &[], &[]))
        .await
        .unwrap();

    assert_eq!(tags.count(TagKind::Color).await.unwrap(), 3);
    let listed = tags.list_distinct(TagKind::Color).await.unwrap();
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn test_list_projects_in_creation_order() {
    let (_pool, projects, _tags) = setup().await;
    let a = projects
        .create_project(&input("A", &["red"], &["Web"], &[]))
        .await
        .unwrap();
    let b = projects
        .create_project(&input("B", &[], &[], &["Print"]))
        .await
        .unwrap();

    let listed = projects.list_projects().await.unwrap();

    assert_eq!(listed.iter().map(|p| p.id).collect::<Vec<_>>(), vec![a, b]);
    assert_eq!(listed[0].colors, vec!["red"]);
    assert_eq!(listed[0].types, vec!["Web"]);
    assert!(listed[0].categories.is_empty());
    assert_eq!(listed[1].categories, vec!["Print"]);
}

#[tokio::test]
async fn test_delete_sole_project_removes_all_tags() {
    let (pool, projects, tags) = setup().await;
    let mut data = input("Solo", &["red"], &["Web"], &["Print"]);
    data.images = strings(&["a1b2c3d4cover.png"]);
    let id = projects.create_project(&data).await.unwrap();

    let report = projects.delete_project(id).await.unwrap();

    assert_eq!(report.colors.removed, 1);
    assert_eq!(report.images_removed, 1);
    for kind in TagKind::ALL {
        assert_eq!(tags.count(kind).await.unwrap(), 0);
    }
    assert_eq!(count_images(&pool).await.unwrap(), 0);
    assert!(matches!(
        projects.get_project(id).await,
        Err(StorageError::NotFound)
    ));
}

#[tokio::test]
async fn test_delete_keeps_rows_another_project_links() {
    let (pool, projects, tags) = setup().await;
    let a = projects
        .create_project(&input("A", &["teal"], &[], &[]))
        .await
        .unwrap();
    let b = projects
        .create_project(&input("B", &["navy"], &[], &[]))
        .await
        .unwrap();

    // Link A's color row to B as well
    let shared_id: i64 = sqlx::query_scalar("SELECT color_id FROM project_colors WHERE project_id = ?")
        .bind(a)
        .fetch_one(&pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO project_colors (project_id, color_id) VALUES (?, ?)")
        .bind(b)
        .bind(shared_id)
        .execute(&pool)
        .await
        .unwrap();

    let report = projects.delete_project(a).await.unwrap();

    assert_eq!(report.colors.removed, 0);
    assert_eq!(report.colors.detached, 1);
    assert!(tags.exists(TagKind::Color, shared_id).await.unwrap());
    assert_eq!(
        projects.get_project(b).await.unwrap().colors,
        vec!["teal", "navy"]
    );
}

#[tokio::test]
async fn test_delete_with_equal_values_on_other_project() {
    let (_pool, projects, tags) = setup().await;
    let a = projects
        .create_project(&input("A", &["red"], &[], &[]))
        .await
        .unwrap();
    let b = projects
        .create_project(&input("B", &["red"], &[], &[]))
        .await
        .unwrap();

    projects.delete_project(a).await.unwrap();

    assert_eq!(tags.count(TagKind::Color).await.unwrap(), 1);
    assert_eq!(projects.get_project(b).await.unwrap().colors, vec!["red"]);
}

#[tokio::test]
async fn test_delete_unknown_project() {
    let (_pool, projects, _tags) = setup().await;

    let err = projects.delete_project(999).await.unwrap_err();

    assert!(matches!(err, StorageError::NotFound));
}

#[tokio::test]
async fn test_replace_keeps_id_and_swaps_associations() {
    let (pool, projects, tags) = setup().await;
    let mut original = input("Old", &["red"], &["Web"], &["Print"]);
    original.images = strings(&["a1b2c3d4old.png"]);
    let id = projects.create_project(&original).await.unwrap();

    let replacement = input("New", &["blue", "green"], &[], &["Digital"]);
    let replaced_id = projects.replace_project(id, &replacement).await.unwrap();

    assert_eq!(replaced_id, id);
    let project = projects.get_project(id).await.unwrap();
    assert_eq!(project.title, "New");
    assert_eq!(project.colors, vec!["blue", "green"]);
    assert!(project.types.is_empty());
    assert!(project.images.is_empty());
    assert_eq!(tags.count(TagKind::Type).await.unwrap(), 0);
    assert_eq!(count_images(&pool).await.unwrap(), 0);
    assert_eq!(projects.count_projects().await.unwrap(), 1);
}

#[tokio::test]
async fn test_replace_with_invalid_input_leaves_project_intact() {
    let (_pool, projects, _tags) = setup().await;
    let id = projects
        .create_project(&input("Keep", &["red"], &["Web"], &[]))
        .await
        .unwrap();

    let mut bad = input("Broken", &["far-too-long-color"], &[], &[]);
    bad.images = strings(&["../escape.png"]);
    let err = projects.replace_project(id, &bad).await.unwrap_err();

    assert!(matches!(err, StorageError::Validation(_)));
    let project = projects.get_project(id).await.unwrap();
    assert_eq!(project.title, "Keep");
    assert_eq!(project.colors, vec!["red"]);
    assert_eq!(project.types, vec!["Web"]);
}

#[tokio::test]
async fn test_replace_unknown_project() {
    let (_pool, projects, _tags) = setup().await;

    let err = projects
        .replace_project(42, &input("Ghost", &[], &[], &[]))
        .await
        .unwrap_err();

    assert!(matches!(err, StorageError::NotFound));
    assert_eq!(projects.count_projects().await.unwrap(), 0);
}
