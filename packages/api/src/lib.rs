// ABOUTME: HTTP API layer for Folio providing the REST endpoints and routing
// ABOUTME: Integration layer over the project, tag and security packages

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};

use folio_projects::DbState;

pub mod auth;
pub mod auth_handlers;
pub mod error;
pub mod health_handlers;
pub mod images_handlers;
pub mod project_form;
pub mod projects_handlers;
pub mod response;
pub mod tags_handlers;

pub use error::ApiError;
pub use response::{ApiResponse, ErrorCode};

/// Routes whose non-GET methods need a valid token
fn create_protected_router(db: &DbState) -> Router<DbState> {
    Router::new()
        .route(
            "/projects",
            get(projects_handlers::list_projects)
                .post(projects_handlers::create_project)
                .put(projects_handlers::replace_project)
                .delete(projects_handlers::delete_project),
        )
        .route("/is_authed", post(auth_handlers::is_authed))
        .route_layer(middleware::from_fn_with_state(
            db.clone(),
            auth::require_token,
        ))
}

/// Creates the full API router
pub fn create_router(db: DbState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/login", post(auth_handlers::login))
        .route("/colors", get(tags_handlers::list_colors))
        .route("/types", get(tags_handlers::list_types))
        .route("/categories", get(tags_handlers::list_categories))
        .route("/images/{filename}", get(images_handlers::get_image))
        .route("/health", get(health_handlers::health))
        .merge(create_protected_router(&db))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(db)
}
