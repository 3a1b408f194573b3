//! HTTP surface: axum router over the core operations.
//!
//! Routes mirror the service's API: sources and learning items are plain
//! CRUD, review tasks expose the lifecycle operations. Engine outcomes map
//! to status codes in [`errors`]: `NotFound` → 404, `InvalidState` → 400.

pub mod errors;
pub mod handlers;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};

pub use errors::{ApiError, ApiResult};
pub use state::AppState;

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .nest("/api", api_routes())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/sources",
            get(handlers::sources::list_sources).post(handlers::sources::create_source),
        )
        .route(
            "/sources/{id}",
            get(handlers::sources::get_source)
                .put(handlers::sources::update_source)
                .delete(handlers::sources::delete_source),
        )
        .route(
            "/learning-items",
            get(handlers::learning_items::list_learning_items)
                .post(handlers::learning_items::create_learning_item),
        )
        .route(
            "/learning-items/{id}",
            get(handlers::learning_items::get_learning_item)
                .put(handlers::learning_items::update_learning_item)
                .delete(handlers::learning_items::delete_learning_item),
        )
        .route(
            "/review-tasks/today",
            get(handlers::review_tasks::today_review_tasks),
        )
        .route(
            "/review-tasks/{id}",
            get(handlers::review_tasks::get_review_task),
        )
        .route(
            "/review-tasks/{id}/complete",
            post(handlers::review_tasks::complete_review_task),
        )
        .route(
            "/review-tasks/{id}/uncomplete",
            post(handlers::review_tasks::uncomplete_review_task),
        )
}
