//! Review task lifecycle handlers.

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;

use crate::models::review_task::ReviewTask;
use crate::web::errors::{ApiError, ApiResult};
use crate::web::state::AppState;

/// GET /api/review-tasks/today
///
/// Runs the promotion sweep first, then returns `Ready` tasks sorted by due
/// date ascending. Callers therefore always see due tasks as `Ready`, even
/// though there is no background scheduler.
pub async fn today_review_tasks(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ReviewTask>>> {
    let today = Utc::now().date_naive();
    ReviewTask::promote_due(&state.pool, today).await?;
    let tasks = ReviewTask::list_ready(&state.pool).await?;
    Ok(Json(tasks))
}

/// GET /api/review-tasks/{id}
pub async fn get_review_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<ReviewTask>> {
    let task = ReviewTask::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Review task"))?;
    Ok(Json(task))
}

/// POST /api/review-tasks/{id}/complete
///
/// Completing a yearly-tail checkpoint also persists its successor; a double
/// completion maps to 400 via the engine's `InvalidState`.
pub async fn complete_review_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<ReviewTask>> {
    let task = ReviewTask::complete(&state.pool, &state.schedule, id).await?;
    Ok(Json(task))
}

/// POST /api/review-tasks/{id}/uncomplete
pub async fn uncomplete_review_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<ReviewTask>> {
    let task = ReviewTask::uncomplete(&state.pool, id).await?;
    Ok(Json(task))
}
