//! Learning item handlers.
//!
//! Creation triggers initial schedule generation; the response carries all
//! generated checkpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::models::learning_item::{
    LearningItem, LearningItemWithTasks, NewLearningItem, UpdateLearningItem,
};
use crate::web::errors::{ApiError, ApiResult};
use crate::web::handlers::{validate_title, Pagination};
use crate::web::state::AppState;

#[derive(Serialize)]
pub struct LearningItemListResponse {
    pub items: Vec<LearningItem>,
    pub total: i64,
}

/// POST /api/learning-items — creates the item and its full review schedule.
pub async fn create_learning_item(
    State(state): State<AppState>,
    Json(new_item): Json<NewLearningItem>,
) -> ApiResult<(StatusCode, Json<LearningItemWithTasks>)> {
    validate_title(&new_item.title)?;
    let created = LearningItem::create(&state.pool, &state.schedule, new_item).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/learning-items
pub async fn list_learning_items(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> ApiResult<Json<LearningItemListResponse>> {
    let limit = pagination.limit_or(state.config.default_page_limit);
    let (items, total) = LearningItem::list(&state.pool, pagination.skip, limit).await?;
    Ok(Json(LearningItemListResponse { items, total }))
}

/// GET /api/learning-items/{id} — detail including review tasks.
pub async fn get_learning_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<LearningItemWithTasks>> {
    let item = LearningItem::find_with_tasks(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Learning item"))?;
    Ok(Json(item))
}

/// PUT /api/learning-items/{id}
pub async fn update_learning_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(update): Json<UpdateLearningItem>,
) -> ApiResult<Json<LearningItem>> {
    if let Some(title) = &update.title {
        validate_title(title)?;
    }
    let item = LearningItem::update(&state.pool, id, update)
        .await?
        .ok_or_else(|| ApiError::not_found("Learning item"))?;
    Ok(Json(item))
}

/// DELETE /api/learning-items/{id} — cascades to review tasks.
pub async fn delete_learning_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    if LearningItem::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("Learning item"))
    }
}
