//! Source CRUD handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::models::source::{NewSource, Source, SourceWithItems, UpdateSource};
use crate::web::errors::{ApiError, ApiResult};
use crate::web::handlers::{validate_title, Pagination};
use crate::web::state::AppState;

#[derive(Serialize)]
pub struct SourceListResponse {
    pub items: Vec<Source>,
    pub total: i64,
}

/// POST /api/sources
pub async fn create_source(
    State(state): State<AppState>,
    Json(new_source): Json<NewSource>,
) -> ApiResult<(StatusCode, Json<Source>)> {
    validate_title(&new_source.title)?;
    let source = Source::create(&state.pool, new_source).await?;
    Ok((StatusCode::CREATED, Json(source)))
}

/// GET /api/sources
pub async fn list_sources(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> ApiResult<Json<SourceListResponse>> {
    let limit = pagination.limit_or(state.config.default_page_limit);
    let (items, total) = Source::list(&state.pool, pagination.skip, limit).await?;
    Ok(Json(SourceListResponse { items, total }))
}

/// GET /api/sources/{id} — detail including learning items.
pub async fn get_source(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<SourceWithItems>> {
    let source = Source::find_with_items(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Source"))?;
    Ok(Json(source))
}

/// PUT /api/sources/{id}
pub async fn update_source(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(update): Json<UpdateSource>,
) -> ApiResult<Json<Source>> {
    if let Some(title) = &update.title {
        validate_title(title)?;
    }
    let source = Source::update(&state.pool, id, update)
        .await?
        .ok_or_else(|| ApiError::not_found("Source"))?;
    Ok(Json(source))
}

/// DELETE /api/sources/{id} — cascades to learning items and their tasks.
pub async fn delete_source(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    if Source::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("Source"))
    }
}
