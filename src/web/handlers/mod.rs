//! HTTP handlers grouped by resource.

pub mod health;
pub mod learning_items;
pub mod review_tasks;
pub mod sources;

use serde::Deserialize;

use crate::web::errors::{ApiError, ApiResult};

/// `skip`/`limit` pagination query parameters for list endpoints.
#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub skip: i64,
    pub limit: Option<i64>,
}

impl Pagination {
    pub fn limit_or(&self, default: i64) -> i64 {
        self.limit.unwrap_or(default).max(0)
    }
}

/// Titles are mandatory and capped at 255 characters.
pub(crate) fn validate_title(title: &str) -> ApiResult<()> {
    let length = title.chars().count();
    if length == 0 {
        return Err(ApiError::bad_request("title must not be empty"));
    }
    if length > 255 {
        return Err(ApiError::bad_request("title must be at most 255 characters"));
    }
    Ok(())
}
