//! Learning item model.
//!
//! Creating an item is the entry point of the scheduling pipeline: the item
//! INSERT and its full checkpoint batch commit as one transaction, so an
//! item never exists without its schedule.

use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use tracing::info;

use crate::error::{RecallError, Result};
use crate::models::review_task::ReviewTask;
use crate::scheduler::ReviewSchedule;

/// Maps to the `learning_items` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct LearningItem {
    pub id: i64,
    pub source_id: i64,
    pub title: String,
    pub content: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// New learning item for creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLearningItem {
    pub source_id: i64,
    pub title: String,
    pub content: Option<String>,
    /// Anchor date for the review schedule; today when omitted.
    pub start_date: Option<NaiveDate>,
}

/// Partial update; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateLearningItem {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Learning item with its review tasks, for detail and creation responses.
#[derive(Debug, Clone, Serialize)]
pub struct LearningItemWithTasks {
    #[serde(flatten)]
    pub item: LearningItem,
    pub review_tasks: Vec<ReviewTask>,
}

impl LearningItem {
    /// Create a learning item and generate its full review schedule.
    ///
    /// Fails with [`RecallError::NotFound`] if the owning source does not
    /// exist. The item and all of its checkpoints commit atomically.
    pub async fn create(
        pool: &SqlitePool,
        schedule: &ReviewSchedule,
        new_item: NewLearningItem,
    ) -> Result<LearningItemWithTasks> {
        let mut tx = pool.begin().await?;

        let source_exists: Option<i64> = sqlx::query_scalar("SELECT id FROM sources WHERE id = ?1")
            .bind(new_item.source_id)
            .fetch_optional(&mut *tx)
            .await?;
        if source_exists.is_none() {
            return Err(RecallError::NotFound("Source"));
        }

        let now = Utc::now().naive_utc();

        let item = sqlx::query_as::<_, LearningItem>(
            r#"
            INSERT INTO learning_items (source_id, title, content, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?4)
            RETURNING id, source_id, title, content, created_at, updated_at
            "#,
        )
        .bind(new_item.source_id)
        .bind(&new_item.title)
        .bind(&new_item.content)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        let anchor_date = new_item.start_date.unwrap_or_else(|| Utc::now().date_naive());
        let checkpoints = schedule.checkpoints(anchor_date);
        let review_tasks = ReviewTask::insert_batch(&mut tx, item.id, &checkpoints, now).await?;

        tx.commit().await?;

        info!(
            learning_item_id = item.id,
            checkpoints = review_tasks.len(),
            anchor_date = %anchor_date,
            "learning item created with review schedule"
        );

        Ok(LearningItemWithTasks { item, review_tasks })
    }

    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<LearningItem>> {
        let item = sqlx::query_as::<_, LearningItem>(
            "SELECT id, source_id, title, content, created_at, updated_at FROM learning_items WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(item)
    }

    /// Item detail with its review tasks in schedule order.
    pub async fn find_with_tasks(
        pool: &SqlitePool,
        id: i64,
    ) -> Result<Option<LearningItemWithTasks>> {
        let Some(item) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let review_tasks = ReviewTask::list_for_item(pool, id).await?;

        Ok(Some(LearningItemWithTasks { item, review_tasks }))
    }

    /// Paginated listing, newest first, with the unpaginated total.
    pub async fn list(
        pool: &SqlitePool,
        skip: i64,
        limit: i64,
    ) -> Result<(Vec<LearningItem>, i64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM learning_items")
            .fetch_one(pool)
            .await?;

        let items = sqlx::query_as::<_, LearningItem>(
            r#"
            SELECT id, source_id, title, content, created_at, updated_at
            FROM learning_items
            ORDER BY created_at DESC, id DESC
            LIMIT ?1 OFFSET ?2
            "#,
        )
        .bind(limit)
        .bind(skip)
        .fetch_all(pool)
        .await?;

        Ok((items, total))
    }

    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        update: UpdateLearningItem,
    ) -> Result<Option<LearningItem>> {
        let Some(existing) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let title = update.title.unwrap_or(existing.title);
        let content = update.content.or(existing.content);
        let now = Utc::now().naive_utc();

        let item = sqlx::query_as::<_, LearningItem>(
            r#"
            UPDATE learning_items
            SET title = ?1, content = ?2, updated_at = ?3
            WHERE id = ?4
            RETURNING id, source_id, title, content, created_at, updated_at
            "#,
        )
        .bind(&title)
        .bind(&content)
        .bind(now)
        .bind(id)
        .fetch_one(pool)
        .await?;

        Ok(Some(item))
    }

    /// Delete the item; its review tasks cascade. Returns false if the item
    /// did not exist.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM learning_items WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
