//! Source model: the material a learning item comes from (a book, a course).
//!
//! Deleting a source cascades to its learning items and, transitively, to
//! their review tasks. The cascade lives in the schema; these methods only
//! issue the single DELETE.

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use crate::error::Result;
use crate::models::learning_item::LearningItem;

/// Maps to the `sources` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Source {
    pub id: i64,
    pub title: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// New source for creation (without generated fields).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSource {
    pub title: String,
    pub category: Option<String>,
    pub description: Option<String>,
}

/// Partial update; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSource {
    pub title: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
}

/// Source with its learning items, for detail responses.
#[derive(Debug, Clone, Serialize)]
pub struct SourceWithItems {
    #[serde(flatten)]
    pub source: Source,
    pub learning_items: Vec<LearningItem>,
}

impl Source {
    pub async fn create(pool: &SqlitePool, new_source: NewSource) -> Result<Source> {
        let now = Utc::now().naive_utc();

        let source = sqlx::query_as::<_, Source>(
            r#"
            INSERT INTO sources (title, category, description, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?4)
            RETURNING id, title, category, description, created_at, updated_at
            "#,
        )
        .bind(&new_source.title)
        .bind(&new_source.category)
        .bind(&new_source.description)
        .bind(now)
        .fetch_one(pool)
        .await?;

        Ok(source)
    }

    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Source>> {
        let source = sqlx::query_as::<_, Source>(
            "SELECT id, title, category, description, created_at, updated_at FROM sources WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(source)
    }

    /// Source detail with its learning items, newest item first.
    pub async fn find_with_items(pool: &SqlitePool, id: i64) -> Result<Option<SourceWithItems>> {
        let Some(source) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let learning_items = sqlx::query_as::<_, LearningItem>(
            r#"
            SELECT id, source_id, title, content, created_at, updated_at
            FROM learning_items
            WHERE source_id = ?1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        Ok(Some(SourceWithItems {
            source,
            learning_items,
        }))
    }

    /// Paginated listing, newest first, with the unpaginated total.
    pub async fn list(pool: &SqlitePool, skip: i64, limit: i64) -> Result<(Vec<Source>, i64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sources")
            .fetch_one(pool)
            .await?;

        let sources = sqlx::query_as::<_, Source>(
            r#"
            SELECT id, title, category, description, created_at, updated_at
            FROM sources
            ORDER BY created_at DESC, id DESC
            LIMIT ?1 OFFSET ?2
            "#,
        )
        .bind(limit)
        .bind(skip)
        .fetch_all(pool)
        .await?;

        Ok((sources, total))
    }

    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        update: UpdateSource,
    ) -> Result<Option<Source>> {
        let Some(existing) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let title = update.title.unwrap_or(existing.title);
        let category = update.category.or(existing.category);
        let description = update.description.or(existing.description);
        let now = Utc::now().naive_utc();

        let source = sqlx::query_as::<_, Source>(
            r#"
            UPDATE sources
            SET title = ?1, category = ?2, description = ?3, updated_at = ?4
            WHERE id = ?5
            RETURNING id, title, category, description, created_at, updated_at
            "#,
        )
        .bind(&title)
        .bind(&category)
        .bind(&description)
        .bind(now)
        .bind(id)
        .fetch_one(pool)
        .await?;

        Ok(Some(source))
    }

    /// Delete the source; learning items and their review tasks cascade.
    /// Returns false if the source did not exist.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM sources WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
