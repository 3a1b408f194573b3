//! Review task model: one scheduled checkpoint for one learning item.
//!
//! Status lives in the `status` column as the state machine's display
//! string. The composed operations here are the persistence half of the
//! lifecycle engine:
//!
//! - [`ReviewTask::promote_due`] — the explicit, idempotent sweep behind
//!   every "today's tasks" read.
//! - [`ReviewTask::complete`] — load → validate → mutate → conditionally
//!   spawn the next yearly checkpoint, as one transaction. The
//!   `UNIQUE(learning_item_id, stage_offset_days)` constraint plus
//!   `ON CONFLICT DO NOTHING` makes the spawn retry-safe.
//! - [`ReviewTask::uncomplete`] — permissive reset to `Ready`. A spawned
//!   yearly successor is deliberately left in place.

use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Sqlite, SqlitePool, Transaction};
use tracing::{debug, info};

use crate::error::{RecallError, Result};
use crate::scheduler::{ReviewSchedule, StageCheckpoint};
use crate::state_machine::{next_state, ReviewTaskEvent, ReviewTaskState};

/// Maps to the `review_tasks` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ReviewTask {
    pub id: i64,
    pub learning_item_id: i64,
    pub stage_name: String,
    pub stage_offset_days: i64,
    pub due_date: NaiveDate,
    pub status: String,
    pub completed_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

/// New review task for creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReviewTask {
    pub learning_item_id: i64,
    pub stage_name: String,
    pub stage_offset_days: i64,
    pub due_date: NaiveDate,
    pub status: ReviewTaskState,
}

const SELECT_COLUMNS: &str = "id, learning_item_id, stage_name, stage_offset_days, due_date, status, completed_at, created_at";

impl ReviewTask {
    /// Parse the stored status string into the state enum.
    pub fn state(&self) -> Result<ReviewTaskState> {
        self.status
            .parse()
            .map_err(|e: String| RecallError::Internal(e))
    }

    /// Insert one checkpoint within an open transaction.
    pub async fn insert(
        tx: &mut Transaction<'_, Sqlite>,
        new_task: NewReviewTask,
        created_at: NaiveDateTime,
    ) -> Result<ReviewTask> {
        let task = sqlx::query_as::<_, ReviewTask>(
            r#"
            INSERT INTO review_tasks
                (learning_item_id, stage_name, stage_offset_days, due_date, status, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            RETURNING id, learning_item_id, stage_name, stage_offset_days, due_date, status, completed_at, created_at
            "#,
        )
        .bind(new_task.learning_item_id)
        .bind(&new_task.stage_name)
        .bind(new_task.stage_offset_days)
        .bind(new_task.due_date)
        .bind(new_task.status.to_string())
        .bind(created_at)
        .fetch_one(&mut **tx)
        .await?;

        Ok(task)
    }

    /// Persist a generated checkpoint batch for a learning item.
    pub async fn insert_batch(
        tx: &mut Transaction<'_, Sqlite>,
        learning_item_id: i64,
        checkpoints: &[StageCheckpoint],
        created_at: NaiveDateTime,
    ) -> Result<Vec<ReviewTask>> {
        let mut tasks = Vec::with_capacity(checkpoints.len());
        for checkpoint in checkpoints {
            let task = Self::insert(
                tx,
                NewReviewTask {
                    learning_item_id,
                    stage_name: checkpoint.stage_name.clone(),
                    stage_offset_days: checkpoint.stage_offset_days,
                    due_date: checkpoint.due_date,
                    status: checkpoint.status,
                },
                created_at,
            )
            .await?;
            tasks.push(task);
        }
        Ok(tasks)
    }

    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<ReviewTask>> {
        let task = sqlx::query_as::<_, ReviewTask>(&format!(
            "SELECT {SELECT_COLUMNS} FROM review_tasks WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// All checkpoints of one item in schedule order.
    pub async fn list_for_item(pool: &SqlitePool, learning_item_id: i64) -> Result<Vec<ReviewTask>> {
        let tasks = sqlx::query_as::<_, ReviewTask>(&format!(
            "SELECT {SELECT_COLUMNS} FROM review_tasks WHERE learning_item_id = ?1 ORDER BY stage_offset_days ASC"
        ))
        .bind(learning_item_id)
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }

    /// Promote every `Pending` task whose due date has arrived.
    ///
    /// Idempotent bulk form of the `Pending → Ready` transition: the
    /// predicate excludes already-promoted rows, so concurrent sweeps
    /// cannot double-apply. Returns the number of promoted tasks.
    pub async fn promote_due(pool: &SqlitePool, as_of: NaiveDate) -> Result<u64> {
        let result = sqlx::query(
            "UPDATE review_tasks SET status = ?1 WHERE status = ?2 AND due_date <= ?3",
        )
        .bind(ReviewTaskState::Ready.to_string())
        .bind(ReviewTaskState::Pending.to_string())
        .bind(as_of)
        .execute(pool)
        .await?;

        let promoted = result.rows_affected();
        if promoted > 0 {
            debug!(promoted, as_of = %as_of, "promoted due review tasks");
        }
        Ok(promoted)
    }

    /// All `Ready` tasks, due date ascending.
    pub async fn list_ready(pool: &SqlitePool) -> Result<Vec<ReviewTask>> {
        let tasks = sqlx::query_as::<_, ReviewTask>(&format!(
            "SELECT {SELECT_COLUMNS} FROM review_tasks WHERE status = ?1 ORDER BY due_date ASC, id ASC"
        ))
        .bind(ReviewTaskState::Ready.to_string())
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }

    /// Complete a review task.
    ///
    /// One transaction: load, validate against the state machine, set
    /// `Completed` plus the completion timestamp, and — when the task sits
    /// on the yearly tail — insert the next yearly checkpoint. Completing a
    /// task twice fails with [`RecallError::InvalidState`] and leaves the
    /// record untouched.
    pub async fn complete(
        pool: &SqlitePool,
        schedule: &ReviewSchedule,
        id: i64,
    ) -> Result<ReviewTask> {
        let mut tx = pool.begin().await?;

        let task = sqlx::query_as::<_, ReviewTask>(&format!(
            "SELECT {SELECT_COLUMNS} FROM review_tasks WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(RecallError::NotFound("Review task"))?;

        let target = next_state(task.state()?, ReviewTaskEvent::Complete)?;
        let completed_at = Utc::now().naive_utc();

        sqlx::query("UPDATE review_tasks SET status = ?1, completed_at = ?2 WHERE id = ?3")
            .bind(target.to_string())
            .bind(completed_at)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if ReviewSchedule::is_yearly(task.stage_offset_days) {
            let next = schedule.next_yearly_checkpoint(task.stage_offset_days, task.due_date);
            sqlx::query(
                r#"
                INSERT INTO review_tasks
                    (learning_item_id, stage_name, stage_offset_days, due_date, status, created_at)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                ON CONFLICT (learning_item_id, stage_offset_days) DO NOTHING
                "#,
            )
            .bind(task.learning_item_id)
            .bind(&next.stage_name)
            .bind(next.stage_offset_days)
            .bind(next.due_date)
            .bind(next.status.to_string())
            .bind(completed_at)
            .execute(&mut *tx)
            .await?;

            info!(
                task_id = id,
                learning_item_id = task.learning_item_id,
                next_offset_days = next.stage_offset_days,
                "yearly checkpoint completed, tail extended"
            );
        }

        tx.commit().await?;

        Ok(ReviewTask {
            status: target.to_string(),
            completed_at: Some(completed_at),
            ..task
        })
    }

    /// Revert a completion.
    ///
    /// Resets the task to `Ready` and clears the completion timestamp
    /// regardless of its current state; un-completing a never-completed task
    /// is a harmless reset. A yearly successor spawned by the completion is
    /// not retracted.
    pub async fn uncomplete(pool: &SqlitePool, id: i64) -> Result<ReviewTask> {
        let mut tx = pool.begin().await?;

        let task = sqlx::query_as::<_, ReviewTask>(&format!(
            "SELECT {SELECT_COLUMNS} FROM review_tasks WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(RecallError::NotFound("Review task"))?;

        let target = next_state(task.state()?, ReviewTaskEvent::Uncomplete)?;

        sqlx::query("UPDATE review_tasks SET status = ?1, completed_at = NULL WHERE id = ?2")
            .bind(target.to_string())
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(ReviewTask {
            status: target.to_string(),
            completed_at: None,
            ..task
        })
    }
}
