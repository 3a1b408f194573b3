use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::RecallConfig;
use crate::scheduler::ReviewSchedule;

/// Shared application state for all handlers.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub schedule: Arc<ReviewSchedule>,
    pub config: Arc<RecallConfig>,
}

impl AppState {
    pub fn new(pool: SqlitePool, schedule: ReviewSchedule, config: RecallConfig) -> Self {
        Self {
            pool,
            schedule: Arc::new(schedule),
            config: Arc::new(config),
        }
    }
}
