//! # Recall Core
//!
//! Spaced-repetition review scheduler built on a fixed forgetting-curve
//! schedule. A *source* (a book, a course) is broken into *learning items*;
//! creating an item generates its full sequence of review checkpoints, and
//! completing the yearly checkpoint extends the tail by one more year,
//! indefinitely.
//!
//! ## Architecture
//!
//! Two pure pieces form the core:
//!
//! - [`scheduler`] — the schedule table and date projection: initial
//!   checkpoint generation plus the yearly-extension rule.
//! - [`state_machine`] — the review-task lifecycle
//!   (`Pending → Ready → Completed`, with undo) as a pure transition table.
//!
//! Around them sit the collaborators:
//!
//! - [`models`] — sqlx data layer; composed operations (item creation with
//!   its checkpoint batch, completion with the conditional yearly spawn)
//!   run as single transactions.
//! - [`database`] — pool construction and embedded migrations.
//! - [`web`] — axum HTTP surface mapping engine outcomes to status codes.
//! - [`config`] / [`error`] — environment configuration and the crate-wide
//!   error taxonomy.
//!
//! ## Promotion sweep
//!
//! There is no background timer. `Pending` checkpoints whose due date has
//! arrived are promoted to `Ready` by an explicit idempotent bulk update
//! that every "today's tasks" read performs before selecting.

pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod models;
pub mod scheduler;
pub mod state_machine;
pub mod web;

pub use config::RecallConfig;
pub use error::{RecallError, Result};
pub use scheduler::{ReviewSchedule, StageCheckpoint};
pub use state_machine::{next_state, ReviewTaskEvent, ReviewTaskState};
