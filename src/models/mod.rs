//! Data layer: each model owns its table's queries.
//!
//! Composed operations — item creation with its checkpoint batch, completion
//! with the conditional yearly spawn — run inside a single transaction so
//! concurrent requests cannot double-apply them.

pub mod learning_item;
pub mod review_task;
pub mod source;

pub use learning_item::{LearningItem, LearningItemWithTasks, NewLearningItem, UpdateLearningItem};
pub use review_task::{NewReviewTask, ReviewTask};
pub use source::{NewSource, Source, SourceWithItems, UpdateSource};
