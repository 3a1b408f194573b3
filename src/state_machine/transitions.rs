use crate::error::{RecallError, Result};

use super::events::ReviewTaskEvent;
use super::states::ReviewTaskState;

/// Determine the target state for an event applied to the current state.
///
/// The full lifecycle:
///
/// - `Promote` moves `Pending` to `Ready` and leaves `Ready` alone, so the
///   promotion sweep can run repeatedly from any concurrent reader.
/// - `Complete` is valid from any non-`Completed` state; completing twice is
///   an [`RecallError::InvalidState`] rejection, never a silent overwrite of
///   the completion timestamp.
/// - `Uncomplete` unconditionally resets to `Ready`, matching the permissive
///   undo behavior: reverting a never-completed task is a no-op reset, not
///   an error.
pub fn next_state(current: ReviewTaskState, event: ReviewTaskEvent) -> Result<ReviewTaskState> {
    match (current, event) {
        (ReviewTaskState::Pending, ReviewTaskEvent::Promote) => Ok(ReviewTaskState::Ready),
        (ReviewTaskState::Ready, ReviewTaskEvent::Promote) => Ok(ReviewTaskState::Ready),

        (ReviewTaskState::Pending | ReviewTaskState::Ready, ReviewTaskEvent::Complete) => {
            Ok(ReviewTaskState::Completed)
        }
        (ReviewTaskState::Completed, ReviewTaskEvent::Complete) => Err(
            RecallError::invalid_state("Task is already completed"),
        ),

        (_, ReviewTaskEvent::Uncomplete) => Ok(ReviewTaskState::Ready),

        (from, event) => Err(RecallError::invalid_state(format!(
            "Cannot apply {} to a {from} task",
            event.event_type()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_promote_is_idempotent() {
        assert_eq!(
            next_state(ReviewTaskState::Pending, ReviewTaskEvent::Promote).unwrap(),
            ReviewTaskState::Ready
        );
        assert_eq!(
            next_state(ReviewTaskState::Ready, ReviewTaskEvent::Promote).unwrap(),
            ReviewTaskState::Ready
        );
    }

    #[test]
    fn test_complete_from_pending_and_ready() {
        assert_eq!(
            next_state(ReviewTaskState::Ready, ReviewTaskEvent::Complete).unwrap(),
            ReviewTaskState::Completed
        );
        assert_eq!(
            next_state(ReviewTaskState::Pending, ReviewTaskEvent::Complete).unwrap(),
            ReviewTaskState::Completed
        );
    }

    #[test]
    fn test_double_complete_is_rejected() {
        let err = next_state(ReviewTaskState::Completed, ReviewTaskEvent::Complete).unwrap_err();
        assert!(matches!(err, RecallError::InvalidState(_)));
        assert_eq!(err.to_string(), "Task is already completed");
    }

    #[test]
    fn test_uncomplete_resets_from_any_state() {
        for state in [
            ReviewTaskState::Pending,
            ReviewTaskState::Ready,
            ReviewTaskState::Completed,
        ] {
            assert_eq!(
                next_state(state, ReviewTaskEvent::Uncomplete).unwrap(),
                ReviewTaskState::Ready
            );
        }
    }

    #[test]
    fn test_promoting_a_completed_task_is_rejected() {
        assert!(next_state(ReviewTaskState::Completed, ReviewTaskEvent::Promote).is_err());
    }
}
