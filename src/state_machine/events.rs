use serde::{Deserialize, Serialize};

/// Events that can trigger review task state transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewTaskEvent {
    /// Due date has arrived; part of the idempotent promotion sweep.
    Promote,
    /// User performed the review.
    Complete,
    /// Manual reversal of a mistaken completion.
    Uncomplete,
}

impl ReviewTaskEvent {
    /// String representation of the event for logging.
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Promote => "promote",
            Self::Complete => "complete",
            Self::Uncomplete => "uncomplete",
        }
    }
}
