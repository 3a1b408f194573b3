use serde::{Deserialize, Serialize};
use std::fmt;

/// Review task state definitions.
///
/// The database stores the exact display string ("Pending", "Ready",
/// "Completed"); `Display`/`FromStr` are the single source of truth for
/// that encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ReviewTaskState {
    /// Checkpoint exists but its due date has not yet arrived.
    #[default]
    Pending,
    /// Due date has arrived (or the checkpoint was born due); actionable.
    Ready,
    /// Review performed; terminal until explicitly reverted.
    Completed,
}

impl ReviewTaskState {
    /// Check if the user can act on a task in this state.
    pub fn is_actionable(&self) -> bool {
        matches!(self, Self::Ready)
    }

    /// Check if this is the terminal state.
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for ReviewTaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Ready => write!(f, "Ready"),
            Self::Completed => write!(f, "Completed"),
        }
    }
}

impl std::str::FromStr for ReviewTaskState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Ready" => Ok(Self::Ready),
            "Completed" => Ok(Self::Completed),
            _ => Err(format!("Invalid review task state: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_round_trips_through_from_str() {
        for state in [
            ReviewTaskState::Pending,
            ReviewTaskState::Ready,
            ReviewTaskState::Completed,
        ] {
            assert_eq!(state.to_string().parse::<ReviewTaskState>(), Ok(state));
        }
        assert!("done".parse::<ReviewTaskState>().is_err());
    }
}
