//! Transition errors and the transition log record.

use chrono::{DateTime, Utc};

use std::fmt;

use super::state::SubmissionState;

/// Errors that can occur during state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    /// Submit was pressed while a request is still in flight.
    SubmissionInFlight,

    /// The event does not apply to the current state
    /// (e.g. a request outcome arriving while nothing was submitted).
    InvalidTransition {
        from: SubmissionState,
        event: &'static str,
        attempted: SubmissionState,
    },
}

impl fmt::Display for TransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SubmissionInFlight => {
                write!(f, "A submission is already in progress")
            }
            Self::InvalidTransition {
                from,
                event,
                attempted,
            } => write!(
                f,
                "Invalid transition from {} to {} on event {}",
                from, attempted, event
            ),
        }
    }
}

impl std::error::Error for TransitionError {}

/// A log entry recording a state transition.
///
/// Only the event name is kept so field values never end up in the log.
#[derive(Debug, Clone)]
pub struct TransitionLog {
    pub from: SubmissionState,
    pub event: &'static str,
    pub to: SubmissionState,
    pub timestamp: DateTime<Utc>,
}

impl TransitionLog {
    /// Creates a new transition log entry.
    pub fn new(from: SubmissionState, event: &'static str, to: SubmissionState) -> Self {
        Self {
            from,
            event,
            to,
            timestamp: Utc::now(),
        }
    }

    pub fn state_changed(&self) -> bool {
        self.from != self.to
    }
}
