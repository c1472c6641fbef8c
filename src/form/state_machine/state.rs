//! Submission state of the registration form.

use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Where the form is in its submission lifecycle.
///
/// # State Transitions
///
/// - Idle, Succeeded, Failed → Submitting (valid submit)
/// - Idle, Succeeded, Failed → Idle (submit rejected by validation)
/// - Submitting → Succeeded, Failed
///
/// Nothing leaves Submitting except the outcome of the request, so a second
/// submission can never start while one is in flight.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
pub enum SubmissionState {
    /// Waiting for the operator to submit
    #[default]
    Idle,

    /// The account-creation request is in flight; the submit control is disabled
    Submitting,

    /// The account was created
    Succeeded,

    /// The request failed; `reason` is what the general error slot shows
    Failed { reason: String },
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Checks if a transition from this state to the target state is allowed.
    ///
    /// ```rust
    /// use registration_form::form::state_machine::SubmissionState;
    ///
    /// assert!(SubmissionState::Idle.can_transition_to(&SubmissionState::Submitting));
    /// assert!(SubmissionState::Submitting.can_transition_to(&SubmissionState::Succeeded));
    /// assert!(!SubmissionState::Submitting.can_transition_to(&SubmissionState::Submitting));
    /// assert!(!SubmissionState::Idle.can_transition_to(&SubmissionState::Succeeded));
    /// ```
    pub fn can_transition_to(&self, target: &Self) -> bool {
        match (self, target) {
            // Submitting only resolves to an outcome
            (Self::Submitting, Self::Succeeded) => true,
            (Self::Submitting, Self::Failed { .. }) => true,
            (Self::Submitting, _) => false,

            // Everything else may start a new attempt or fall back to idle
            (_, Self::Submitting) => true,
            (_, Self::Idle) => true,

            _ => false,
        }
    }
}
