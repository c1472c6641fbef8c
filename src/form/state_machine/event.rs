//! Events the form reacts to and effects it asks its driver to perform.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use std::fmt;

use crate::models::{DraftAccount, Field};

/// Inputs to the registration form.
#[derive(Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The operator changed one field
    UpdateField { field: Field, value: String },

    /// The operator pressed the submit control
    Submit,

    /// The account endpoint accepted the draft
    SubmissionSucceeded,

    /// The request failed; `reason` is shown in the general error slot
    SubmissionFailed { reason: String },
}

impl FormEvent {
    pub fn update(field: Field, value: impl Into<String>) -> Self {
        Self::UpdateField {
            field,
            value: value.into(),
        }
    }

    /// Returns a human-readable name for the event type.
    pub fn event_type_name(&self) -> &'static str {
        match self {
            Self::UpdateField { .. } => "update_field",
            Self::Submit => "submit",
            Self::SubmissionSucceeded => "submission_succeeded",
            Self::SubmissionFailed { .. } => "submission_failed",
        }
    }
}

// Field values may be passwords; only the field name is printed.
impl fmt::Debug for FormEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UpdateField { field, .. } => f
                .debug_struct("UpdateField")
                .field("field", field)
                .finish_non_exhaustive(),
            Self::Submit => write!(f, "Submit"),
            Self::SubmissionSucceeded => write!(f, "SubmissionSucceeded"),
            Self::SubmissionFailed { reason } => f
                .debug_struct("SubmissionFailed")
                .field("reason", reason)
                .finish(),
        }
    }
}

/// Views the form can send the operator to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum Route {
    /// The sign-in screen shown after an account is created
    Authentication,
}

/// Side effects requested by a state transition.
///
/// The reducer never performs I/O; the controller executes these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEffect {
    /// POST the captured draft to the account endpoint
    SendCreateAccount(DraftAccount),

    /// Move the operator to another view
    Navigate(Route),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_names() {
        assert_eq!(
            FormEvent::update(Field::Email, "jane@example.com").event_type_name(),
            "update_field"
        );
        assert_eq!(FormEvent::Submit.event_type_name(), "submit");
        assert_eq!(
            FormEvent::SubmissionSucceeded.event_type_name(),
            "submission_succeeded"
        );
        assert_eq!(
            FormEvent::SubmissionFailed {
                reason: "boom".to_string()
            }
            .event_type_name(),
            "submission_failed"
        );
    }

    #[test]
    fn test_debug_hides_field_values() {
        let event = FormEvent::update(Field::Password, "hunter22");
        let debug = format!("{:?}", event);
        assert!(debug.contains("Password"));
        assert!(!debug.contains("hunter22"));
    }
}
