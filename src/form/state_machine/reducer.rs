//! The form state record and its pure transition function.

use serde::Serialize;

use super::event::{FormEffect, FormEvent, Route};
use super::state::SubmissionState;
use super::transition::TransitionError;
use crate::models::{DraftAccount, FormErrors};
use crate::validation::validate_draft;

/// Everything the registration form knows, owned by a single controller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormState {
    #[serde(skip)]
    pub draft: DraftAccount,
    pub errors: FormErrors,
    pub submission: SubmissionState,
    /// Set once a successful submission asked to leave the form
    pub navigation: Option<Route>,
}

/// Result of applying an event: the next state and the effects to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    pub state: FormState,
    pub effects: Vec<FormEffect>,
}

impl Update {
    fn no_effects(state: FormState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    fn with_effect(mut self, effect: FormEffect) -> Self {
        self.effects.push(effect);
        self
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one event, returning the next state and any effects.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `Submit` arrives while a submission is in flight
    /// - a request outcome arrives while nothing is being submitted
    pub fn apply(mut self, event: FormEvent) -> Result<Update, TransitionError> {
        let event_type = event.event_type_name();

        match event {
            FormEvent::UpdateField { field, value } => {
                self.draft.set(field, value);
                Ok(Update::no_effects(self))
            }

            FormEvent::Submit => {
                if self.submission.is_submitting() {
                    return Err(TransitionError::SubmissionInFlight);
                }

                let field_errors = validate_draft(&self.draft);
                self.navigation = None;

                if !field_errors.is_empty() {
                    self.transition(event_type, SubmissionState::Idle)?;
                    self.errors = FormErrors::from_fields(field_errors);
                    return Ok(Update::no_effects(self));
                }

                self.transition(event_type, SubmissionState::Submitting)?;
                self.errors = FormErrors::default();
                let draft = self.draft.clone();
                Ok(Update::no_effects(self).with_effect(FormEffect::SendCreateAccount(draft)))
            }

            FormEvent::SubmissionSucceeded => {
                self.transition(event_type, SubmissionState::Succeeded)?;
                self.errors = FormErrors::default();
                self.draft.clear();
                self.navigation = Some(Route::Authentication);
                Ok(Update::no_effects(self).with_effect(FormEffect::Navigate(Route::Authentication)))
            }

            FormEvent::SubmissionFailed { reason } => {
                self.transition(
                    event_type,
                    SubmissionState::Failed {
                        reason: reason.clone(),
                    },
                )?;
                self.errors = FormErrors::general(reason);
                // The draft is discarded on failure too, same as on success.
                self.draft.clear();
                Ok(Update::no_effects(self))
            }
        }
    }

    /// Whether the submit control accepts input.
    pub fn submit_enabled(&self) -> bool {
        !self.submission.is_submitting()
    }

    fn transition(
        &mut self,
        event: &'static str,
        target: SubmissionState,
    ) -> Result<(), TransitionError> {
        if !self.submission.can_transition_to(&target) {
            return Err(TransitionError::InvalidTransition {
                from: self.submission.clone(),
                event,
                attempted: target,
            });
        }
        self.submission = target;
        Ok(())
    }
}
