use uuid::Uuid;

use std::collections::VecDeque;

use super::state_machine::{
    FormEffect, FormEvent, FormMachine, FormState, SubmissionState, TransitionLog,
};
use super::view::FormView;
use crate::config::NavigationConfig;
use crate::error::Result;
use crate::models::{Field, ValidationErrors};
use crate::services::{AccountApi, Navigator};

/// What a call to [`RegistrationController::submit`] ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent
    Rejected(ValidationErrors),
    /// The account was created and the operator was sent to the sign-in view
    Created,
    /// The request failed; `reason` is shown as the general error
    Failed { reason: String },
}

/// The registration form controller.
///
/// Owns the form state exclusively and performs the effects the state machine asks
/// for: one POST through the [`AccountApi`] per valid submission and one navigation
/// on success.
pub struct RegistrationController<A, N> {
    machine: FormMachine,
    api: A,
    navigator: N,
    navigation: NavigationConfig,
}

impl<A, N> RegistrationController<A, N>
where
    A: AccountApi,
    N: Navigator,
{
    pub fn new(api: A, navigator: N, navigation: NavigationConfig) -> Self {
        Self {
            machine: FormMachine::default(),
            api,
            navigator,
            navigation,
        }
    }

    pub fn state(&self) -> &FormState {
        self.machine.state()
    }

    pub fn view(&self) -> FormView<'_> {
        FormView::new(self.machine.state())
    }

    pub fn transition_log(&self) -> &VecDeque<TransitionLog> {
        self.machine.event_log()
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Replaces one field of the draft. Nothing is validated here.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) -> Result<()> {
        tracing::debug!(%field, "Field updated");
        self.machine.handle_event(FormEvent::update(field, value))?;
        Ok(())
    }

    /// Same as [`Self::update_field`], addressed by wire key (`"cin"`, `"Cpassword"`, ...).
    pub fn update_field_by_key(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        let field = Field::from_key(key)?;
        self.update_field(field, value)
    }

    /// Validates the draft and, if it is valid, sends it to the account endpoint.
    ///
    /// Request failures are not returned as errors: they end up in the general error
    /// slot and in [`SubmitOutcome::Failed`]. The draft is cleared after every attempt
    /// that reached the network. Dropping the returned future while the request is in
    /// flight settles the form as Failed with [`INTERRUPTED_REASON`].
    ///
    /// # Errors
    ///
    /// Only a rejected state transition is returned as an error.
    pub async fn submit(&mut self) -> Result<SubmitOutcome> {
        let attempt_id = Uuid::now_v7();
        let effects = self.machine.handle_event(FormEvent::Submit)?;

        if effects.is_empty() {
            let errors = self.state().errors.fields.clone();
            tracing::info!(%attempt_id, invalid_fields = errors.len(), "Registration rejected by validation");
            return Ok(SubmitOutcome::Rejected(errors));
        }

        tracing::info!(%attempt_id, "Submitting registration");
        self.run_effects(attempt_id, effects).await?;

        match &self.state().submission {
            SubmissionState::Succeeded => Ok(SubmitOutcome::Created),
            SubmissionState::Failed { reason } => Ok(SubmitOutcome::Failed {
                reason: reason.clone(),
            }),
            // run_effects only returns after the request settled
            other => Ok(SubmitOutcome::Failed {
                reason: format!("Submission ended in state {other}"),
            }),
        }
    }

    async fn run_effects(&mut self, attempt_id: Uuid, effects: Vec<FormEffect>) -> Result<()> {
        let mut pending: VecDeque<FormEffect> = effects.into();

        while let Some(effect) = pending.pop_front() {
            match effect {
                FormEffect::SendCreateAccount(draft) => {
                    let attempt = InFlightAttempt::new(&mut self.machine, attempt_id);
                    let event = match self.api.create_account(&draft).await {
                        Ok(()) => {
                            tracing::info!(%attempt_id, "Account created");
                            FormEvent::SubmissionSucceeded
                        }
                        Err(e) => {
                            tracing::warn!(%attempt_id, error = %e, "Account creation failed");
                            FormEvent::SubmissionFailed {
                                reason: e.to_string(),
                            }
                        }
                    };
                    pending.extend(attempt.settle(event)?);
                }
                FormEffect::Navigate(route) => {
                    self.navigator.navigate(self.navigation.path_for(route));
                }
            }
        }

        Ok(())
    }
}

/// Reason shown when a submission future is dropped before the server answered.
pub const INTERRUPTED_REASON: &str = "Submission was interrupted before the server answered";

/// A request that left Submitting but has not produced an outcome yet.
///
/// If it is dropped unsettled (the `submit` future was cancelled) the form is moved
/// to Failed so the submit control becomes usable again.
struct InFlightAttempt<'a> {
    machine: &'a mut FormMachine,
    attempt_id: Uuid,
    settled: bool,
}

impl<'a> InFlightAttempt<'a> {
    fn new(machine: &'a mut FormMachine, attempt_id: Uuid) -> Self {
        Self {
            machine,
            attempt_id,
            settled: false,
        }
    }

    fn settle(mut self, event: FormEvent) -> Result<Vec<FormEffect>> {
        self.settled = true;
        Ok(self.machine.handle_event(event)?)
    }
}

impl Drop for InFlightAttempt<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        tracing::warn!(attempt_id = %self.attempt_id, "Submission dropped while in flight");
        let event = FormEvent::SubmissionFailed {
            reason: INTERRUPTED_REASON.to_string(),
        };
        if let Err(e) = self.machine.handle_event(event) {
            tracing::error!(attempt_id = %self.attempt_id, error = %e, "Could not release interrupted submission");
        }
    }
}
