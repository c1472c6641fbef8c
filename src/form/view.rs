//! Render model for the registration form.
//!
//! Front ends read everything they display from [`FormView`]; it never mutates state.

use super::state_machine::{FormState, SubmissionState};
use crate::models::Field;

pub const HEADING: &str = "Ouvrir un compte, vérification des coordonnées";
pub const SUBMIT_LABEL: &str = "Confirmer";
pub const SUBMITTING_LABEL: &str = "En cours...";
pub const SUCCESS_MESSAGE: &str = "Account created successfully!";

/// The inputs the form renders, in display order, with their labels.
pub const INPUTS: &[(Field, &str)] = &[
    (Field::FirstName, "First Name:"),
    (Field::LastName, "Last Name:"),
    (Field::NationalId, "Cin:"),
    (Field::Email, "Email:"),
    (Field::Address, "Adresse:"),
    (Field::PhoneNumber, "Tel:"),
    (Field::Password, "Mot de Pass:"),
    (Field::PasswordConfirmation, "Confirmer le Mot de Pass:"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: &'static str,
    pub enabled: bool,
}

/// Read-only projection of a [`FormState`].
#[derive(Debug, Clone, Copy)]
pub struct FormView<'a> {
    state: &'a FormState,
}

impl<'a> FormView<'a> {
    pub fn new(state: &'a FormState) -> Self {
        Self { state }
    }

    pub fn heading(&self) -> &'static str {
        HEADING
    }

    pub fn submit_button(&self) -> SubmitButton {
        if self.state.submission.is_submitting() {
            SubmitButton {
                label: SUBMITTING_LABEL,
                enabled: false,
            }
        } else {
            SubmitButton {
                label: SUBMIT_LABEL,
                enabled: true,
            }
        }
    }

    /// Inline message shown next to a field.
    pub fn field_error(&self, field: Field) -> Option<&'a str> {
        self.state.errors.fields.get(field)
    }

    /// Message not attributable to a single field.
    pub fn general_error(&self) -> Option<&'a str> {
        self.state.errors.general.as_deref()
    }

    pub fn success_message(&self) -> Option<&'static str> {
        matches!(self.state.submission, SubmissionState::Succeeded).then_some(SUCCESS_MESSAGE)
    }
}
