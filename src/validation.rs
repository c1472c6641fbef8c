//! Declarative validation rules for the registration form.
//!
//! Each validated field has exactly one [`FieldRule`]. A rule first checks presence
//! (when required) and only then its format check, so a missing value always yields
//! the "required" message rather than the format message. The table is the unit to
//! review; [`validate_draft`] only walks it.

use regex::Regex;

use std::sync::LazyLock;

use crate::models::{DraftAccount, Field, ValidationErrors};

/// Minimum password length, counted in UTF-16 code units like a browser's `String.length`.
pub const MIN_PASSWORD_LENGTH: usize = 8;

static LETTERS: LazyLock<Regex> = LazyLock::new(|| compile(r"^[A-Za-z]+$"));
static ALPHANUMERIC: LazyLock<Regex> = LazyLock::new(|| compile(r"^[A-Za-z0-9]+$"));
static EMAIL: LazyLock<Regex> = LazyLock::new(|| compile(r"\S+@\S+\.\S+"));
static ADDRESS: LazyLock<Regex> = LazyLock::new(|| compile(r"^[A-Za-z0-9 ,:]+$"));
static PHONE_NUMBER: LazyLock<Regex> = LazyLock::new(|| compile(r"^[0-9]{10}$"));

fn compile(pattern: &str) -> Regex {
    // Patterns are compile-time literals covered by the tests below.
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid validation pattern {pattern}: {e}"))
}

/// The format check applied once a value is present.
#[derive(Debug, Clone, Copy)]
pub enum Check {
    /// The value must match the regular expression.
    Pattern(&'static LazyLock<Regex>),
    /// The value must be at least this many UTF-16 code units long.
    MinLength(usize),
    /// The value must equal the value of another field.
    Matches(Field),
}

impl Check {
    fn passes(&self, value: &str, draft: &DraftAccount) -> bool {
        match self {
            Self::Pattern(regex) => regex.is_match(value),
            Self::MinLength(min) => value.encode_utf16().count() >= *min,
            Self::Matches(other) => value == draft.get(*other),
        }
    }
}

/// One row of the rule table.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: Field,
    /// Message for an empty value; `None` means the field may be empty.
    pub required: Option<&'static str>,
    pub check: Check,
    /// Message when the value is present but fails `check`.
    pub invalid: &'static str,
}

impl FieldRule {
    /// Evaluates the rule, returning the message of the first failing step.
    pub fn evaluate(&self, draft: &DraftAccount) -> Option<&'static str> {
        let value = draft.get(self.field);

        if value.is_empty() {
            if let Some(message) = self.required {
                return Some(message);
            }
        }

        (!self.check.passes(value, draft)).then_some(self.invalid)
    }
}

/// The registration rule table, evaluated top to bottom.
///
/// `gender` and `country` have no rule and are accepted as entered.
pub static RULES: &[FieldRule] = &[
    FieldRule {
        field: Field::FirstName,
        required: Some("First Name is required"),
        check: Check::Pattern(&LETTERS),
        invalid: "First Name must contain only letters",
    },
    FieldRule {
        field: Field::LastName,
        required: Some("Last Name is required"),
        check: Check::Pattern(&LETTERS),
        invalid: "Last Name must contain only letters",
    },
    FieldRule {
        field: Field::NationalId,
        required: Some("CIN is required"),
        check: Check::Pattern(&ALPHANUMERIC),
        invalid: "CIN must contain only letters and digits",
    },
    FieldRule {
        field: Field::Email,
        required: Some("Email is required"),
        check: Check::Pattern(&EMAIL),
        invalid: "Email address is invalid",
    },
    FieldRule {
        field: Field::Address,
        required: Some("Address is required"),
        check: Check::Pattern(&ADDRESS),
        invalid: "Address must contain only letters, digits, spaces, commas, and colons",
    },
    FieldRule {
        field: Field::PhoneNumber,
        required: Some("Phone Number is required"),
        check: Check::Pattern(&PHONE_NUMBER),
        invalid: "Phone Number must be 10 digits",
    },
    FieldRule {
        field: Field::Password,
        required: Some("Password is required"),
        check: Check::MinLength(MIN_PASSWORD_LENGTH),
        invalid: "Password must be at least 8 characters",
    },
    FieldRule {
        field: Field::PasswordConfirmation,
        required: None,
        check: Check::Matches(Field::Password),
        invalid: "Passwords do not match",
    },
];

/// Validates a draft against [`RULES`].
///
/// # Returns
/// * An empty [`ValidationErrors`] if the draft may be submitted
/// * One message per failing field otherwise
pub fn validate_draft(draft: &DraftAccount) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for rule in RULES {
        if let Some(message) = rule.evaluate(draft) {
            errors.add(rule.field, message);
        }
    }
    errors
}

/// Returns the rule for a field, if the field is validated at all.
pub fn rule_for(field: Field) -> Option<&'static FieldRule> {
    RULES.iter().find(|rule| rule.field == field)
}
