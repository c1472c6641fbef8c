use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use std::fmt;

use crate::error::{Error, Result};

/// The fields of the registration form.
///
/// The string form of each variant is the key used on the wire and in error maps.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
    EnumString, EnumIter,
)]
pub enum Field {
    #[serde(rename = "firstName")]
    #[strum(serialize = "firstName")]
    FirstName,
    #[serde(rename = "lastName")]
    #[strum(serialize = "lastName")]
    LastName,
    #[serde(rename = "cin")]
    #[strum(serialize = "cin")]
    NationalId,
    #[serde(rename = "gender")]
    #[strum(serialize = "gender")]
    Gender,
    #[serde(rename = "address")]
    #[strum(serialize = "address")]
    Address,
    #[serde(rename = "country")]
    #[strum(serialize = "country")]
    Country,
    #[serde(rename = "email")]
    #[strum(serialize = "email")]
    Email,
    #[serde(rename = "phoneNumber")]
    #[strum(serialize = "phoneNumber")]
    PhoneNumber,
    #[serde(rename = "password")]
    #[strum(serialize = "password")]
    Password,
    #[serde(rename = "Cpassword")]
    #[strum(serialize = "Cpassword")]
    PasswordConfirmation,
}

impl Field {
    /// Parses a wire key (`"cin"`, `"Cpassword"`, ...) into a field.
    pub fn from_key(key: &str) -> Result<Self> {
        key.parse()
            .map_err(|_| Error::UnknownField(key.to_string()))
    }
}

/// The mutable draft of a new-account submission.
///
/// Serializes to the JSON body expected by the account endpoint.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftAccount {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(rename = "cin")]
    pub national_id: String,
    pub gender: String,
    pub address: String,
    pub country: String,
    pub email: String,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    pub password: String,
    #[serde(rename = "Cpassword")]
    pub password_confirmation: String,
}

impl DraftAccount {
    /// Creates an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current value of a field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::NationalId => &self.national_id,
            Field::Gender => &self.gender,
            Field::Address => &self.address,
            Field::Country => &self.country,
            Field::Email => &self.email,
            Field::PhoneNumber => &self.phone_number,
            Field::Password => &self.password,
            Field::PasswordConfirmation => &self.password_confirmation,
        }
    }

    /// Replaces a single field, leaving every other field untouched.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::NationalId => &mut self.national_id,
            Field::Gender => &mut self.gender,
            Field::Address => &mut self.address,
            Field::Country => &mut self.country,
            Field::Email => &mut self.email,
            Field::PhoneNumber => &mut self.phone_number,
            Field::Password => &mut self.password,
            Field::PasswordConfirmation => &mut self.password_confirmation,
        };
        *slot = value.into();
    }

    /// Builder-style variant of [`DraftAccount::set`].
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Resets every field to empty.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

// Password fields are redacted so drafts can be logged safely.
impl fmt::Debug for DraftAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |value: &str| if value.is_empty() { "" } else { "[REDACTED]" };
        f.debug_struct("DraftAccount")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("national_id", &self.national_id)
            .field("gender", &self.gender)
            .field("address", &self.address)
            .field("country", &self.country)
            .field("email", &self.email)
            .field("phone_number", &self.phone_number)
            .field("password", &redact(&self.password))
            .field("password_confirmation", &redact(&self.password_confirmation))
            .finish()
    }
}
