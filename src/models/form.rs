use serde::{Deserialize, Serialize};

use std::collections::BTreeMap;

use super::draft::Field;

/// Field-level validation messages, one per failing field.
///
/// An empty map means the draft is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    fields: BTreeMap<Field, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message for a field. The first message recorded for a field wins.
    pub fn add(&mut self, field: Field, message: impl Into<String>) {
        self.fields.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.fields.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.fields.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// Everything the form shows as an error: inline field messages plus one general slot
/// for submission failures that cannot be attributed to a field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormErrors {
    pub fields: ValidationErrors,
    pub general: Option<String>,
}

impl FormErrors {
    pub fn from_fields(fields: ValidationErrors) -> Self {
        Self {
            fields,
            general: None,
        }
    }

    pub fn general(message: impl Into<String>) -> Self {
        Self {
            fields: ValidationErrors::new(),
            general: Some(message.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.general.is_none()
    }
}
