//! Payload Validation
//!
//! Required-field checks run before a request is dispatched.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single rejected field
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Every field a payload failed on
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Error for a single missing field
    pub fn required(field: &str) -> Self {
        let mut errors = Self::new();
        errors.add(field, format!("The {field} field is required."));
        errors
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Names of the rejected fields, in rule order
    pub fn fields(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.field.as_str()).collect()
    }

    /// `Ok` when nothing was collected
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
        f.write_str(&messages.join(" "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Validator collaborator
///
/// Checks an outgoing payload against a set of required field names.
pub trait Validator: Send + Sync {
    fn validate(&self, payload: &Map<String, Value>, required: &[&str]) -> Result<(), ValidationErrors>;
}

/// Treats null, empty strings and empty arrays as missing
#[derive(Clone, Copy, Debug, Default)]
pub struct RequiredFields;

impl RequiredFields {
    fn is_present(value: Option<&Value>) -> bool {
        match value {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.trim().is_empty(),
            Some(Value::Array(items)) => !items.is_empty(),
            Some(_) => true,
        }
    }
}

impl Validator for RequiredFields {
    fn validate(&self, payload: &Map<String, Value>, required: &[&str]) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        for field in required {
            if !Self::is_present(payload.get(*field)) {
                errors.add(*field, format!("The {field} field is required."));
            }
        }
        errors.into_result()
    }
}
