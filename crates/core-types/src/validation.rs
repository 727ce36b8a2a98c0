//! Required-field checks applied to request bodies before anything touches
//! the store.
//!
//! The checks are deliberately shallow: a field is either absent, an empty
//! string, or acceptable. Type and format checks happen when the body is
//! decoded into its typed payload (see [`crate::payloads::decode`]).

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// A single failed requirement.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The field was not present in the body at all.
    #[error("No {0} specified.")]
    MissingField(String),
    /// The field was a string containing nothing but whitespace.
    #[error("{0} must not be empty.")]
    EmptyValue(String),
}

impl FieldError {
    pub fn field(&self) -> &str {
        match self {
            FieldError::MissingField(field) | FieldError::EmptyValue(field) => field,
        }
    }
}

impl Serialize for FieldError {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Every requirement a body failed, in the order the fields were requested.
/// Never empty.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
#[error("{}", self.messages().join(" "))]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Human-readable descriptions, one per failed field.
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

/// Checks that every field in `required` is present in `record` and, when it
/// is a string, not blank.
///
/// A JSON `null` counts as present; it is how a client clears a nullable
/// column such as a candidate's party.
pub fn validate(record: &Map<String, Value>, required: &[&str]) -> Result<(), ValidationErrors> {
    let errors: Vec<FieldError> = required
        .iter()
        .filter_map(|&field| match record.get(field) {
            None => Some(FieldError::MissingField(field.to_string())),
            Some(Value::String(text)) if text.trim().is_empty() => {
                Some(FieldError::EmptyValue(field.to_string()))
            }
            Some(_) => None,
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}
