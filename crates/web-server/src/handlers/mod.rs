//! Resource controllers. Each handler validates (for writes), calls exactly
//! one repository operation and wraps the outcome in an envelope.

pub mod candidates;
pub mod parties;
pub mod voters;

use crate::error::AppError;
use core_types::{decode, validate};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// A request body taken as a loose JSON object, checked field by field
/// before it is trusted.
pub type Fields = Map<String, Value>;

/// Validates `body` against `required`, then decodes it into the typed payload.
fn checked<T: DeserializeOwned>(body: &Fields, required: &[&str]) -> Result<T, AppError> {
    validate(body, required)?;
    Ok(decode(body)?)
}
