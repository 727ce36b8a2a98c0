//! The uniform success bodies returned by every endpoint. Failures use the
//! `{ "error": ... }` body produced by [`crate::error::AppError`].

use database::{InsertOutcome, WriteOutcome};
use serde::Serialize;

const SUCCESS: &str = "success";

/// `{ message, data }` for reads.
#[derive(Debug, Serialize)]
pub struct DataEnvelope<T> {
    pub message: &'static str,
    pub data: T,
}

impl<T> DataEnvelope<T> {
    pub fn success(data: T) -> Self {
        Self { message: SUCCESS, data }
    }
}

/// `{ message, data, id }` for creates; `data` echoes the submitted body.
#[derive(Debug, Serialize)]
pub struct CreatedEnvelope<T> {
    pub message: &'static str,
    pub data: T,
    pub id: i64,
}

impl<T> CreatedEnvelope<T> {
    pub fn new(data: T, outcome: InsertOutcome) -> Self {
        Self {
            message: SUCCESS,
            data,
            id: outcome.generated_id,
        }
    }
}

/// `{ message, data, changes }` for updates; `changes` is the number of rows touched.
#[derive(Debug, Serialize)]
pub struct UpdatedEnvelope<T> {
    pub message: &'static str,
    pub data: T,
    pub changes: u64,
}

impl<T> UpdatedEnvelope<T> {
    pub fn new(data: T, outcome: WriteOutcome) -> Self {
        Self {
            message: SUCCESS,
            data,
            changes: outcome.rows_affected,
        }
    }
}

/// `{ message, changes }` for deletes.
#[derive(Debug, Serialize)]
pub struct DeletedEnvelope {
    pub message: &'static str,
    pub changes: u64,
}

impl DeletedEnvelope {
    pub fn new(message: &'static str, outcome: WriteOutcome) -> Self {
        Self {
            message,
            changes: outcome.rows_affected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn created_envelope_carries_generated_id() {
        let envelope = CreatedEnvelope::new(json!({ "email": "a@b.c" }), InsertOutcome { generated_id: 7 });
        assert_eq!(
            serde_json::to_value(envelope).unwrap(),
            json!({ "message": "success", "data": { "email": "a@b.c" }, "id": 7 })
        );
    }

    #[test]
    fn deleted_envelope_reports_changes() {
        let envelope = DeletedEnvelope::new("deleted", WriteOutcome { rows_affected: 0 });
        assert_eq!(
            serde_json::to_value(envelope).unwrap(),
            json!({ "message": "deleted", "changes": 0 })
        );
    }
}
