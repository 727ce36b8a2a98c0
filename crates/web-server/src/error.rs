use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use core_types::{CoreError, ValidationErrors};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// One or more required fields were missing or blank.
    #[error("{0}")]
    Validation(#[from] ValidationErrors),
    /// The body passed validation but could not be decoded into its payload.
    #[error("{0}")]
    InvalidInput(#[from] CoreError),
    /// The body or path could not be extracted at all.
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    /// A store failure on an endpoint addressing a single row.
    #[error("{0}")]
    Database(#[from] database::DbError),
    /// A store failure while listing a whole table.
    #[error("{0}")]
    Internal(database::DbError),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Converts our custom `AppError` into an HTTP response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::Validation(errors) => {
                tracing::debug!(%errors, "Request failed validation.");
                (StatusCode::BAD_REQUEST, json!(errors))
            }
            AppError::InvalidInput(err) => (StatusCode::BAD_REQUEST, json!(err.to_string())),
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, json!(message)),
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, json!(message)),
            AppError::Database(db_err) => {
                tracing::error!(error = ?db_err, "Database error.");
                (StatusCode::BAD_REQUEST, json!(db_err.to_string()))
            }
            AppError::Internal(db_err) => {
                tracing::error!(error = ?db_err, "Database error while listing.");
                (StatusCode::INTERNAL_SERVER_ERROR, json!(db_err.to_string()))
            }
        };

        let body = Json(json!({ "error": error }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::validate;
    use serde_json::Map;

    #[test]
    fn validation_errors_are_client_errors() {
        let errors = validate(&Map::new(), &["email"]).unwrap_err();
        let response = AppError::from(errors).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn listing_failures_are_server_errors() {
        let err = database::DbError::ConnectionConfigError("gone".into());
        assert_eq!(
            AppError::Internal(err).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn single_row_failures_are_client_errors() {
        let err = database::DbError::ConstraintViolation("FOREIGN KEY constraint failed".into());
        assert_eq!(
            AppError::from(err).into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }
}
