//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::analytics::validation::ValidationError;

/// Application-wide error type.
///
/// Each variant maps to a specific HTTP status code and error message.
///
/// # Error Categories
///
/// - **Database Errors**: Any sqlx::Error from the record store
/// - **Authentication Errors**: Invalid or missing API keys
/// - **Resource Errors**: Requested card not found
/// - **Validation Errors**: Card records that break the input contract,
///   including fields sent with the wrong JSON type
/// - **Request Errors**: Malformed query parameters or unreadable bodies
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (e.g., connection error, query error).
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// API key is missing, invalid, or inactive.
    ///
    /// Returns HTTP 401 Unauthorized.
    #[error("Invalid API key")]
    InvalidApiKey,

    /// Card does not exist or belongs to another user.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Credit card not found")]
    CardNotFound,

    /// One or more card records are missing required fields or carry bad values.
    ///
    /// Returns HTTP 422 Unprocessable Entity with every issue listed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The JSON body parsed but a field has the wrong type.
    ///
    /// Returns HTTP 422 with the same body shape as `Validation`.
    #[error("Card records do not match the expected shape")]
    MalformedRecords(String),

    /// Request parameters are invalid.
    ///
    /// Returns HTTP 400 Bad Request.
    /// The String contains details about what was invalid.
    #[error("Invalid request")]
    InvalidRequest(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(err) => AppError::MalformedRecords(err.body_text()),
            other => AppError::InvalidRequest(other.body_text()),
        }
    }
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
///
/// Validation errors add an `issues` array next to `message`.
///
/// # Status Code Mapping
///
/// - `InvalidApiKey` → 401 Unauthorized
/// - `CardNotFound` → 404 Not Found
/// - `Validation`, `MalformedRecords` → 422 Unprocessable Entity
/// - `InvalidRequest` → 400 Bad Request
/// - `Database` → 500 Internal Server Error (hides details from client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::InvalidApiKey => (
                StatusCode::UNAUTHORIZED,
                "invalid_api_key",
                self.to_string(),
            ),
            AppError::CardNotFound => (StatusCode::NOT_FOUND, "card_not_found", self.to_string()),
            AppError::InvalidRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, "invalid_request", msg.clone())
            }
            AppError::Database(ref err) => {
                tracing::error!("Database error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
            AppError::Validation(ref err) => {
                let body = Json(json!({
                    "error": {
                        "code": "validation_failed",
                        "message": err.to_string(),
                        "issues": err.issues,
                    }
                }));
                return (StatusCode::UNPROCESSABLE_ENTITY, body).into_response();
            }
            AppError::MalformedRecords(ref detail) => {
                let body = Json(json!({
                    "error": {
                        "code": "validation_failed",
                        "message": self.to_string(),
                        "issues": [{ "field": "body", "message": detail }],
                    }
                }));
                return (StatusCode::UNPROCESSABLE_ENTITY, body).into_response();
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::validation::ValidationIssue;

    #[test]
    fn status_codes_follow_the_error_kind() {
        assert_eq!(
            AppError::InvalidApiKey.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::CardNotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::InvalidRequest("bad as_of".to_string())
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Database(sqlx::Error::RowNotFound)
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn validation_errors_are_unprocessable() {
        let err = ValidationError {
            issues: vec![ValidationIssue {
                index: 0,
                field: "status",
                message: "status is required".to_string(),
            }],
        };

        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn mistyped_fields_share_the_validation_status() {
        let response = AppError::MalformedRecords(
            "records[0].credit_limit_cents: invalid type".to_string(),
        )
        .into_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
