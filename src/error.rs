// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::validation::FieldViolation;

/// HTTP API error with appropriate status codes and client-friendly messages.
/// Every failure a handler can produce flows through this type; the
/// `IntoResponse` impl below is the single point translating error kind to
/// HTTP status and body shape.
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    Validation(Vec<FieldViolation>),
    BadRequest(String),

    // 401 Unauthorized
    Unauthorized(String),

    // 404 Not Found
    NotFound(String),

    // 500 Internal Server Error
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::Validation(_) => 400,
            ApiError::BadRequest(_) => 400,
            ApiError::Unauthorized(_) => 401,
            ApiError::NotFound(_) => 404,
            ApiError::Internal(_) => 500,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> String {
        match self {
            ApiError::Validation(violations) => violations
                .iter()
                .map(|v| format!("{}: {}", v.field, v.message))
                .collect::<Vec<_>>()
                .join(", "),
            ApiError::BadRequest(msg) => msg.clone(),
            ApiError::Unauthorized(msg) => msg.clone(),
            ApiError::NotFound(msg) => msg.clone(),
            // Internal causes are logged server-side, never sent to clients
            ApiError::Internal(_) => "internal server error".to_string(),
        }
    }

    /// Convert to JSON response body: `{"errors": ...}` where validation
    /// failures carry the structured violation list and everything else a
    /// plain message string
    pub fn to_json(&self) -> Value {
        match self {
            ApiError::Validation(violations) => json!({ "errors": violations }),
            _ => json!({ "errors": self.message() }),
        }
    }
}

// Static constructor methods
impl ApiError {
    pub fn validation(violations: Vec<FieldViolation>) -> Self {
        ApiError::Validation(violations)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal(message.into())
    }
}

// Convert other error types to ApiError
impl From<crate::database::DatabaseError> for ApiError {
    fn from(err: crate::database::DatabaseError) -> Self {
        match err {
            crate::database::DatabaseError::NotFound(msg) => ApiError::not_found(msg),
            crate::database::DatabaseError::QueryError(msg) => {
                // Don't expose internal SQL errors to clients
                tracing::error!("Database query error: {}", msg);
                ApiError::internal(msg)
            }
            crate::database::DatabaseError::Sqlx(sqlx_err) => {
                tracing::error!("SQLx error: {}", sqlx_err);
                ApiError::internal(sqlx_err.to_string())
            }
            other => {
                tracing::error!("Database error: {}", other);
                ApiError::internal(other.to_string())
            }
        }
    }
}

impl From<crate::filter::error::FilterError> for ApiError {
    fn from(err: crate::filter::error::FilterError) -> Self {
        // Filters are assembled from validated input; a failure here is a bug
        tracing::error!("Filter construction error: {}", err);
        ApiError::internal(err.to_string())
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.to_json())).into_response()
    }
}
