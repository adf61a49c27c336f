//! # REST API Errors
//!
//! Error types for the REST API module and their HTTP status mapping.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::observability::Event;
use crate::patch::NothingToUpdate;
use crate::store::StoreError;
use crate::validation::{FieldViolation, ValidationError};

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

/// REST API errors
#[derive(Debug, Error)]
pub enum RestError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Body is not valid JSON for the expected shape
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Invalid query parameter
    #[error("Invalid query parameter: {0}")]
    InvalidQueryParam(String),

    /// Path id is not an integer
    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),

    /// Payload violates entity rules
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Update payload carried no field
    #[error("Nothing to update")]
    NothingToUpdate,

    /// Target id does not exist
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Store rejected a duplicate or an in-use row
    #[error("{0}")]
    Conflict(String),

    /// Foreign key points at a missing row
    #[error("{0}")]
    InvalidReference(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Details are logged, never returned
    #[error("Internal server error")]
    Internal,
}

impl RestError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            RestError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            RestError::InvalidQueryParam(_) => StatusCode::BAD_REQUEST,
            RestError::InvalidPath(_) => StatusCode::BAD_REQUEST,
            RestError::Validation(_) => StatusCode::BAD_REQUEST,
            RestError::NothingToUpdate => StatusCode::BAD_REQUEST,

            // 404 Not Found
            RestError::NotFound(_) => StatusCode::NOT_FOUND,

            // 409 Conflict
            RestError::Conflict(_) => StatusCode::CONFLICT,

            // 422 Unprocessable Entity
            RestError::InvalidReference(_) => StatusCode::UNPROCESSABLE_ENTITY,

            // 500 Internal Server Error
            RestError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<NothingToUpdate> for RestError {
    fn from(_: NothingToUpdate) -> Self {
        RestError::NothingToUpdate
    }
}

/// Unclassified store failures end here: full detail goes to the log, the
/// caller gets a generic 500.
impl From<StoreError> for RestError {
    fn from(err: StoreError) -> Self {
        tracing::error!(event = %Event::StoreFailure, error = %err);
        RestError::Internal
    }
}

impl From<JsonRejection> for RestError {
    fn from(rejection: JsonRejection) -> Self {
        RestError::InvalidBody(rejection.body_text())
    }
}

impl From<PathRejection> for RestError {
    fn from(rejection: PathRejection) -> Self {
        RestError::InvalidPath(rejection.body_text())
    }
}

impl From<QueryRejection> for RestError {
    fn from(rejection: QueryRejection) -> Self {
        RestError::InvalidQueryParam(rejection.body_text())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldViolation>,
}

impl From<RestError> for ErrorResponse {
    fn from(err: RestError) -> Self {
        let code = err.status_code().as_u16();
        let error = err.to_string();
        let errors = match err {
            RestError::Validation(details) => details.into_violations(),
            _ => Vec::new(),
        };
        Self {
            error,
            code,
            errors,
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
