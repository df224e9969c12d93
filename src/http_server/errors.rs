//! # HTTP API Errors
//!
//! Every failure leaves the handlers as plain text with its status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{debug, error};

use crate::store::StoreError;

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Unknown or unparsable student id
    #[error("Student not found")]
    NotFound,

    /// Body is not a decodable student object
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Fail reading from db")]
    ReadFailed(#[source] StoreError),

    /// Create or update rejected by the store, constraint clashes included
    #[error("Fail saving to db")]
    SaveFailed(#[source] StoreError),

    #[error("Fail deleting from db")]
    DeleteFailed(#[source] StoreError),
}

impl ApiError {
    /// Map a failed lookup or listing
    pub fn read(err: StoreError) -> Self {
        if err.is_not_found() {
            ApiError::NotFound
        } else {
            ApiError::ReadFailed(err)
        }
    }

    /// Map a failed create or update
    pub fn save(err: StoreError) -> Self {
        if err.is_not_found() {
            ApiError::NotFound
        } else {
            ApiError::SaveFailed(err)
        }
    }

    /// Map a failed delete
    pub fn delete(err: StoreError) -> Self {
        if err.is_not_found() {
            ApiError::NotFound
        } else {
            ApiError::DeleteFailed(err)
        }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            // Constraint violations are reported as server errors too.
            ApiError::ReadFailed(_) | ApiError::SaveFailed(_) | ApiError::DeleteFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            ApiError::ReadFailed(cause)
            | ApiError::SaveFailed(cause)
            | ApiError::DeleteFailed(cause) => error!(error = %cause, "{}", self),
            _ => debug!(status = status.as_u16(), "{}", self),
        }
        (status, self.to_string()).into_response()
    }
}
