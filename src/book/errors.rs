//! Bookshelf error types
//!
//! `BookError` is what the store returns. `ApiError` adds the action that
//! was attempted and turns the failure into an HTTP response.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use super::helpers::fail_body;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, BookError>;

/// Input rejected before it reaches the collection
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please provide the book name")]
    MissingName,

    #[error("readPage must not be greater than pageCount")]
    ReadPageExceedsPageCount,
}

/// Failure of a store operation
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum BookError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Id not found")]
    NotFound,
}

/// The operation a request was trying to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Fetch,
    Update,
    Delete,
}

impl Action {
    fn verb(self) -> &'static str {
        match self {
            Action::Add => "add",
            Action::Fetch => "fetch",
            Action::Update => "update",
            Action::Delete => "delete",
        }
    }
}

/// Error returned by the HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Failed to {} book. {source}", .action.verb())]
    Book { action: Action, source: BookError },

    #[error("Failed to {} book. Invalid request body: {detail}", .action.verb())]
    InvalidBody { action: Action, detail: String },
}

impl ApiError {
    pub fn book(action: Action, source: BookError) -> Self {
        ApiError::Book { action, source }
    }

    pub fn invalid_body(action: Action, rejection: JsonRejection) -> Self {
        ApiError::InvalidBody {
            action,
            detail: rejection.body_text(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Book {
                source: BookError::NotFound,
                ..
            } => StatusCode::NOT_FOUND,
            ApiError::Book { .. } | ApiError::InvalidBody { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(status = %status, "{}", self);
        (status, Json(fail_body(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let not_found = ApiError::book(Action::Delete, BookError::NotFound);
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
        assert_eq!(not_found.to_string(), "Failed to delete book. Id not found");

        let invalid = ApiError::book(Action::Add, ValidationError::MissingName.into());
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            invalid.to_string(),
            "Failed to add book. Please provide the book name"
        );
    }
}
