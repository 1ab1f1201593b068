// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types and their HTTP translation.
//!
//! Every handler funnels failures through [`AppError`], so the mapping from
//! error to status code and response text lives in exactly one place.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

/// The four document operations exposed over HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Read,
    Update,
    Delete,
}

impl Operation {
    /// Static text returned to the caller when the operation fails.
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::Create => "Error creating document",
            Operation::Read => "Error reading document",
            Operation::Update => "Error updating document",
            Operation::Delete => "Error deleting document",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Create => "create",
            Operation::Read => "read",
            Operation::Update => "update",
            Operation::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Read of a document that does not exist.
    #[error("Document not found: {collection}/{id}")]
    NotFound { collection: String, id: String },

    /// Anything else that went wrong while serving an operation, including
    /// request bodies that could not be decoded.
    #[error("Failed to {operation} document: {reason}")]
    OperationFailed { operation: Operation, reason: String },
}

impl AppError {
    pub const NOT_FOUND_MESSAGE: &'static str = "Document not found";

    /// Tag any displayable error with the operation it interrupted.
    pub fn failed(operation: Operation, err: impl fmt::Display) -> AppError {
        AppError::OperationFailed {
            operation,
            reason: err.to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::OperationFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            AppError::NotFound { collection, id } => {
                tracing::debug!(
                    collection = %collection,
                    document_id = %id,
                    "Document not found"
                );
                Self::NOT_FOUND_MESSAGE
            }
            AppError::OperationFailed { operation, reason } => {
                tracing::error!(
                    operation = %operation,
                    error = %reason,
                    "Document operation failed"
                );
                operation.failure_message()
            }
        };

        (status, message).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
