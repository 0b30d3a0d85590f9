//! Unified error types for the portfolio API
//!
//! This module defines error types for each layer:
//! - `ValidationError`: Submission rejected before any mail is composed
//! - `MailError`: Outbound mail transport errors
//! - `AppError`: Application layer errors (converted to the `{success, message}` body)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MSG_ALL_FIELDS_REQUIRED: &str = "All fields are required";
pub const MSG_INVALID_EMAIL: &str = "Please provide a valid email address";
pub const MSG_SEND_FAILED: &str = "Failed to send email. Please try again later.";
pub const MSG_ROUTE_NOT_FOUND: &str = "Route not found";
pub const MSG_SOMETHING_WENT_WRONG: &str = "Something went wrong!";

/// Submission validation errors
///
/// The display text is exactly what the caller sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All fields are required")]
    MissingFields,

    #[error("Please provide a valid email address")]
    InvalidEmail,
}

/// Mail transport errors
#[derive(Debug, Error)]
pub enum MailError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Failed to build message: {0}")]
    Build(String),

    #[error("SMTP error: {0}")]
    Smtp(String),

    #[error("Transport timed out after {0} seconds")]
    Timeout(u64),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Mail error: {0}")]
    Mail(#[from] MailError),

    #[error("Not found")]
    NotFound,

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Uniform response body for every JSON answer of the relay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBody {
    pub success: bool,
    pub message: String,
}

impl StatusBody {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            AppError::Mail(e) => {
                tracing::error!("Email sending error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, MSG_SEND_FAILED.to_string())
            }
            AppError::NotFound => (StatusCode::NOT_FOUND, MSG_ROUTE_NOT_FOUND.to_string()),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    MSG_SOMETHING_WENT_WRONG.to_string(),
                )
            }
        };

        (status, Json(StatusBody::failure(message))).into_response()
    }
}
