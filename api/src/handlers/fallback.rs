//! Fallback handlers
//!
//! Answers for requests no route claims and for handlers that panic. Both
//! use the same `{success, message}` body as the relay endpoint.

use std::any::Any;

use axum::response::{IntoResponse, Response};

use crate::error::AppError;

/// Any unmatched route (and any missing static file)
pub async fn not_found() -> AppError {
    AppError::NotFound
}

/// Panic hook for `CatchPanicLayer`
///
/// The panic payload is logged, never returned.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::Internal(format!("Handler panicked: {}", detail)).into_response()
}
