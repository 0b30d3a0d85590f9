//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod contact;
pub mod fallback;

pub use contact::send_email;
pub use fallback::{handle_panic, not_found};
