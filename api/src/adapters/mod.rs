//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod smtp;

pub use smtp::{LogMailTransport, SmtpMailTransport, SmtpSettings};
