//! SMTP adapter
//!
//! Implementation of the mail transport over lettre's async SMTP client.

pub mod transport;

pub use transport::{LogMailTransport, SmtpMailTransport, SmtpSettings};
