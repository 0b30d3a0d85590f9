//! Outbound email entity
//!
//! The notification message composed from a submission and handed to the
//! mail transport exactly once.

use serde::Serialize;

/// A fully composed message ready for delivery
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    /// Submitter's address, so the operator can answer directly
    pub reply_to: String,
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
}

/// What the transport reports back after accepting a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryReceipt {
    pub message_id: String,
}
