//! Domain entities
//!
//! Pure domain models for the contact pipeline. Nothing here is persisted.

pub mod email;
pub mod submission;

pub use email::{DeliveryReceipt, OutboundEmail};
pub use submission::{NewSubmission, Submission};
