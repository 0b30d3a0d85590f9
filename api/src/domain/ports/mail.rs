//! Mail transport port trait
//!
//! Defines the interface for handing a composed message to an outbound
//! mail provider.

use async_trait::async_trait;

use crate::domain::entities::{DeliveryReceipt, OutboundEmail};
use crate::error::MailError;

/// Outbound mail transport
///
/// One call is one delivery attempt. Implementations must not retry.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<DeliveryReceipt, MailError>;
}
