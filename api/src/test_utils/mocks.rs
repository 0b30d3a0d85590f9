//! Mock implementations of port traits
//!
//! In-memory mail transports that can be configured for testing. They
//! record what they were asked to send so tests can verify behavior.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{DeliveryReceipt, OutboundEmail};
use crate::domain::ports::MailTransport;
use crate::error::MailError;

// ============================================================================
// Recording transport (always succeeds)
// ============================================================================

#[derive(Default)]
pub struct RecordingMailTransport {
    sent: Arc<RwLock<Vec<OutboundEmail>>>,
}

impl RecordingMailTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything handed to `send`, in order
    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.read().unwrap().clone()
    }
}

#[async_trait]
impl MailTransport for RecordingMailTransport {
    async fn send(&self, email: &OutboundEmail) -> Result<DeliveryReceipt, MailError> {
        let mut sent = self.sent.write().unwrap();
        sent.push(email.clone());
        Ok(DeliveryReceipt {
            message_id: format!("<test-{}@example.com>", sent.len()),
        })
    }
}

// ============================================================================
// Failing transport
// ============================================================================

pub struct FailingMailTransport {
    reason: String,
    attempts: AtomicUsize,
}

impl FailingMailTransport {
    pub fn new(reason: &str) -> Self {
        Self {
            reason: reason.to_string(),
            attempts: AtomicUsize::new(0),
        }
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MailTransport for FailingMailTransport {
    async fn send(&self, _email: &OutboundEmail) -> Result<DeliveryReceipt, MailError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(MailError::Smtp(self.reason.clone()))
    }
}

// ============================================================================
// Hanging transport (never answers)
// ============================================================================

pub struct HangingMailTransport;

#[async_trait]
impl MailTransport for HangingMailTransport {
    async fn send(&self, _email: &OutboundEmail) -> Result<DeliveryReceipt, MailError> {
        std::future::pending().await
    }
}

// ============================================================================
// Panicking transport
// ============================================================================

pub struct PanickingMailTransport;

#[async_trait]
impl MailTransport for PanickingMailTransport {
    async fn send(&self, _email: &OutboundEmail) -> Result<DeliveryReceipt, MailError> {
        panic!("transport exploded");
    }
}
