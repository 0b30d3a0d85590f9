//! SMTP mail transport implementation
//!
//! `SmtpMailTransport` delivers through an authenticated STARTTLS relay
//! (Gmail by default). `LogMailTransport` is used when no SMTP credentials
//! are configured: it logs the message and reports success.

use std::time::Duration;

use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use uuid::Uuid;

use crate::domain::entities::{DeliveryReceipt, OutboundEmail};
use crate::domain::ports::MailTransport;
use crate::error::MailError;

/// Settings needed to open an SMTP relay
#[derive(Debug, Clone)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Socket-level timeout for the SMTP conversation
    pub timeout: Duration,
}

pub struct SmtpMailTransport {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailTransport {
    pub fn new(settings: SmtpSettings) -> Result<Self, MailError> {
        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)
            .map_err(|e| MailError::Smtp(e.to_string()))?
            .port(settings.port)
            .credentials(Credentials::new(settings.username, settings.password))
            .timeout(Some(settings.timeout))
            .build();

        Ok(Self { mailer })
    }
}

#[async_trait]
impl MailTransport for SmtpMailTransport {
    async fn send(&self, email: &OutboundEmail) -> Result<DeliveryReceipt, MailError> {
        let (message, message_id) = build_message(email)?;

        self.mailer
            .send(message)
            .await
            .map_err(|e| MailError::Smtp(e.to_string()))?;

        Ok(DeliveryReceipt { message_id })
    }
}

/// Transport that only logs, for running without SMTP credentials
pub struct LogMailTransport;

#[async_trait]
impl MailTransport for LogMailTransport {
    async fn send(&self, email: &OutboundEmail) -> Result<DeliveryReceipt, MailError> {
        // Build anyway so address problems surface the same way as with SMTP.
        let (_, message_id) = build_message(email)?;

        tracing::info!(
            to = %email.to,
            reply_to = %email.reply_to,
            subject = %email.subject,
            "SMTP not configured, email not sent:\n{}",
            email.text_body
        );

        Ok(DeliveryReceipt { message_id })
    }
}

fn parse_mailbox(raw: &str) -> Result<Mailbox, MailError> {
    raw.parse::<Mailbox>()
        .map_err(|e| MailError::InvalidAddress(format!("{}: {}", raw, e)))
}

/// Convert an `OutboundEmail` into a lettre message with a fresh Message-ID
fn build_message(email: &OutboundEmail) -> Result<(Message, String), MailError> {
    let from = parse_mailbox(&email.from)?;
    let to = parse_mailbox(&email.to)?;
    let reply_to = parse_mailbox(&email.reply_to)?;

    let message_id = format!("<{}@{}>", Uuid::new_v4(), from.email.domain());

    let message = Message::builder()
        .message_id(Some(message_id.clone()))
        .from(from)
        .reply_to(reply_to)
        .to(to)
        .subject(email.subject.as_str())
        .multipart(MultiPart::alternative_plain_html(
            email.text_body.clone(),
            email.html_body.clone(),
        ))
        .map_err(|e| MailError::Build(e.to_string()))?;

    Ok((message, message_id))
}
