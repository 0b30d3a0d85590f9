//! Contact service
//!
//! Validates a raw submission, composes the notification email and hands it
//! to the mail transport. One request maps to at most one transport attempt.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::{DeliveryReceipt, NewSubmission, OutboundEmail, Submission};
use crate::domain::ports::MailTransport;
use crate::error::{AppError, MailError};

/// Service relaying contact submissions to the operator's mailbox
pub struct ContactService {
    transport: Arc<dyn MailTransport>,
    sender: String,
    recipient: String,
    timeout: Duration,
}

impl ContactService {
    pub fn new(
        transport: Arc<dyn MailTransport>,
        sender: String,
        recipient: String,
        timeout: Duration,
    ) -> Self {
        Self {
            transport,
            sender,
            recipient,
            timeout,
        }
    }

    /// Relay a submission
    ///
    /// Validation failures come back as `AppError::Validation` before the
    /// transport is touched. A transport that does not answer within the
    /// configured timeout is reported as `MailError::Timeout`.
    pub async fn submit(&self, raw: NewSubmission) -> Result<DeliveryReceipt, AppError> {
        let submission = Submission::parse(raw)?;
        let email = self.compose(&submission);

        let receipt = tokio::time::timeout(self.timeout, self.transport.send(&email))
            .await
            .map_err(|_| MailError::Timeout(self.timeout.as_secs()))??;

        tracing::info!(
            message_id = %receipt.message_id,
            reply_to = %submission.email,
            "Email sent successfully"
        );

        Ok(receipt)
    }

    /// Build the operator notification for a submission
    pub fn compose(&self, submission: &Submission) -> OutboundEmail {
        OutboundEmail {
            from: self.sender.clone(),
            to: self.recipient.clone(),
            reply_to: submission.email.to_string(),
            subject: format!("Portfolio Contact: {}", submission.name),
            html_body: render_html(submission),
            text_body: render_text(submission),
        }
    }
}

/// Escape user text for HTML and turn line breaks into `<br>`
fn html_lines(text: &str) -> String {
    text.split('\n')
        .map(|line| ammonia::clean_text(line.trim_end_matches('\r')))
        .collect::<Vec<_>>()
        .join("<br>")
}

fn render_html(submission: &Submission) -> String {
    format!(
        r##"<table width="100%" cellpadding="0" cellspacing="0" border="0" bgcolor="#f4f4f4" style="font-family: Arial, sans-serif; padding:20px;">
  <tr>
    <td align="center">
      <table width="600" cellpadding="0" cellspacing="0" border="0" bgcolor="#ffffff" style="border-radius:8px; padding:20px;">
        <tr>
          <td>
            <h2 style="color:#a70000; margin:0 0 20px 0;">New Contact Form Submission</h2>
            <table width="100%" cellpadding="10" cellspacing="0" border="0" bgcolor="#e0f7fa" style="border-radius:8px;">
              <tr><td><p style="margin:0;"><strong>Name:</strong> {name}</p></td></tr>
              <tr><td><p style="margin:0;"><strong>Email:</strong> {email}</p></td></tr>
              <tr><td><p style="margin:0;"><strong>Message:</strong></p></td></tr>
              <tr>
                <td style="font-size:14px; color:#333; background:#ffffff; border:1px solid #ddd; border-radius:4px;">{message}</td>
              </tr>
            </table>
            <p style="color:#170069; font-size:12px; margin-top:20px; text-align:center;">
              Sent from your portfolio contact form on {received}.
            </p>
          </td>
        </tr>
      </table>
    </td>
  </tr>
</table>"##,
        name = html_lines(&submission.name),
        email = html_lines(submission.email.as_ref()),
        message = html_lines(&submission.message),
        received = submission.received_at.format("%Y-%m-%d %H:%M UTC"),
    )
}

fn render_text(submission: &Submission) -> String {
    format!(
        "New Contact Form Submission\n\nName: {}\nEmail: {}\n\nMessage:\n{}\n\n-- \nSent from your portfolio contact form on {}.\n",
        submission.name,
        submission.email,
        submission.message,
        submission.received_at.format("%Y-%m-%d %H:%M UTC"),
    )
}
