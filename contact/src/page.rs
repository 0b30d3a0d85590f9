//! Contact section controller
//!
//! Ties the form, its validator, the notification banner and the relay
//! transport together and implements the submit flow.

use crate::client::ContactTransport;
use crate::form::ContactForm;
use crate::notification::{Notification, NotificationCenter};
use crate::validator::FormValidator;

pub const MSG_INVALID_FORM: &str = "Please fill in all required fields correctly.";
pub const MSG_SENT: &str = "Message sent successfully! I'll get back to you soon.";
pub const MSG_SEND_FALLBACK: &str = "Failed to send message. Please try again.";

/// What a call to [`ContactPage::submit`] ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Local validation failed; nothing was sent
    Invalid,
    /// A submission was already in flight
    Ignored,
    Sent,
    /// The relay or the network failed; carries the message shown to the user
    Failed(String),
}

pub struct ContactPage<T: ContactTransport> {
    form: ContactForm,
    validator: FormValidator,
    notifications: NotificationCenter,
    transport: T,
}

impl<T: ContactTransport> ContactPage<T> {
    pub fn new(transport: T, notifications: NotificationCenter) -> Self {
        Self {
            form: ContactForm::new(),
            validator: FormValidator::new(),
            notifications,
            transport,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    /// Type into a field
    pub fn input(&mut self, field: &str, value: &str) -> bool {
        self.form.set_value(field, value)
    }

    /// Leaving a field validates it. Returns `None` for unknown fields.
    pub fn blur(&mut self, field: &str) -> Option<bool> {
        let field = self.form.field_mut(field)?;
        Some(self.validator.validate_field(field))
    }

    /// Entering a field drops its annotation
    pub fn focus(&mut self, field: &str) {
        if let Some(field) = self.form.field_mut(field) {
            self.validator.clear_field(field);
        }
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.form.submit.is_disabled() {
            tracing::debug!("Submit ignored, request already pending");
            return SubmitOutcome::Ignored;
        }

        if !self.validator.validate_form(&mut self.form) {
            self.notifications.show(Notification::error(MSG_INVALID_FORM));
            return SubmitOutcome::Invalid;
        }

        let payload = self.form.payload();
        self.form.submit.begin_pending();

        let result = self.transport.submit(&payload).await;
        self.form.submit.restore();

        match result {
            Ok(reply) => {
                tracing::info!("Contact message relayed: {}", reply.message);
                self.form.reset();
                self.validator.clear_form(&mut self.form);
                self.notifications.show(Notification::success(MSG_SENT));
                SubmitOutcome::Sent
            }
            Err(e) => {
                tracing::warn!("Contact submission failed: {}", e);
                let message = e.server_message().unwrap_or(MSG_SEND_FALLBACK).to_string();
                self.notifications.show(Notification::error(message.clone()));
                SubmitOutcome::Failed(message)
            }
        }
    }
}
