//! Submission domain entity
//!
//! The name/email/message triple collected from the contact form. A
//! `Submission` only exists once all three fields have passed validation.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use lettre::message::Mailbox;
use regex::Regex;
use serde::Serialize;

use crate::error::ValidationError;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Email address supplied by the person filling in the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitterEmail(String);

impl SubmitterEmail {
    /// Accepts `local@domain.tld` with no whitespace and a single `@`,
    /// provided the mail transport can also address it
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if EMAIL_PATTERN.is_match(raw) && raw.parse::<Mailbox>().is_ok() {
            Ok(Self(raw.to_string()))
        } else {
            Err(ValidationError::InvalidEmail)
        }
    }
}

impl AsRef<str> for SubmitterEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SubmitterEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated contact form submission
#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    pub name: String,
    pub email: SubmitterEmail,
    pub message: String,
    pub received_at: DateTime<Utc>,
}

/// Raw field values as they arrived over the wire
#[derive(Debug, Clone, Default)]
pub struct NewSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl Submission {
    /// Validate raw field values.
    ///
    /// Presence is checked for all fields before the email format, so a
    /// payload with a missing name and a bad email reports the missing field.
    pub fn parse(raw: NewSubmission) -> Result<Self, ValidationError> {
        let name = required(raw.name)?;
        let email = required(raw.email)?;
        let message = required(raw.message)?;

        let email = SubmitterEmail::parse(&email)?;

        Ok(Self {
            name,
            email,
            message,
            received_at: Utc::now(),
        })
    }
}

fn required(value: Option<String>) -> Result<String, ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(ValidationError::MissingFields),
    }
}
