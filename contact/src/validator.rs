//! Form validation
//!
//! Rules live in a lookup table keyed by field name. Fields without a rule
//! are never annotated and always count as valid.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::form::{ContactForm, FormField, FIELD_EMAIL, FIELD_MESSAGE, FIELD_NAME};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// A validation rule: predicate over the trimmed value plus the annotation text
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub check: fn(&str) -> bool,
    pub message: &'static str,
}

impl FieldRule {
    pub fn passes(&self, trimmed: &str) -> bool {
        (self.check)(trimmed)
    }
}

fn name_rule(value: &str) -> bool {
    value.chars().count() >= 2
}

fn email_rule(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

fn message_rule(value: &str) -> bool {
    value.chars().count() >= 10
}

pub struct FormValidator {
    rules: HashMap<String, FieldRule>,
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl FormValidator {
    pub fn new() -> Self {
        let mut rules = HashMap::new();
        rules.insert(
            FIELD_NAME.to_string(),
            FieldRule {
                check: name_rule,
                message: "Name must be at least 2 characters long",
            },
        );
        rules.insert(
            FIELD_EMAIL.to_string(),
            FieldRule {
                check: email_rule,
                message: "Please enter a valid email address",
            },
        );
        rules.insert(
            FIELD_MESSAGE.to_string(),
            FieldRule {
                check: message_rule,
                message: "Message must be at least 10 characters long",
            },
        );
        Self { rules }
    }

    /// Register or replace the rule for a field
    pub fn with_rule(mut self, field: &str, rule: FieldRule) -> Self {
        self.rules.insert(field.to_string(), rule);
        self
    }

    pub fn rule(&self, field: &str) -> Option<&FieldRule> {
        self.rules.get(field)
    }

    /// Check one field and set or clear its annotation
    pub fn validate_field(&self, field: &mut FormField) -> bool {
        let Some(rule) = self.rules.get(&field.name) else {
            return true;
        };

        if rule.passes(field.value.trim()) {
            field.error = None;
            true
        } else {
            field.error = Some(rule.message.to_string());
            false
        }
    }

    /// Check every field that has a rule, annotating all failures
    ///
    /// An empty required field is annotated "<Label> is required" rather
    /// than with its rule text. A rule whose field is absent from the form
    /// makes the form invalid.
    pub fn validate_form(&self, form: &mut ContactForm) -> bool {
        let mut valid = true;

        for field in form.fields_mut() {
            if !self.validate_field(field) {
                valid = false;
                if field.value.trim().is_empty() {
                    field.error = Some(format!("{} is required", field.label));
                }
            }
        }

        for name in self.rules.keys() {
            if form.field(name).is_none() {
                tracing::warn!("Required field '{}' is missing from the form", name);
                valid = false;
            }
        }

        valid
    }

    /// Drop a field's annotation (on focus)
    pub fn clear_field(&self, field: &mut FormField) {
        field.error = None;
    }

    /// Drop every annotation in the form
    pub fn clear_form(&self, form: &mut ContactForm) {
        for field in form.fields_mut() {
            self.clear_field(field);
        }
    }
}
