//! Contact form model
//!
//! Headless representation of the form: field values, the inline error
//! annotation next to each field, and the submit control.

use serde::Serialize;

pub const FIELD_NAME: &str = "name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_MESSAGE: &str = "message";

const SUBMIT_LABEL: &str = "Send Message";
const PENDING_LABEL: &str = "Sending...";

/// A single input with its inline error annotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: String,
    /// At most one annotation per field
    pub error: Option<String>,
    pub multiline: bool,
}

impl FormField {
    pub fn new(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: String::new(),
            error: None,
            multiline: false,
        }
    }

    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

/// The submit button: disabled with a pending label while a request is in flight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    label: String,
    idle_label: String,
    disabled: bool,
}

impl Default for SubmitControl {
    fn default() -> Self {
        Self {
            label: SUBMIT_LABEL.to_string(),
            idle_label: SUBMIT_LABEL.to_string(),
            disabled: false,
        }
    }
}

impl SubmitControl {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn begin_pending(&mut self) {
        self.disabled = true;
        self.label = PENDING_LABEL.to_string();
    }

    pub fn restore(&mut self) {
        self.disabled = false;
        self.label = self.idle_label.clone();
    }
}

/// Field values as sent to the relay
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    fields: Vec<FormField>,
    pub submit: SubmitControl,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            fields: vec![
                FormField::new(FIELD_NAME, "Name"),
                FormField::new(FIELD_EMAIL, "Email"),
                FormField::new(FIELD_MESSAGE, "Message").multiline(),
            ],
            submit: SubmitControl::default(),
        }
    }

    /// Add an extra field (e.g. an optional subject)
    pub fn with_field(mut self, field: FormField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut [FormField] {
        &mut self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Set a field's value. Returns false for unknown fields.
    pub fn set_value(&mut self, name: &str, value: &str) -> bool {
        match self.field_mut(name) {
            Some(field) => {
                field.value = value.to_string();
                true
            }
            None => false,
        }
    }

    fn trimmed(&self, name: &str) -> String {
        self.field(name)
            .map(|f| f.value.trim().to_string())
            .unwrap_or_default()
    }

    pub fn payload(&self) -> ContactPayload {
        ContactPayload {
            name: self.trimmed(FIELD_NAME),
            email: self.trimmed(FIELD_EMAIL),
            message: self.trimmed(FIELD_MESSAGE),
        }
    }

    /// Clear values and annotations
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
            field.error = None;
        }
    }

    /// Plain-text rendering for the terminal
    pub fn render(&self) -> String {
        let mut out = String::new();
        for field in &self.fields {
            if field.multiline {
                out.push_str(&format!("{}:\n", field.label));
                for line in field.value.lines() {
                    out.push_str(&format!("  | {}\n", line));
                }
            } else {
                out.push_str(&format!("{}: {}\n", field.label, field.value));
            }
            if let Some(ref error) = field.error {
                out.push_str(&format!("  ! {}\n", error));
            }
        }
        out.push_str(&format!("[ {} ]\n", self.submit.label()));
        out
    }
}
