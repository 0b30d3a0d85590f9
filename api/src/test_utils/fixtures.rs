//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use std::sync::Arc;
use std::time::Duration;

use crate::app::ContactService;
use crate::domain::entities::NewSubmission;
use crate::domain::ports::MailTransport;
use crate::AppState;

/// A submission that passes every server-side check
pub fn test_new_submission() -> NewSubmission {
    NewSubmission {
        name: Some("Ann".to_string()),
        email: Some("ann@x.com".to_string()),
        message: Some("Hello there!".to_string()),
    }
}

/// Application state wired to the given transport
pub fn test_state(transport: Arc<dyn MailTransport>) -> AppState {
    AppState {
        contact_service: Arc::new(ContactService::new(
            transport,
            "owner@example.com".to_string(),
            "owner@example.com".to_string(),
            Duration::from_secs(10),
        )),
    }
}
