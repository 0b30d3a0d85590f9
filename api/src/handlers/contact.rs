//! Contact handlers
//!
//! The contact-form relay endpoint.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request, State},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde::Deserialize;

use crate::domain::entities::NewSubmission;
use crate::error::{AppError, StatusBody, ValidationError};
use crate::AppState;

pub const MSG_EMAIL_SENT: &str = "Email sent successfully!";

/// Request body for a contact submission
///
/// Every field is optional at this layer so that a missing field turns into
/// the uniform "All fields are required" answer instead of a decode error.
#[derive(Debug, Default, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl From<ContactRequest> for NewSubmission {
    fn from(request: ContactRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            message: request.message,
        }
    }
}

enum BodyKind {
    Json,
    Form,
    Other,
}

fn body_kind(req: &Request) -> BodyKind {
    let content_type = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();

    if content_type.starts_with("application/json") {
        BodyKind::Json
    } else if content_type.starts_with("application/x-www-form-urlencoded") {
        BodyKind::Form
    } else {
        BodyKind::Other
    }
}

/// Contact payload decoded from either a JSON or a urlencoded body
///
/// Bodies of any other content type decode to an empty request.
pub struct ContactPayload(pub ContactRequest);

#[async_trait]
impl<S> FromRequest<S> for ContactPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match body_kind(&req) {
            BodyKind::Json => {
                let Json(request) = Json::<ContactRequest>::from_request(req, state)
                    .await
                    .map_err(|rejection| match rejection {
                        // Well-formed JSON of the wrong shape (e.g. `[]`, numbers)
                        JsonRejection::JsonDataError(_) => {
                            AppError::Validation(ValidationError::MissingFields)
                        }
                        other => AppError::Internal(format!("Unreadable JSON body: {}", other)),
                    })?;
                Ok(Self(request))
            }
            BodyKind::Form => {
                let Form(request) = Form::<ContactRequest>::from_request(req, state)
                    .await
                    .map_err(|e| AppError::Internal(format!("Unreadable form body: {}", e)))?;
                Ok(Self(request))
            }
            BodyKind::Other => Ok(Self(ContactRequest::default())),
        }
    }
}

/// POST /api/send-email
///
/// Validate the submission and relay it to the operator's mailbox.
pub async fn send_email(
    State(state): State<AppState>,
    ContactPayload(request): ContactPayload,
) -> Result<Json<StatusBody>, AppError> {
    state.contact_service.submit(request.into()).await?;

    Ok(Json(StatusBody::ok(MSG_EMAIL_SENT)))
}
