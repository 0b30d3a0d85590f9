//! HTTP client for the contact relay
//!
//! `ContactTransport` is the seam the form page submits through;
//! `RelayClient` is the reqwest implementation talking to
//! `POST /api/send-email`.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde::Deserialize;
use thiserror::Error;

use crate::form::ContactPayload;

const SEND_EMAIL_PATH: &str = "/api/send-email";

/// The relay's `{success, message}` answer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RelayReply {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum RelayError {
    /// The relay answered and said no; `message` is safe to show the user
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected response ({status}): {body}")]
    UnexpectedResponse { status: u16, body: String },
}

impl RelayError {
    /// Text the relay asked us to show, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            RelayError::Rejected { message, .. } if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }
}

#[async_trait]
pub trait ContactTransport: Send + Sync {
    async fn submit(&self, payload: &ContactPayload) -> Result<RelayReply, RelayError>;
}

/// HTTP client for communicating with the contact relay
#[derive(Clone)]
pub struct RelayClient {
    client: reqwest::Client,
    base_url: String,
}

impl RelayClient {
    /// Create a new client from environment variables
    ///
    /// - CONTACT_API_URL: Base URL of the relay (default http://localhost:3000)
    /// - CONTACT_TIMEOUT_SECS: Request timeout (default 15)
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("CONTACT_API_URL")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());
        let timeout_secs = match std::env::var("CONTACT_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("CONTACT_TIMEOUT_SECS is not a number: {}", raw))?,
            Err(_) => 15,
        };

        Self::new(&base_url, Duration::from_secs(timeout_secs))
    }

    /// Create a new client with explicit configuration
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ContactTransport for RelayClient {
    async fn submit(&self, payload: &ContactPayload) -> Result<RelayReply, RelayError> {
        let url = format!("{}{}", self.base_url, SEND_EMAIL_PATH);
        let response = self.client.post(&url).json(payload).send().await?;

        handle_reply(response).await
    }
}

async fn handle_reply(response: reqwest::Response) -> Result<RelayReply, RelayError> {
    let status = response.status();
    let body = response.text().await?;

    let reply: RelayReply = match serde_json::from_str(&body) {
        Ok(reply) => reply,
        Err(_) => {
            return Err(RelayError::UnexpectedResponse {
                status: status.as_u16(),
                body,
            })
        }
    };

    if status.is_success() && reply.success {
        Ok(reply)
    } else {
        Err(RelayError::Rejected {
            status: status.as_u16(),
            message: reply.message,
        })
    }
}
