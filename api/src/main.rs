//! Portfolio API Server
//!
//! Serves the portfolio page and relays contact-form submissions to the
//! site owner's mailbox over SMTP.
//! Uses hexagonal (ports & adapters) architecture: the relay only knows the
//! `MailTransport` port, the SMTP client lives in `adapters`.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use axum::{
    body::Body,
    handler::HandlerWithoutStateExt,
    http::{Response, StatusCode},
    response::IntoResponse,
    routing::{get, get_service, post},
    Json, Router,
};
use serde::Serialize;
use tokio::signal;
use tower::{ServiceBuilder, ServiceExt};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::fs::ServeFileSystemResponseBody;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod integration_tests;

use adapters::{LogMailTransport, SmtpMailTransport, SmtpSettings};
use app::ContactService;
use config::Config;
use domain::ports::MailTransport;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub contact_service: Arc<ContactService>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// `ServeFile` answers a missing file with an empty 404; swap in the JSON one
fn json_not_found(response: Response<ServeFileSystemResponseBody>) -> axum::response::Response {
    if response.status() == StatusCode::NOT_FOUND {
        error::AppError::NotFound.into_response()
    } else {
        response.map(Body::new)
    }
}

/// Build the full router: API routes, static page, fallbacks and middleware
pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    // Missing files and non-GET requests outside the API answer with the JSON 404
    let static_files = ServeDir::new(static_dir)
        .call_fallback_on_method_not_allowed(true)
        .fallback(handlers::not_found.into_service());

    Router::new()
        .route("/health", get(health))
        .route(
            "/api/send-email",
            post(handlers::send_email).fallback(handlers::not_found),
        )
        .route(
            "/",
            get_service(
                ServiceExt::<axum::http::Request<Body>>::map_response(
                    ServeFile::new(static_dir.join("portfolio.html")),
                    json_not_found,
                ),
            )
            .fallback(handlers::not_found),
        )
        .fallback_service(static_files)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                )
                .layer(CatchPanicLayer::custom(handlers::handle_panic)),
        )
        .with_state(state)
}

fn build_transport(config: &Config) -> Arc<dyn MailTransport> {
    match (&config.email_user, &config.email_pass) {
        (Some(user), Some(pass)) => {
            let transport = SmtpMailTransport::new(SmtpSettings {
                host: config.smtp_host.clone(),
                port: config.smtp_port,
                username: user.clone(),
                password: pass.clone(),
                timeout: config.smtp_timeout,
            })
            .expect("Failed to configure SMTP transport");
            Arc::new(transport)
        }
        _ => {
            tracing::warn!("EMAIL_USER/EMAIL_PASS not set, contact emails will only be logged");
            Arc::new(LogMailTransport)
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,portfolio_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting portfolio API...");

    // Load configuration
    let config = Config::from_env();

    let transport = build_transport(&config);
    let sender = config
        .email_user
        .clone()
        .unwrap_or_else(|| "portfolio@localhost".to_string());
    let recipient = config
        .contact_recipient
        .clone()
        .unwrap_or_else(|| sender.clone());

    if config.smtp_enabled() {
        tracing::info!(
            "Email service configured for: {} via {}:{}",
            sender,
            config.smtp_host,
            config.smtp_port
        );
    }

    let state = AppState {
        contact_service: Arc::new(ContactService::new(
            transport,
            sender,
            recipient,
            config.smtp_timeout,
        )),
    };

    let app = build_router(state, &config.static_dir);

    if !config.index_file().exists() {
        tracing::warn!(
            "{} not found, GET / will answer with the JSON 404",
            config.index_file().display()
        );
    }

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Portfolio server running on http://localhost:{}", config.port);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Server shut down");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        tracing::info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
