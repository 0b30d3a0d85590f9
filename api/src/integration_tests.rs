//! HTTP contract tests for the portfolio API
//!
//! These drive the real router (handlers, fallbacks, middleware) through
//! `axum-test`, with the mail transport swapped for in-memory mocks.
//!
//! Run with: cargo test integration_tests

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::sync::Arc;

    use axum::http::{header, HeaderValue, StatusCode};
    use axum_test::TestServer;
    use serde_json::json;

    use crate::build_router;
    use crate::domain::ports::MailTransport;
    use crate::error::StatusBody;
    use crate::test_utils::{
        test_state, FailingMailTransport, PanickingMailTransport, RecordingMailTransport,
    };

    fn server_with(transport: Arc<dyn MailTransport>) -> TestServer {
        server_with_static(transport, Path::new("does-not-exist"))
    }

    fn server_with_static(transport: Arc<dyn MailTransport>, static_dir: &Path) -> TestServer {
        TestServer::new(build_router(test_state(transport), static_dir)).unwrap()
    }

    #[tokio::test]
    async fn valid_submission_is_relayed() {
        let transport = Arc::new(RecordingMailTransport::new());
        let server = server_with(transport.clone());

        let response = server
            .post("/api/send-email")
            .json(&json!({
                "name": "Ann",
                "email": "ann@x.com",
                "message": "Hello there!"
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(
            response.json::<StatusBody>(),
            StatusBody::ok("Email sent successfully!")
        );

        let sent = transport.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].reply_to, "ann@x.com");
        assert!(sent[0].html_body.contains("Hello&#32;there!"));
    }

    #[tokio::test]
    async fn empty_name_is_rejected() {
        let transport = Arc::new(RecordingMailTransport::new());
        let server = server_with(transport.clone());

        let response = server
            .post("/api/send-email")
            .json(&json!({
                "name": "",
                "email": "ann@x.com",
                "message": "Hello there!"
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<StatusBody>(),
            StatusBody::failure("All fields are required")
        );
        assert!(transport.sent().is_empty());
    }

    #[tokio::test]
    async fn missing_field_is_rejected() {
        let server = server_with(Arc::new(RecordingMailTransport::new()));

        let response = server
            .post("/api/send-email")
            .json(&json!({ "name": "Ann", "email": "ann@x.com" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<StatusBody>().message,
            "All fields are required"
        );
    }

    #[tokio::test]
    async fn malformed_email_is_rejected() {
        let transport = Arc::new(RecordingMailTransport::new());
        let server = server_with(transport.clone());

        let response = server
            .post("/api/send-email")
            .json(&json!({
                "name": "Ann",
                "email": "not-an-email",
                "message": "Hello there!"
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<StatusBody>(),
            StatusBody::failure("Please provide a valid email address")
        );
        assert!(transport.sent().is_empty());
    }

    #[tokio::test]
    async fn transport_failure_returns_generic_message() {
        let transport = Arc::new(FailingMailTransport::new(
            "535-5.7.8 Username and Password not accepted",
        ));
        let server = server_with(transport.clone());

        let response = server
            .post("/api/send-email")
            .json(&json!({
                "name": "Ann",
                "email": "ann@x.com",
                "message": "Hello there!"
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = response.json::<StatusBody>();
        assert_eq!(
            body,
            StatusBody::failure("Failed to send email. Please try again later.")
        );
        assert!(!response.text().contains("535"));
        assert_eq!(transport.attempts(), 1);
    }

    #[tokio::test]
    async fn form_encoded_submission_is_accepted() {
        let transport = Arc::new(RecordingMailTransport::new());
        let server = server_with(transport.clone());

        let response = server
            .post("/api/send-email")
            .form(&[
                ("name", "Ann"),
                ("email", "ann@x.com"),
                ("message", "Hello there!"),
            ])
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(transport.sent().len(), 1);
    }

    #[tokio::test]
    async fn body_without_content_type_counts_as_empty() {
        let server = server_with(Arc::new(RecordingMailTransport::new()));

        let response = server.post("/api/send-email").text("name=Ann").await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<StatusBody>().message,
            "All fields are required"
        );
    }

    #[tokio::test]
    async fn wrongly_typed_json_is_a_validation_error() {
        let server = server_with(Arc::new(RecordingMailTransport::new()));

        let response = server
            .post("/api/send-email")
            .json(&json!({ "name": 42, "email": "ann@x.com", "message": "Hello there!" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn broken_json_is_an_unhandled_error() {
        let server = server_with(Arc::new(RecordingMailTransport::new()));

        let response = server
            .post("/api/send-email")
            .bytes("{\"name\": \"Ann\",".into())
            .content_type("application/json")
            .await;

        assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.json::<StatusBody>(),
            StatusBody::failure("Something went wrong!")
        );
    }

    #[tokio::test]
    async fn handler_panic_is_caught() {
        let server = server_with(Arc::new(PanickingMailTransport));

        let response = server
            .post("/api/send-email")
            .json(&json!({
                "name": "Ann",
                "email": "ann@x.com",
                "message": "Hello there!"
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = response.json::<StatusBody>();
        assert_eq!(body.message, "Something went wrong!");
        assert!(!response.text().contains("exploded"));
    }

    #[tokio::test]
    async fn unknown_route_is_json_404() {
        let server = server_with(Arc::new(RecordingMailTransport::new()));

        let response = server.get("/api/unknown").await;

        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.json::<StatusBody>(),
            StatusBody::failure("Route not found")
        );
    }

    #[tokio::test]
    async fn wrong_method_on_relay_is_json_404() {
        let server = server_with(Arc::new(RecordingMailTransport::new()));

        let response = server.get("/api/send-email").await;

        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(response.json::<StatusBody>().message, "Route not found");
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let server = server_with(Arc::new(RecordingMailTransport::new()));

        let response = server.get("/health").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn static_page_is_served() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("portfolio.html"), "<h1>Portfolio</h1>").unwrap();
        std::fs::write(dir.path().join("style.css"), "body { margin: 0; }").unwrap();

        let server = server_with_static(Arc::new(RecordingMailTransport::new()), dir.path());

        let index = server.get("/").await;
        assert_eq!(index.status_code(), StatusCode::OK);
        assert!(index.text().contains("Portfolio"));

        let css = server.get("/style.css").await;
        assert_eq!(css.status_code(), StatusCode::OK);
        assert!(css.text().contains("margin"));

        let missing = server.get("/missing.js").await;
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(missing.json::<StatusBody>().message, "Route not found");
    }

    #[tokio::test]
    async fn missing_index_page_is_json_404() {
        let server = server_with(Arc::new(RecordingMailTransport::new()));

        let response = server.get("/").await;

        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.json::<StatusBody>(),
            StatusBody::failure("Route not found")
        );
    }

    #[tokio::test]
    async fn post_to_index_is_json_404() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("portfolio.html"), "<h1>Portfolio</h1>").unwrap();
        let server = server_with_static(Arc::new(RecordingMailTransport::new()), dir.path());

        let response = server.post("/").json(&json!({})).await;

        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(response.json::<StatusBody>().message, "Route not found");
    }

    #[tokio::test]
    async fn unaddressable_email_is_a_validation_error() {
        let transport = Arc::new(RecordingMailTransport::new());
        let server = server_with(transport.clone());

        for email in ["a,b@c.de", "ann@x.com."] {
            let response = server
                .post("/api/send-email")
                .json(&json!({
                    "name": "Ann",
                    "email": email,
                    "message": "Hello there!"
                }))
                .await;

            assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
            assert_eq!(
                response.json::<StatusBody>(),
                StatusBody::failure("Please provide a valid email address")
            );
        }
        assert!(transport.sent().is_empty());
    }

    #[tokio::test]
    async fn cors_allows_any_origin() {
        let server = server_with(Arc::new(RecordingMailTransport::new()));

        let response = server
            .get("/health")
            .add_header(header::ORIGIN, HeaderValue::from_static("https://example.org"))
            .await;

        assert_eq!(response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN), "*");
    }
}
