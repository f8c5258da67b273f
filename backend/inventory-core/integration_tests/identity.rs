use crate::helpers::{TEST_TOKEN, credentials_for, token_body};

use inventory_core::Session;
use inventory_core::error::IdentityError;
use inventory_core::identity::SUBJECT_TOKEN_HEADER;

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TIMEOUT: Duration = Duration::from_secs(5);

/// **VALUE**: Verifies a 201 with `X-Subject-Token` yields a session carrying token and catalog.
///
/// **WHY THIS MATTERS**: Keystone returns the token in a header, not the body. Reading the
/// body alone leaves every compute call unauthenticated.
///
/// **BUG THIS CATCHES**: Would catch posting to the wrong path, dropping the project scope,
/// or reading the token from the wrong place.
#[tokio::test]
async fn given_valid_credentials_when_authenticating_then_session_with_catalog() {
    // GIVEN: An identity service accepting alice's password for project ops
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3/auth/tokens"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({
            "auth": {
                "identity": {"methods": ["password"], "password": {"user": {"name": "alice", "password": "hunter2"}}},
                "scope": {"project": {"name": "ops"}}
            }
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .insert_header(SUBJECT_TOKEN_HEADER, TEST_TOKEN)
                .set_body_json(token_body("https://nova.example/v2.1")),
        )
        .expect(1)
        .mount(&server)
        .await;

    // WHEN: Authenticating with a /v3 auth URL
    let session = Session::authenticate(&credentials_for(&format!("{}/v3", server.uri())), TIMEOUT)
        .await
        .unwrap();

    // THEN: Token and catalog come back
    assert_eq!(session.token().expose(), TEST_TOKEN);
    assert_eq!(session.catalog().services.len(), 1);
}

/// **VALUE**: Verifies a 401 maps to `Rejected` with the status preserved.
///
/// **WHY THIS MATTERS**: A wrong password must read as a wrong password, not as a network
/// problem, so operators fix the right thing.
#[tokio::test]
async fn given_wrong_password_when_authenticating_then_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3/auth/tokens"))
        .respond_with(ResponseTemplate::new(401).set_body_string("The request you have made requires authentication."))
        .mount(&server)
        .await;

    let error = Session::authenticate(&credentials_for(&server.uri()), TIMEOUT)
        .await
        .unwrap_err();

    match &error {
        IdentityError::Rejected { status, .. } => assert_eq!(status.0, 401),
        other => panic!("expected Rejected, got {other:?}"),
    }
    assert!(error.to_string().contains("requires authentication"));
}

#[tokio::test]
async fn given_identity_outage_when_authenticating_then_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let error = Session::authenticate(&credentials_for(&server.uri()), TIMEOUT)
        .await
        .unwrap_err();

    assert!(matches!(error, IdentityError::Server { .. }));
}

/// **VALUE**: Verifies a success without the token header is an error, not an empty token.
#[tokio::test]
async fn given_success_without_token_header_when_authenticating_then_missing_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201).set_body_json(token_body("https://nova/v2.1")))
        .mount(&server)
        .await;

    let error = Session::authenticate(&credentials_for(&server.uri()), TIMEOUT)
        .await
        .unwrap_err();

    assert!(matches!(error, IdentityError::MissingToken { .. }));
}

#[tokio::test]
async fn given_non_json_body_when_authenticating_then_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(201)
                .insert_header(SUBJECT_TOKEN_HEADER, TEST_TOKEN)
                .set_body_string("<html>proxy error</html>"),
        )
        .mount(&server)
        .await;

    let error = Session::authenticate(&credentials_for(&server.uri()), TIMEOUT)
        .await
        .unwrap_err();

    assert!(matches!(error, IdentityError::Json { .. }));
}

#[tokio::test]
async fn given_empty_token_header_when_authenticating_then_missing_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(201)
                .insert_header(SUBJECT_TOKEN_HEADER, "")
                .set_body_json(token_body("https://nova/v2.1")),
        )
        .mount(&server)
        .await;

    let error = Session::authenticate(&credentials_for(&server.uri()), TIMEOUT)
        .await
        .unwrap_err();

    assert!(matches!(error, IdentityError::MissingToken { .. }));
}

/// **VALUE**: Verifies an unreachable identity service surfaces as a connection error.
#[tokio::test]
async fn given_unreachable_identity_when_authenticating_then_http_error() {
    let error = Session::authenticate(&credentials_for("http://127.0.0.1:1"), TIMEOUT)
        .await
        .unwrap_err();

    assert!(matches!(error, IdentityError::Http { .. }));
}

#[tokio::test]
async fn given_no_auth_url_when_authenticating_then_missing_auth_url() {
    let mut credentials = credentials_for("unused");
    credentials.auth_url = None;

    let error = Session::authenticate(&credentials, TIMEOUT).await.unwrap_err();

    assert!(matches!(error, IdentityError::MissingAuthUrl { .. }));
}
