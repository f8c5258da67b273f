use crate::config::Credentials;
use crate::error::identity::IdentityError;
use crate::identity::{password_grant_body, tokens_url};

use common::RedactedSecret;

use serde_json::{Value, json};

/// **VALUE**: Verifies every accepted `OS_AUTH_URL` shape resolves to the v3 tokens URL.
///
/// **WHY THIS MATTERS**: openrc files in the wild carry `/v3`, `/v3/`, `/v2.0` or nothing.
///
/// **BUG THIS CATCHES**: Would catch `Url::join` dropping the last path segment, or a
/// doubled `/v3/v3`.
#[test]
fn given_auth_url_variants_when_building_tokens_url_then_v3_endpoint() {
    let cases = [
        ("https://id.example:5000", "https://id.example:5000/v3/auth/tokens"),
        ("https://id.example:5000/", "https://id.example:5000/v3/auth/tokens"),
        ("https://id.example:5000/v3", "https://id.example:5000/v3/auth/tokens"),
        ("https://id.example:5000/v3/", "https://id.example:5000/v3/auth/tokens"),
        ("https://id.example:5000/v2.0", "https://id.example:5000/v3/auth/tokens"),
        ("https://example.org/identity", "https://example.org/identity/v3/auth/tokens"),
    ];

    for (raw, expected) in cases {
        assert_eq!(tokens_url(Some(raw)).unwrap().as_str(), expected, "{raw}");
    }
}

#[test]
fn given_missing_or_blank_auth_url_when_building_tokens_url_then_missing_error() {
    assert!(matches!(
        tokens_url(None).unwrap_err(),
        IdentityError::MissingAuthUrl { .. }
    ));
    assert!(matches!(
        tokens_url(Some("  ")).unwrap_err(),
        IdentityError::MissingAuthUrl { .. }
    ));
}

#[test]
fn given_garbage_auth_url_when_building_tokens_url_then_parse_error() {
    assert!(matches!(
        tokens_url(Some("not a url")).unwrap_err(),
        IdentityError::UrlParse { .. }
    ));
}

/// **VALUE**: Verifies the password-grant body matches the Keystone v3 shape, project-scoped.
#[test]
fn given_full_credentials_when_building_body_then_keystone_v3_shape() {
    let credentials = Credentials {
        auth_url: Some(String::from("https://id.example/v3")),
        username: Some(String::from("alice")),
        password: Some(RedactedSecret::new("hunter2")),
        project_name: Some(String::from("ops")),
        user_domain_name: Some(String::from("Default")),
        project_domain_name: Some(String::from("Users")),
    };

    let body = password_grant_body(&credentials);

    assert_eq!(
        body,
        json!({
            "auth": {
                "identity": {
                    "methods": ["password"],
                    "password": {
                        "user": {
                            "name": "alice",
                            "domain": {"name": "Default"},
                            "password": "hunter2"
                        }
                    }
                },
                "scope": {
                    "project": {
                        "name": "ops",
                        "domain": {"name": "Users"}
                    }
                }
            }
        })
    );
}

/// **VALUE**: Verifies unset values are sent as `null` and left to the server to judge.
#[test]
fn given_missing_credentials_when_building_body_then_nulls() {
    let body = password_grant_body(&Credentials::default());

    assert_eq!(body["auth"]["identity"]["password"]["user"]["name"], Value::Null);
    assert_eq!(
        body["auth"]["identity"]["password"]["user"]["password"],
        Value::Null
    );
    assert_eq!(body["auth"]["scope"]["project"]["name"], Value::Null);
}

/// **VALUE**: Verifies 4xx answers read as rejected credentials and 5xx as outages.
#[test]
fn given_status_codes_when_classified_then_rejected_or_server() {
    let rejected = IdentityError::from_http_response(401, "bad password");
    let outage = IdentityError::from_http_response(503, "down");

    assert!(matches!(rejected, IdentityError::Rejected { .. }));
    assert!(matches!(outage, IdentityError::Server { .. }));
    if let IdentityError::Rejected { status, .. } = &rejected {
        assert_eq!(status.0, 401);
    }
    assert!(rejected.to_string().contains("401"));
    assert!(rejected.to_string().contains("identity.rs"));
}
