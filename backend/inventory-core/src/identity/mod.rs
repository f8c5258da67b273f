//! Password-grant authentication against the identity service (Keystone v3).
//!
//! The entry point builds exactly one [`Session`] per run and hands it to the
//! compute client by reference. Failures are returned unchanged in meaning:
//! a refused password is [`IdentityError::Rejected`], an unreachable service
//! is [`IdentityError::Http`].

pub mod catalog;

pub use catalog::{CatalogEndpoint, CatalogService, ServiceCatalog};

use crate::config::Credentials;
use crate::error::identity::IdentityError;
use crate::http::build_client;

use common::RedactedSecret;

use std::time::Duration;

use log::{debug, info};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Value, json};
use url::Url;

pub const SUBJECT_TOKEN_HEADER: &str = "x-subject-token";

const IDENTITY_VERSION_SUFFIX: &str = "/v3";
const LEGACY_VERSION_SUFFIX: &str = "/v2.0";
const TOKENS_ENDPOINT: &str = "auth/tokens";
const PASSWORD_METHOD: &str = "password";

#[derive(Debug, Deserialize)]
struct TokenEnvelope {
    token: TokenBody,
}

#[derive(Debug, Deserialize)]
struct TokenBody {
    #[serde(default)]
    catalog: ServiceCatalog,
}

/// An authenticated identity session: token, service catalog and the HTTP
/// client used to obtain them.
#[derive(Debug, Clone)]
pub struct Session {
    http: Client,
    token: RedactedSecret,
    catalog: ServiceCatalog,
}

impl Session {
    /// Assemble a session from parts obtained elsewhere.
    pub fn new(http: Client, token: RedactedSecret, catalog: ServiceCatalog) -> Self {
        Self {
            http,
            token,
            catalog,
        }
    }

    /// Exchange `credentials` for a scoped token.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError`] if `OS_AUTH_URL` is missing or malformed, the
    /// request fails in transit, the service answers non-2xx, or the answer
    /// lacks a token header or a decodable body.
    pub async fn authenticate(
        credentials: &Credentials,
        timeout: Duration,
    ) -> Result<Self, IdentityError> {
        let url = tokens_url(credentials.auth_url.as_deref())?;
        let http = build_client(timeout)?;

        debug!("Requesting token from {url}");

        let response = http
            .post(url)
            .json(&password_grant_body(credentials))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(IdentityError::from_http_response(
                status.as_u16(),
                response.text().await.unwrap_or_default(),
            ));
        }

        let token = response
            .headers()
            .get(SUBJECT_TOKEN_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(RedactedSecret::new)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| IdentityError::missing_token())?;

        let body = response.bytes().await?;
        let envelope: TokenEnvelope = serde_json::from_slice(&body)?;

        info!(
            "Authenticated as {} (catalog has {} services)",
            credentials.username.as_deref().unwrap_or("<unset>"),
            envelope.token.catalog.services.len()
        );

        Ok(Self {
            http,
            token,
            catalog: envelope.token.catalog,
        })
    }

    pub fn http_client(&self) -> &Client {
        &self.http
    }

    pub fn token(&self) -> &RedactedSecret {
        &self.token
    }

    pub fn catalog(&self) -> &ServiceCatalog {
        &self.catalog
    }
}

/// `{auth_url}/v3/auth/tokens`, tolerating a trailing slash, an explicit
/// `/v3`, or a legacy `/v2.0` suffix on the configured URL.
#[track_caller]
pub(crate) fn tokens_url(auth_url: Option<&str>) -> Result<Url, IdentityError> {
    let raw = auth_url
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .ok_or_else(|| IdentityError::missing_auth_url())?;

    let trimmed = raw.trim_end_matches('/');
    let unversioned = trimmed
        .strip_suffix(IDENTITY_VERSION_SUFFIX)
        .or_else(|| trimmed.strip_suffix(LEGACY_VERSION_SUFFIX))
        .unwrap_or(trimmed);

    let base = Url::parse(&format!("{unversioned}{IDENTITY_VERSION_SUFFIX}/"))?;
    Ok(base.join(TOKENS_ENDPOINT)?)
}

/// Keystone v3 password method, project-scoped by name. Unset values are `null`.
pub(crate) fn password_grant_body(credentials: &Credentials) -> Value {
    json!({
        "auth": {
            "identity": {
                "methods": [PASSWORD_METHOD],
                "password": {
                    "user": {
                        "name": credentials.username,
                        "domain": { "name": credentials.user_domain_name },
                        "password": credentials.password.as_ref().map(RedactedSecret::expose),
                    }
                }
            },
            "scope": {
                "project": {
                    "name": credentials.project_name,
                    "domain": { "name": credentials.project_domain_name },
                }
            }
        }
    })
}
