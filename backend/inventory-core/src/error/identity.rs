//! Errors raised while exchanging credentials for a token.
//!
//! - HTTP status codes stored directly (not parsed from strings)
//! - 4xx and 5xx kept apart so a bad password reads differently from an outage
//! - `#[track_caller]` conversions for automatic location capture

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum IdentityError {
    #[error("Missing Auth URL Error: OS_AUTH_URL is not set {location}")]
    MissingAuthUrl { location: ErrorLocation },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
    },

    #[error("Credentials Rejected: HTTP {status} - {message} {location}")]
    Rejected {
        status: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },

    #[error("Identity Server Error: HTTP {status} - {message} {location}")]
    Server {
        status: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },

    #[error("Missing Token Error: response carried no X-Subject-Token header {location}")]
    MissingToken { location: ErrorLocation },

    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },
}

impl IdentityError {
    #[track_caller]
    pub fn missing_auth_url() -> Self {
        IdentityError::MissingAuthUrl {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_token() -> Self {
        IdentityError::MissingToken {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Classify a non-success response from the token endpoint.
    #[track_caller]
    pub fn from_http_response(status: u16, body: impl Into<String>) -> Self {
        let status = HttpStatusCode(status);
        let message = body.into();
        if status.is_client_error() {
            IdentityError::Rejected {
                status,
                message,
                location: ErrorLocation::from(Location::caller()),
            }
        } else {
            IdentityError::Server {
                status,
                message,
                location: ErrorLocation::from(Location::caller()),
            }
        }
    }
}

impl From<url::ParseError> for IdentityError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        IdentityError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for IdentityError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        IdentityError::Http {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for IdentityError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        IdentityError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
