use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ComputeError {
    #[error("Endpoint Not Found Error: {message} {location}")]
    EndpointNotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Compute Server Error: HTTP {status} - {message} {location}")]
    Server {
        status: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },
}

impl ComputeError {
    #[track_caller]
    pub fn endpoint_not_found(message: impl Into<String>) -> Self {
        ComputeError::EndpointNotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn from_http_response(status: u16, body: impl Into<String>) -> Self {
        ComputeError::Server {
            status: HttpStatusCode(status),
            message: body.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<url::ParseError> for ComputeError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        ComputeError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ComputeError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        ComputeError::Http {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for ComputeError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        ComputeError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
