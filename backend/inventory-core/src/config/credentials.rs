//! Identity credentials and endpoint selection from `OS_*` variables.
//!
//! Values are taken as-is: nothing here checks that a username or project
//! looks plausible. Absent values travel to the identity service as `null`
//! and its answer decides.

use crate::error::config::ConfigError;

use common::RedactedSecret;

use std::env;
use std::fmt;
use std::str::FromStr;

pub const AUTH_URL_ENV: &str = "OS_AUTH_URL";
pub const USERNAME_ENV: &str = "OS_USERNAME";
pub const PASSWORD_ENV: &str = "OS_PASSWORD";
pub const PROJECT_NAME_ENV: &str = "OS_PROJECT_NAME";
pub const USER_DOMAIN_NAME_ENV: &str = "OS_USER_DOMAIN_NAME";
pub const PROJECT_DOMAIN_NAME_ENV: &str = "OS_PROJECT_DOMAIN_NAME";
pub const INTERFACE_ENV: &str = "OS_INTERFACE";
pub const REGION_NAME_ENV: &str = "OS_REGION_NAME";

const LEGACY_INTERFACE_SUFFIX: &str = "URL";

/// Password-grant credentials.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub auth_url: Option<String>,
    pub username: Option<String>,
    pub password: Option<RedactedSecret>,
    pub project_name: Option<String>,
    pub user_domain_name: Option<String>,
    pub project_domain_name: Option<String>,
}

impl Credentials {
    /// Read the six credential variables at call time.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            auth_url: lookup(AUTH_URL_ENV),
            username: lookup(USERNAME_ENV),
            password: lookup(PASSWORD_ENV).map(RedactedSecret::from),
            project_name: lookup(PROJECT_NAME_ENV),
            user_domain_name: lookup(USER_DOMAIN_NAME_ENV),
            project_domain_name: lookup(PROJECT_DOMAIN_NAME_ENV),
        }
    }
}

/// Endpoint visibility class in the service catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EndpointInterface {
    #[default]
    Public,
    Internal,
    Admin,
}

impl EndpointInterface {
    pub fn as_str(&self) -> &'static str {
        match self {
            EndpointInterface::Public => "public",
            EndpointInterface::Internal => "internal",
            EndpointInterface::Admin => "admin",
        }
    }
}

impl fmt::Display for EndpointInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EndpointInterface {
    type Err = ConfigError;

    /// Accepts `public`, `internal`, `admin` and the older `publicURL` style.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let bare = trimmed
            .strip_suffix(LEGACY_INTERFACE_SUFFIX)
            .unwrap_or(trimmed);

        match bare.to_ascii_lowercase().as_str() {
            "public" => Ok(EndpointInterface::Public),
            "internal" => Ok(EndpointInterface::Internal),
            "admin" => Ok(EndpointInterface::Admin),
            _ => Err(ConfigError::parse(
                INTERFACE_ENV,
                value,
                "expected one of public, internal, admin",
            )),
        }
    }
}

/// Which catalog endpoint the compute client talks to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointSelection {
    pub interface: EndpointInterface,
    pub region: Option<String>,
}

impl EndpointSelection {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let interface = match lookup(INTERFACE_ENV).filter(|v| !v.trim().is_empty()) {
            Some(raw) => raw.parse()?,
            None => EndpointInterface::default(),
        };

        let region = lookup(REGION_NAME_ENV).filter(|v| !v.trim().is_empty());

        Ok(Self { interface, region })
    }
}
