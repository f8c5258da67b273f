pub mod credentials;
pub mod dotenv;

pub use credentials::{Credentials, EndpointInterface, EndpointSelection};

use crate::error::config::ConfigError;

use std::env;
use std::num::NonZeroU32;
use std::time::Duration;

use log::debug;

pub const PAGE_SIZE_ENV: &str = "OS_INVENTORY_PAGE_SIZE";
pub const STACK_KEY_ENV: &str = "OS_INVENTORY_STACK_KEY";
pub const GROUP_KEY_ENV: &str = "OS_INVENTORY_GROUP_KEY";
pub const PREFERRED_NETWORK_ENV: &str = "OS_INVENTORY_PREFERRED_NETWORK";
pub const TIMEOUT_SECS_ENV: &str = "OS_INVENTORY_TIMEOUT_SECS";

const MAX_TIMEOUT_SECS: u64 = 600;

const DEFAULT_PAGE_SIZE: NonZeroU32 = match NonZeroU32::new(100) {
    Some(size) => size,
    None => panic!("default page size must be non-zero"),
};

// ============================================
// DEFAULTS
// ============================================

fn default_page_size() -> NonZeroU32 {
    DEFAULT_PAGE_SIZE
}
fn default_stack_key() -> String {
    "stack".to_string()
}
fn default_group_key() -> String {
    "group".to_string()
}
/// Edit via `OS_INVENTORY_PREFERRED_NETWORK` to match the site's network naming.
fn default_preferred_network() -> String {
    "somethingweird".to_string()
}
fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

// ============================================
// CONFIG STRUCT
// ============================================

/// Knobs for one inventory run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryConfig {
    /// Servers requested per "list servers" call.
    pub page_size: NonZeroU32,
    /// Metadata key whose value names the stack.
    pub stack_key: String,
    /// Metadata key whose value names the application group.
    pub group_key: String,
    /// Network whose first IPv4 address wins for `ansible_host`.
    pub preferred_network: String,
    /// Per-request HTTP timeout.
    pub timeout: Duration,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            stack_key: default_stack_key(),
            group_key: default_group_key(),
            preferred_network: default_preferred_network(),
            timeout: default_timeout(),
        }
    }
}

// ============================================
// IMPLEMENTATION
// ============================================

impl InventoryConfig {
    /// Defaults overridden by `OS_INVENTORY_*` variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`InventoryConfig::from_env`] but reads through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for non-numeric numbers and
    /// [`ConfigError::Validation`] for out-of-range values.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(PAGE_SIZE_ENV) {
            let size: u32 = raw
                .trim()
                .parse()
                .map_err(|e: std::num::ParseIntError| {
                    ConfigError::parse(PAGE_SIZE_ENV, raw.as_str(), e.to_string())
                })?;
            config.page_size = NonZeroU32::new(size).ok_or_else(|| {
                ConfigError::validation(format!("{PAGE_SIZE_ENV} must be a positive integer"))
            })?;
        }

        if let Some(key) = lookup(STACK_KEY_ENV) {
            config.stack_key = key;
        }

        if let Some(key) = lookup(GROUP_KEY_ENV) {
            config.group_key = key;
        }

        if let Some(network) = lookup(PREFERRED_NETWORK_ENV) {
            config.preferred_network = network;
        }

        if let Some(raw) = lookup(TIMEOUT_SECS_ENV) {
            let secs: u64 = raw
                .trim()
                .parse()
                .map_err(|e: std::num::ParseIntError| {
                    ConfigError::parse(TIMEOUT_SECS_ENV, raw.as_str(), e.to_string())
                })?;
            config.timeout = Duration::from_secs(secs);
        }

        config.validate()?;

        debug!(
            "Inventory config: page_size={}, stack_key={}, group_key={}, preferred_network={}, timeout={:?}",
            config.page_size,
            config.stack_key,
            config.group_key,
            config.preferred_network,
            config.timeout
        );
        Ok(config)
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stack_key.is_empty() {
            return Err(ConfigError::validation(format!(
                "{STACK_KEY_ENV} cannot be empty"
            )));
        }

        if self.group_key.is_empty() {
            return Err(ConfigError::validation(format!(
                "{GROUP_KEY_ENV} cannot be empty"
            )));
        }

        if self.preferred_network.is_empty() {
            return Err(ConfigError::validation(format!(
                "{PREFERRED_NETWORK_ENV} cannot be empty"
            )));
        }

        let secs = self.timeout.as_secs();
        if secs == 0 || secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::validation(format!(
                "Invalid timeout: {secs}s (must be 1-{MAX_TIMEOUT_SECS})"
            )));
        }

        Ok(())
    }
}
