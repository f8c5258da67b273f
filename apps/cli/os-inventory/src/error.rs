use common::ErrorLocation;

use inventory_core::CoreError;
use inventory_core::error::{ComputeError, ConfigError, IdentityError};

use thiserror::Error;

/// Everything that can end an inventory run.
#[derive(Debug, Error)]
pub enum OsInventoryError {
    /// Configuration, identity or compute failure.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The document could not be written to stdout.
    #[error("Render Error: {message} {location}")]
    Render {
        message: String,
        location: ErrorLocation,
    },

    #[error("Logger Error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl From<ConfigError> for OsInventoryError {
    fn from(error: ConfigError) -> Self {
        OsInventoryError::Core(CoreError::Config(error))
    }
}

impl From<IdentityError> for OsInventoryError {
    fn from(error: IdentityError) -> Self {
        OsInventoryError::Core(CoreError::Identity(error))
    }
}

impl From<ComputeError> for OsInventoryError {
    fn from(error: ComputeError) -> Self {
        OsInventoryError::Core(CoreError::Compute(error))
    }
}
