pub mod compute;
pub mod config;
pub mod identity;

pub use compute::ComputeError;
pub use config::ConfigError;
pub use identity::IdentityError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Identity(#[from] IdentityError),

    #[error(transparent)]
    Compute(#[from] ComputeError),
}
