//! OpenStack compute inventory for Ansible.
//!
//! - [`config`]: `OS_*` credentials and `OS_INVENTORY_*` settings
//! - [`identity`]: password-grant session and service catalog
//! - [`compute`]: "list servers" client and the marker paginator
//! - [`inventory`]: host vars, tag grouping and the scan driver

pub mod compute;
pub mod config;
pub mod error;
pub mod http;
pub mod identity;
pub mod inventory;

#[cfg(test)]
mod tests;

pub use compute::{ComputeApi, ComputeClient, ServerPaginator};
pub use config::{Credentials, EndpointInterface, EndpointSelection, InventoryConfig};
pub use error::CoreError;
pub use identity::Session;
pub use inventory::{GroupAccumulator, collect_inventory};
