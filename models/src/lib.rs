//! Domain models for the inventory.
//!
//! This crate contains pure data structures: the server records the compute
//! API hands us, the host variables derived from them, and the inventory
//! document Ansible consumes. No I/O and no grouping policy live here; that
//! is `inventory-core`'s job.
//!
//! Every map is an [`indexmap::IndexMap`] so provider order and discovery
//! order survive serialization.

pub mod host_vars;
pub mod inventory;
pub mod server_record;


pub use host_vars::HostVars;
pub use inventory::{InventoryDocument, InventoryGroup};
pub use server_record::{InterfaceAddress, ServerRecord};
