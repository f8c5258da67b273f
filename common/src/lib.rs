//! Shared building blocks for the inventory workspace.
//!
//! ## Architecture
//!
//! - **common** (this crate): error location tracking, secret handling, HTTP status helpers
//! - **models**: pure data structures (server records, host vars, inventory document)
//! - **inventory-core**: identity, compute pagination, host-vars and grouping logic
//! - **os-inventory**: CLI wiring, logging and rendering
//!
//! Nothing in here talks to the network.

pub mod error;
pub mod http_status;
pub mod redacted_secret;

#[cfg(test)]
mod tests;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_secret::RedactedSecret;
