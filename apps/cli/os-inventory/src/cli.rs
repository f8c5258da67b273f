//! Command-line surface of the inventory script.
//!
//! Ansible calls the script with `--list`; `--refresh` is accepted for
//! compatibility with older wrappers. Neither changes the output: the full
//! inventory is always rebuilt from the cloud.

use crate::error::OsInventoryError;

use inventory_core::{
    ComputeClient, Credentials, EndpointSelection, InventoryConfig, Session, collect_inventory,
};

use models::InventoryDocument;

use std::env;

use clap::Parser;
use log::debug;

/// Ansible dynamic inventory for OpenStack compute.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "os-inventory", version, about)]
pub struct Cli {
    /// List every host and group (the default and only mode).
    #[arg(long)]
    pub list: bool,

    /// Accepted and ignored; the inventory is never cached.
    #[arg(long)]
    pub refresh: bool,
}

/// Build the inventory from the process environment.
pub async fn run(cli: &Cli) -> Result<InventoryDocument, OsInventoryError> {
    run_with_lookup(cli, |name| env::var(name).ok()).await
}

/// Build the inventory reading every setting through `lookup`.
///
/// # Errors
///
/// The first configuration, identity or compute failure; nothing partial is returned.
pub async fn run_with_lookup<F>(cli: &Cli, lookup: F) -> Result<InventoryDocument, OsInventoryError>
where
    F: Fn(&str) -> Option<String>,
{
    debug!("Invoked with list={} refresh={}", cli.list, cli.refresh);

    let config = InventoryConfig::from_lookup(&lookup)?;
    let selection = EndpointSelection::from_lookup(&lookup)?;
    let credentials = Credentials::from_lookup(&lookup);

    let session = Session::authenticate(&credentials, config.timeout).await?;
    let compute = ComputeClient::from_session(&session, &selection)?;

    Ok(collect_inventory(&compute, &config).await?)
}
