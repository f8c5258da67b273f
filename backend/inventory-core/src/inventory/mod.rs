//! Server records in, inventory document out.

pub mod groups;
pub mod host_vars;

pub use groups::GroupAccumulator;

use crate::compute::{ComputeApi, ServerPaginator};
use crate::config::InventoryConfig;
use crate::error::compute::ComputeError;

use models::{InventoryDocument, ServerRecord};

use log::info;

/// Page through every server and fold it into one document.
///
/// # Errors
///
/// The first [`ComputeError`] aborts the scan; nothing partial is returned.
pub async fn collect_inventory<C: ComputeApi>(
    client: &C,
    config: &InventoryConfig,
) -> Result<InventoryDocument, ComputeError> {
    let mut paginator = ServerPaginator::new(client, config.page_size);
    let mut accumulator = GroupAccumulator::new(&config.stack_key, &config.group_key);

    while let Some(server) = paginator.next().await? {
        let vars = host_vars::build(&server, &config.preferred_network);
        accumulator.add(&server, vars);
    }

    info!(
        "Collected {} servers in {} requests",
        accumulator.host_count(),
        paginator.pages_fetched()
    );

    Ok(accumulator.finish())
}

/// Same transform over records already in memory.
pub fn inventory_from_records<'a, I>(records: I, config: &InventoryConfig) -> InventoryDocument
where
    I: IntoIterator<Item = &'a ServerRecord>,
{
    let mut accumulator = GroupAccumulator::new(&config.stack_key, &config.group_key);
    for server in records {
        accumulator.add(server, host_vars::build(server, &config.preferred_network));
    }
    accumulator.finish()
}
