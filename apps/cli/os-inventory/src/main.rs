use os_inventory::cli::{Cli, run};
use os_inventory::logger::{initialize as LoggerInitialize, level_from_env};
use os_inventory::render::write_inventory;

use inventory_core::config::dotenv::load_dotenv;

use std::io::stdout;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Before the logger so OS_INVENTORY_LOG_LEVEL may come from .env
    let dotenv = load_dotenv();

    if let Err(e) = LoggerInitialize(level_from_env()) {
        eprintln!("warning: {e}");
    }

    match &dotenv.path {
        Some(path) => info!("Environment supplemented from {}", path.display()),
        None => debug!("No .env file loaded"),
    }

    let result = run(&cli)
        .await
        .and_then(|document| write_inventory(stdout().lock(), &document));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
