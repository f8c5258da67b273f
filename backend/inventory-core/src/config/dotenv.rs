//! Optional `.env` loading ahead of reading `OS_*` variables.
//!
//! Variables already present in the process environment win over the file.

use std::env::current_exe;
use std::path::PathBuf;

use log::{debug, info, warn};

const DOTENV_FILE_NAME: &str = ".env";

/// Result of attempting to load a `.env` file.
#[derive(Debug)]
pub struct EnvLoadResult {
    /// Path to the loaded file, if any.
    pub path: Option<PathBuf>,
}

/// Load `.env` from the working directory, then from the executable's directory.
///
/// Never fails: a missing file is normal and a malformed one is logged and skipped.
pub fn load_dotenv() -> EnvLoadResult {
    if let Ok(path) = dotenvy::dotenv() {
        info!("Loaded .env from: {}", path.display());
        return EnvLoadResult {
            path: Some(path),
        };
    }

    if let Ok(exe_path) = current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        let env_path = exe_dir.join(DOTENV_FILE_NAME);
        if env_path.exists() {
            match dotenvy::from_path(&env_path) {
                Ok(()) => {
                    info!("Loaded .env from: {}", env_path.display());
                    return EnvLoadResult {
                        path: Some(env_path),
                    };
                }
                Err(e) => {
                    warn!("Failed to parse .env at {}: {e}", env_path.display());
                }
            }
        }
    }

    debug!("No .env file found - using process environment only");
    EnvLoadResult {
        path: None,
    }
}
