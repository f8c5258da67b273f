//! Logging for the inventory script.
//!
//! stdout belongs to the inventory document, so every record goes to stderr.

use crate::error::OsInventoryError;

use common::ErrorLocation;

use std::env;
use std::io::stderr;
use std::panic::Location;
use std::str::FromStr;
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::Color::{Blue, Green, Magenta, Red, Yellow};
use fern::colors::ColoredLevelConfig;
use humantime::format_rfc3339;
use log::{LevelFilter, debug, warn};

/// Thread-safe initialization guard.
static INIT_LOGGER_ONCE: Once = Once::new();

/// Tracks if logger initialization was already attempted.
static LOGGER_ALREADY_CALLED: AtomicBool = AtomicBool::new(false);

pub const LOG_LEVEL_ENV: &str = "OS_INVENTORY_LOG_LEVEL";

const LOGGER_INITIALIZED_MESSAGE_PREFIX: &str = "Logger initialized with level: ";
const LOGGER_ALREADY_INITIALIZED_MESSAGE: &str = "Logger already initialized";

#[cfg(debug_assertions)]
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

#[cfg(not(debug_assertions))]
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

/// `OS_INVENTORY_LOG_LEVEL` if set and valid, else the build default.
pub fn level_from_env() -> LevelFilter {
    level_from_lookup(|name| env::var(name).ok())
}

/// Unknown level names fall back to the build default.
pub fn level_from_lookup<F>(lookup: F) -> LevelFilter
where
    F: Fn(&str) -> Option<String>,
{
    lookup(LOG_LEVEL_ENV)
        .and_then(|raw| LevelFilter::from_str(raw.trim()).ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}

/// Install the stderr logger at `level`.
///
/// Safe to call more than once: later calls log a warning and return Ok.
///
/// # Errors
///
/// Returns [`OsInventoryError::Logger`] if another logger is already installed.
pub fn initialize(level: LevelFilter) -> Result<(), OsInventoryError> {
    if LOGGER_ALREADY_CALLED.swap(true, Ordering::SeqCst) {
        warn!("{LOGGER_ALREADY_INITIALIZED_MESSAGE}");
        return Ok(());
    }

    let mut result = Ok(());

    INIT_LOGGER_ONCE.call_once(|| {
        result = initialize_internal(level);
        if result.is_ok() {
            debug!("{LOGGER_INITIALIZED_MESSAGE_PREFIX}{level:?}");
        }
    });

    result
}

#[track_caller]
fn initialize_internal(level: LevelFilter) -> Result<(), OsInventoryError> {
    let color_configuration = ColoredLevelConfig::new()
        .debug(Blue)
        .info(Green)
        .warn(Yellow)
        .error(Red)
        .trace(Magenta);

    Dispatch::new()
        .level(level)
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{file}:{line}]",
                date = format_rfc3339(SystemTime::now()),
                level = color_configuration.color(record.level()),
                message = message,
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0),
            ))
        })
        .chain(stderr())
        .apply()
        .map_err(|e| OsInventoryError::Logger {
            message: format!("Failed to initialize logger: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })
}
