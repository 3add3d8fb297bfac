pub mod checkin;
pub mod checkout;
pub mod config;
pub mod db;
pub mod events;
pub mod export;
pub mod init;
pub mod load;
pub mod log;
pub mod roster;
pub mod summary;

use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// Resolve the event id for roster/summary style commands: explicit argument
/// first, then `default_event` from the config.
pub(crate) fn resolve_event(arg: &Option<String>, cfg: &Config) -> AppResult<String> {
    if let Some(id) = arg {
        return Ok(id.clone());
    }
    if !cfg.default_event.is_empty() {
        return Ok(cfg.default_event.clone());
    }
    Err(AppError::NoEventSelected)
}
