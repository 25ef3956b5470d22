//! File logging for the toast demo and library consumers.
//!
//! The crate logs through the `log` facade. [`setup`] installs a `fern`
//! dispatcher writing timestamped lines to a file; the terminal is owned by
//! the TUI, so nothing is written to stdout or stderr.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use chrono::Local;
use std::path::{Path, PathBuf};

/// Install the global logger described by `config`.
///
/// Does nothing when logging is disabled. Returns the log file path otherwise.
pub fn setup(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let path = get_log_file_path()?;
    setup_with_file(config, &path)?;
    Ok(Some(path))
}

/// Install the global logger writing to `path`
pub fn setup_with_file(config: &LoggingConfig, path: &Path) -> Result<()> {
    let level = config.level_filter()?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    dispatch(level)
        .chain(file)
        .apply()
        .context("A global logger is already installed")?;

    log::info!("Logging to {} at level {}", path.display(), level);
    Ok(())
}

fn dispatch(level: log::LevelFilter) -> fern::Dispatch {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] {:<5} {}: {}",
                Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
}

/// Location of the log file: `<data_local_dir>/bakery-ui/bakery-ui.log`
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine local data directory"))
        .map(|dir| dir.join("bakery-ui").join("bakery-ui.log"))
}
