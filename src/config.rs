//! Configuration management for Bakery UI
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_GENERATED, DEFAULT_DURATION_MS, MAX_DURATION_MS, TOAST_DEFAULT_WIDTH, TOAST_MAX_WIDTH, TOAST_MIN_WIDTH,
};
use crate::icons::IconTheme;
use crate::notification::{NotificationOptions, Position};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub toast: ToastConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Defaults applied to every toast the application creates
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    /// Placement: top-left, top-right, bottom-left, bottom-right, top-center, bottom-center
    pub position: Position,
    /// Auto-dismiss delay in milliseconds (0 = manual dismiss only)
    pub duration_ms: u64,
    /// Keep toasts on screen until closed
    pub persistent: bool,
    /// Offer a close affordance
    pub closable: bool,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub icon_theme: IconTheme,
    /// Toast width in columns
    pub width: u16,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to file
    pub enabled: bool,
    /// Level filter: off, error, warn, info, debug, trace
    pub level: String,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            position: Position::default(),
            duration_ms: DEFAULT_DURATION_MS,
            persistent: false,
            closable: true,
        }
    }
}

impl ToastConfig {
    /// Creation options carrying these defaults
    #[must_use]
    pub fn options(&self) -> NotificationOptions {
        NotificationOptions::new()
            .position(self.position)
            .duration_ms(self.duration_ms)
            .persistent(self.persistent)
            .closable(self.closable)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            icon_theme: IconTheme::default(),
            width: TOAST_DEFAULT_WIDTH,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parsed level filter
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        log::LevelFilter::from_str(&self.level).map_err(|_| {
            anyhow::anyhow!(
                "Invalid logging level '{}' (expected off, error, warn, info, debug or trace)",
                self.level
            )
        })
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("bakery-ui.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("bakery-ui").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.toast.duration_ms > MAX_DURATION_MS {
            anyhow::bail!(
                "toast.duration_ms cannot exceed {} (one hour), got {}",
                MAX_DURATION_MS,
                self.toast.duration_ms
            );
        }

        if self.ui.width < TOAST_MIN_WIDTH || self.ui.width > TOAST_MAX_WIDTH {
            anyhow::bail!(
                "ui.width must be between {} and {} columns, got {}",
                TOAST_MIN_WIDTH,
                TOAST_MAX_WIDTH,
                self.ui.width
            );
        }

        self.logging.level_filter()?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# Bakery UI Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("bakery-ui"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
