//! Configuration management for stardo
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    APP_DIR_NAME, CARD_DEFAULT_WIDTH, CARD_MAX_WIDTH, CARD_MIN_WIDTH, CONFIG_GENERATED, TICK_RATE_DEFAULT_MS,
    TICK_RATE_MAX_MS, TICK_RATE_MIN_MS,
};
use crate::icons::IconTheme;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable mouse support (clicks and the pointer-following gradient)
    pub mouse_enabled: bool,
    /// Start in dark mode instead of light mode
    pub start_dark: bool,
    /// Glyph set for buttons and task markers
    /// Options: "ascii", "unicode", "emoji"
    pub icon_theme: IconTheme,
    /// Width of the to-do card in columns
    pub card_width: u16,
    /// Animation tick in milliseconds
    pub tick_rate_ms: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write log records to a file in the data directory
    pub enabled: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            start_dark: false,
            icon_theme: IconTheme::Unicode,
            card_width: CARD_DEFAULT_WIDTH,
            tick_rate_ms: TICK_RATE_DEFAULT_MS,
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file();

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
    fn find_config_file() -> Option<PathBuf> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("stardo.toml");
        if current_dir_config.exists() {
            return Some(current_dir_config);
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(APP_DIR_NAME).join("config.toml");
            if xdg_config.exists() {
                return Some(xdg_config);
            }
        }

        None
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ui.card_width < CARD_MIN_WIDTH || self.ui.card_width > CARD_MAX_WIDTH {
            anyhow::bail!(
                "card_width must be between {} and {} columns, got {}",
                CARD_MIN_WIDTH,
                CARD_MAX_WIDTH,
                self.ui.card_width
            );
        }

        if self.ui.tick_rate_ms < TICK_RATE_MIN_MS || self.ui.tick_rate_ms > TICK_RATE_MAX_MS {
            anyhow::bail!(
                "tick_rate_ms must be between {} and {}, got {}",
                TICK_RATE_MIN_MS,
                TICK_RATE_MAX_MS,
                self.ui.tick_rate_ms
            );
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# stardo Configuration File\n# Generated on {}\n\n",
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
            .map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
