//! Configuration management for channel-picker.
//!
//! Handles:
//! - Debounce quiet periods
//! - TUI theme selection
//! - Display text overrides

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::debounce::{RELOAD_QUIET_PERIOD, SEARCH_QUIET_PERIOD};
use crate::error::{PickerError, Result};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Debounce quiet periods.
    #[serde(default)]
    pub debounce: DebounceConfig,
    /// TUI theme.
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Display text overrides.
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Load configuration from the default location, falling back to
    /// defaults when no file exists.
    pub fn load() -> Result<Self> {
        let config_path = default_config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PickerError::io(format!("Failed to read config file: {}", path.display()), e)
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| PickerError::InvalidConfig {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a specific path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| PickerError::InvalidConfig {
            message: format!("Failed to serialize config: {e}"),
        })?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                PickerError::io(format!("Failed to create directory: {}", parent.display()), e)
            })?;
        }
        std::fs::write(path, content)
            .map_err(|e| PickerError::io(format!("Failed to write config: {}", path.display()), e))
    }

    /// Check the enumerated/bounded fields.
    pub fn validate(&self) -> Result<()> {
        if self.debounce.search_ms == 0 {
            return Err(PickerError::InvalidConfig {
                message: "debounce.search_ms must be greater than zero".to_string(),
            });
        }
        if self.debounce.reload_ms == 0 {
            return Err(PickerError::InvalidConfig {
                message: "debounce.reload_ms must be greater than zero".to_string(),
            });
        }
        const THEMES: &[&str] = &["dark", "light", "high-contrast"];
        if !THEMES.contains(&self.theme.name.as_str()) {
            return Err(PickerError::InvalidConfig {
                message: format!(
                    "unknown theme '{}' (expected one of: {})",
                    self.theme.name,
                    THEMES.join(", ")
                ),
            });
        }
        Ok(())
    }
}

/// Debounce quiet periods, in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebounceConfig {
    /// Quiet period for search-as-you-type.
    #[serde(default = "default_search_ms")]
    pub search_ms: u64,
    /// Quiet period for directory reloads.
    #[serde(default = "default_reload_ms")]
    pub reload_ms: u64,
}

impl DebounceConfig {
    /// Search quiet period as a [`Duration`].
    #[must_use]
    pub fn search_period(&self) -> Duration {
        Duration::from_millis(self.search_ms)
    }

    /// Reload quiet period as a [`Duration`].
    #[must_use]
    pub fn reload_period(&self) -> Duration {
        Duration::from_millis(self.reload_ms)
    }
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            search_ms: default_search_ms(),
            reload_ms: default_reload_ms(),
        }
    }
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Theme name: dark, light, or high-contrast.
    #[serde(default = "default_theme")]
    pub name: String,
    /// Use Unicode characters for arrows and separators.
    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme(),
            unicode: true,
        }
    }
}

/// User-facing text shown by the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Input placeholder when nothing is selected.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    /// Message shown when a search matches nothing.
    #[serde(default = "default_no_matches")]
    pub no_matches_text: String,
    /// Message shown while the directory load is in flight.
    #[serde(default = "default_loading")]
    pub loading_text: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            no_matches_text: default_no_matches(),
            loading_text: default_loading(),
        }
    }
}

// Default value functions for serde
fn default_true() -> bool {
    true
}

fn default_search_ms() -> u64 {
    SEARCH_QUIET_PERIOD.as_millis() as u64
}

fn default_reload_ms() -> u64 {
    RELOAD_QUIET_PERIOD.as_millis() as u64
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_placeholder() -> String {
    "Select a channel".to_string()
}

fn default_no_matches() -> String {
    "We didn't find any matches.".to_string()
}

fn default_loading() -> String {
    "Loading teams...".to_string()
}

/// Get the default configuration path.
pub fn default_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().ok_or_else(|| PickerError::Unsupported {
        feature: "config directory discovery".to_string(),
    })?;

    Ok(config_dir.join("channel-picker").join("config.toml"))
}
