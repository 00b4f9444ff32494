//! Configuration types for Gelato
//!
//! Defines:
//! - `Settings` - Global application settings
//! - `MenuSettings` / `UiSettings` - The `[menu]` and `[ui]` sections

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Application settings (gelato.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    /// Menu fetch settings
    #[serde(default)]
    pub menu: MenuSettings,

    /// UI tuning
    #[serde(default)]
    pub ui: UiSettings,
}

/// `[menu]` section
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MenuSettings {
    /// Menu document URL (overrides the built-in hosted menu)
    #[serde(default)]
    pub url: Option<String>,

    /// Fetch timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self {
            url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl MenuSettings {
    /// Fetch timeout as a `Duration`
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_timeout_secs() -> u64 {
    10
}

/// `[ui]` section
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Event poll interval in milliseconds (drives the tick rate)
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
        }
    }
}

impl UiSettings {
    /// Poll interval as a `Duration`
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

fn default_tick_ms() -> u64 {
    50
}
