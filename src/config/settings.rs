//! Settings parser for gelato.toml

use std::path::{Path, PathBuf};

use url::Url;

use super::types::Settings;
use gelato_core::prelude::*;
use gelato_menu::DEFAULT_MENU_URL;

const CONFIG_FILENAME: &str = "gelato.toml";
const GELATO_DIR: &str = "gelato";

/// Path of the user config file, if a config directory exists
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(GELATO_DIR).join(CONFIG_FILENAME))
}

/// Load settings from the user config directory
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings() -> Settings {
    match config_file_path() {
        Some(path) => load_settings_from(&path),
        None => {
            debug!("No user config directory, using default settings");
            Settings::default()
        }
    }
}

/// Load settings from an explicit file path
pub fn load_settings_from(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Resolve the menu URL from CLI flag, config file, and built-in default
///
/// Precedence: CLI > config file > built-in. The winner has to be a valid
/// http(s) URL; anything else is a config error.
pub fn resolve_menu_url(cli_url: Option<&str>, settings: &Settings) -> Result<Url> {
    let candidate = cli_url
        .or(settings.menu.url.as_deref())
        .unwrap_or(DEFAULT_MENU_URL);

    let parsed = Url::parse(candidate)
        .map_err(|e| Error::config(format!("Invalid menu URL {:?}: {}", candidate, e)))?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(Error::config(format!(
            "Unsupported menu URL scheme {:?} in {:?}",
            scheme, candidate
        ))),
    }
}
