//! Configuration for Gelato
//!
//! Supports:
//! - `gelato.toml` in the user config directory - Global settings
//! - CLI flags - One-off overrides (highest precedence)

pub mod settings;
pub mod types;

pub use settings::{config_file_path, load_settings, load_settings_from, resolve_menu_url};
pub use types::*;
