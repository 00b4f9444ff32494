//! Gelato Library
//!
//! A TUI application for browsing a hosted ice-cream flavor menu. The
//! screen logic lives in the `gelato-app` crate; this crate wires it to a
//! real terminal, a real HTTP fetch, and the user's configuration.

// Module declarations
pub mod config;
pub mod headless;
pub mod tui;

// Re-export main entry points
pub use headless::print_menu;
pub use tui::run;
