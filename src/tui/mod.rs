//! TUI presentation layer
//!
//! This module owns the terminal for the flavor-picker screen. It is
//! organized into focused submodules:
//!
//! - `runner`: Main entry point and event loop
//! - `spawn`: Background menu fetch
//! - `signals`: OS signal handling
//! - `event`: Terminal event handling
//! - `layout`: Layout calculation
//! - `render`: Frame rendering
//! - `terminal`: Terminal setup/restore
//! - `widgets`: Reusable UI components

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod signals;
pub mod spawn;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
