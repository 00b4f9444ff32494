//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use gelato_core::Flavor;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    // ─────────────────────────────────────────────────────────
    // Input
    // ─────────────────────────────────────────────────────────
    /// Keyboard event from terminal
    Key(InputKey),

    /// Periodic tick while no input is pending; drives animations
    Tick,

    // ─────────────────────────────────────────────────────────
    // Menu lifecycle
    // ─────────────────────────────────────────────────────────
    /// Kick off the one-shot menu load (screen activation)
    FetchMenu,

    /// Menu load completed with a validated flavor list
    MenuLoaded { flavors: Vec<Flavor> },

    /// Menu load failed; the screen stays empty
    MenuLoadFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────
    /// The grid selection moved to `index`; refreshes the detail pane
    FlavorSelected { index: usize },

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────
    /// Quit the application
    Quit,
}
