//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per screen phase

pub(crate) mod keys;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

// Re-export functions used by internal tests
#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateAction {
    /// Spawn the one-shot menu load task
    LoadMenu,
}

/// Result of an update: optional follow-up message plus optional action
#[derive(Debug)]
pub struct UpdateResult {
    /// Message to feed back through `update` immediately
    pub message: Option<Message>,

    /// Side effect for the event loop
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    /// No follow-up, no side effect
    pub fn none() -> Self {
        Self {
            message: None,
            action: None,
        }
    }

    /// Follow-up message only
    pub fn message(message: Message) -> Self {
        Self {
            message: Some(message),
            action: None,
        }
    }

    /// Side effect only
    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
