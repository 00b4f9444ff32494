//! # gelato-app - Screen State and Update Loop
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! flavor-picker screen: a [`Message`] enum, an [`AppState`] model, and an
//! [`update()`] function that the event loop drives. It stays free of
//! terminal types; keyboard input arrives as the abstract [`InputKey`].
//!
//! ## Public API
//!
//! ### State (`state`)
//! - [`AppState`] - Complete screen state (menu, selection, detail pane)
//! - [`MenuPhase`] - Screen lifecycle: Idle, Loading, Populated, Failed
//!
//! ### Messages (`message`)
//! - [`Message`] - Everything that can happen: keys, ticks, load results,
//!   selection moves
//!
//! ### Update (`handler`)
//! - [`update()`] - Applies one message to the state
//! - [`UpdateResult`] - Optional follow-up message plus optional action
//! - [`UpdateAction`] - Side effects for the event loop (spawn the load)

pub mod handler;
pub mod input_key;
pub mod message;
pub mod state;

// Re-export primary types
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, MenuPhase};
