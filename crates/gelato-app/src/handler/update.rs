//! Main update function (Update in TEA pattern)

use tracing::{error, info, warn};

use super::{keys, UpdateAction, UpdateResult};
use crate::message::Message;
use crate::state::{AppState, MenuPhase};

/// Apply one message to the state
///
/// Returns an optional follow-up message (fed straight back through
/// `update` by the event loop) and an optional side effect.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match keys::handle_key(state, key) {
            Some(message) => UpdateResult::message(message),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            if state.is_loading() {
                state.tick();
            }
            UpdateResult::none()
        }

        Message::FetchMenu => {
            // Single-shot load: only valid from Idle
            if state.phase != MenuPhase::Idle {
                warn!("FetchMenu ignored in phase {:?}", state.phase);
                return UpdateResult::none();
            }
            state.begin_loading();
            UpdateResult::action(UpdateAction::LoadMenu)
        }

        Message::MenuLoaded { flavors } => {
            if state.phase != MenuPhase::Loading {
                warn!("MenuLoaded ignored in phase {:?}", state.phase);
                return UpdateResult::none();
            }
            info!("Menu populated with {} flavors", flavors.len());
            match state.set_flavors(flavors) {
                Some(index) => UpdateResult::message(Message::FlavorSelected { index }),
                None => UpdateResult::none(),
            }
        }

        Message::MenuLoadFailed { error } => {
            if state.phase != MenuPhase::Loading {
                warn!("MenuLoadFailed ignored in phase {:?}", state.phase);
                return UpdateResult::none();
            }
            error!("Menu load failed: {}", error);
            state.set_load_error(error);
            UpdateResult::none()
        }

        Message::FlavorSelected { index } => {
            state.select(index);
            UpdateResult::none()
        }

        Message::Quit => {
            info!("Quit requested");
            state.quit();
            UpdateResult::none()
        }
    }
}
