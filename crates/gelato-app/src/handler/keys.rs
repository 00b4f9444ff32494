//! Key event handlers for each screen phase

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, MenuPhase};

/// Convert key events to messages based on the current phase
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.phase {
        MenuPhase::Idle | MenuPhase::Loading => handle_key_loading(key),
        MenuPhase::Populated => handle_key_populated(state, key),
        MenuPhase::Failed => handle_key_failed(key),
    }
}

/// While loading only quitting is available
fn handle_key_loading(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// After a failed load the screen is inert apart from quitting
fn handle_key_failed(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Grid navigation; every selection move flows through `FlavorSelected`
fn handle_key_populated(state: &AppState, key: InputKey) -> Option<Message> {
    let selected = |index: Option<usize>| index.map(|index| Message::FlavorSelected { index });

    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        InputKey::Right | InputKey::Char('l') => selected(state.next_index()),
        InputKey::Left | InputKey::Char('h') => selected(state.previous_index()),
        InputKey::Down | InputKey::Char('j') => selected(state.index_below()),
        InputKey::Up | InputKey::Char('k') => selected(state.index_above()),
        InputKey::Home => selected(state.first_index()),
        InputKey::End => selected(state.last_index()),

        // Confirm the current cell (tap analog); re-selecting is idempotent
        InputKey::Enter => selected(state.selected),

        _ => None,
    }
}
