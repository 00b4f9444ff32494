//! Terminal event polling

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use gelato_app::{InputKey, Message};
use gelato_core::prelude::*;

/// Poll for terminal events with timeout
///
/// A poll timeout produces `Message::Tick` so the loading animation keeps
/// moving while no keys arrive. Key releases and repeats are ignored.
pub fn poll(tick: Duration) -> Result<Option<Message>> {
    if event::poll(tick)? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                Ok(to_input_key(&key).map(Message::Key))
            }
            _ => Ok(None),
        }
    } else {
        Ok(Some(Message::Tick))
    }
}

/// Map a crossterm key event onto the terminal-agnostic `InputKey`
fn to_input_key(key: &KeyEvent) -> Option<InputKey> {
    let input = match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => InputKey::CharCtrl(c),
        KeyCode::Char(c) => InputKey::Char(c),
        KeyCode::Up => InputKey::Up,
        KeyCode::Down => InputKey::Down,
        KeyCode::Left => InputKey::Left,
        KeyCode::Right => InputKey::Right,
        KeyCode::Home => InputKey::Home,
        KeyCode::End => InputKey::End,
        KeyCode::Enter => InputKey::Enter,
        KeyCode::Esc => InputKey::Esc,
        _ => return None,
    };
    Some(input)
}
