//! Tests for handler module

use super::*;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, MenuPhase};
use gelato_core::Flavor;

/// Helper to create a test flavor
fn sample_flavor(name: &str, image: &str) -> Flavor {
    Flavor {
        name: name.to_string(),
        image: image.to_string(),
    }
}

fn sample_menu() -> Vec<Flavor> {
    vec![
        sample_flavor("Vanilla", "vanilla.png"),
        sample_flavor("Chocolate", "chocolate.png"),
        sample_flavor("Rocky Road", "rocky.png"),
        sample_flavor("Mint", "mint.png"),
    ]
}

/// Feed a message and every follow-up it produces, collecting both the
/// emitted messages and the requested actions.
fn drive(state: &mut AppState, first: Message) -> (Vec<Message>, Vec<UpdateAction>) {
    let mut emitted = Vec::new();
    let mut actions = Vec::new();
    let mut next = Some(first);

    while let Some(message) = next.take() {
        let result = update(state, message);
        if let Some(action) = result.action {
            actions.push(action);
        }
        if let Some(follow_up) = result.message {
            emitted.push(follow_up.clone());
            next = Some(follow_up);
        }
    }

    (emitted, actions)
}

fn count_selections(messages: &[Message]) -> usize {
    messages
        .iter()
        .filter(|m| matches!(m, Message::FlavorSelected { .. }))
        .count()
}

// ─────────────────────────────────────────────────────────────
// Activation and loading
// ─────────────────────────────────────────────────────────────

#[test]
fn test_fetch_menu_enters_loading_and_spawns_load() {
    let mut state = AppState::new();

    let result = update(&mut state, Message::FetchMenu);

    assert_eq!(state.phase, MenuPhase::Loading);
    assert!(state.is_loading());
    assert_eq!(result.action, Some(UpdateAction::LoadMenu));
    assert!(result.message.is_none());
}

#[test]
fn test_fetch_menu_ignored_outside_idle() {
    let mut state = AppState::new();
    update(&mut state, Message::FetchMenu);

    // Second activation while loading must not restart the load
    let result = update(&mut state, Message::FetchMenu);
    assert!(result.action.is_none());

    // Nor after population
    update(
        &mut state,
        Message::MenuLoaded {
            flavors: sample_menu(),
        },
    );
    let result = update(&mut state, Message::FetchMenu);
    assert!(result.action.is_none());
    assert_eq!(state.phase, MenuPhase::Populated);
}

#[test]
fn test_tick_animates_only_while_loading() {
    let mut state = AppState::new();

    update(&mut state, Message::Tick);
    assert_eq!(state.animation_frame, 0);

    update(&mut state, Message::FetchMenu);
    update(&mut state, Message::Tick);
    update(&mut state, Message::Tick);
    assert_eq!(state.animation_frame, 2);
}

// ─────────────────────────────────────────────────────────────
// Load success
// ─────────────────────────────────────────────────────────────

#[test]
fn test_menu_loaded_populates_and_selects_first() {
    let mut state = AppState::new();
    update(&mut state, Message::FetchMenu);

    let (emitted, _) = drive(
        &mut state,
        Message::MenuLoaded {
            flavors: sample_menu(),
        },
    );

    assert_eq!(state.phase, MenuPhase::Populated);
    assert!(!state.is_loading());
    assert_eq!(state.selected, Some(0));
    assert_eq!(state.detail.as_ref().map(|f| f.name.as_str()), Some("Vanilla"));
    // Exactly one selection-changed emission for the auto-select
    assert_eq!(count_selections(&emitted), 1);
}

#[test]
fn test_menu_loaded_empty_list_selects_nothing() {
    let mut state = AppState::new();
    update(&mut state, Message::FetchMenu);

    let (emitted, _) = drive(&mut state, Message::MenuLoaded { flavors: vec![] });

    assert_eq!(state.phase, MenuPhase::Populated);
    assert!(state.selected.is_none());
    assert!(state.detail.is_none());
    assert_eq!(count_selections(&emitted), 0);
}

#[test]
fn test_menu_loaded_parsed_survivors_scenario() {
    // The parser already dropped the malformed entry; the screen sees
    // only the survivors, in document order.
    let mut state = AppState::new();
    update(&mut state, Message::FetchMenu);

    let (emitted, _) = drive(
        &mut state,
        Message::MenuLoaded {
            flavors: vec![
                sample_flavor("Vanilla", "vanilla.png"),
                sample_flavor("Rocky Road", "rocky.png"),
            ],
        },
    );

    assert_eq!(state.flavors.len(), 2);
    assert_eq!(state.flavors[1].name, "Rocky Road");
    assert_eq!(state.selected, Some(0));
    assert_eq!(state.detail.as_ref().map(|f| f.name.as_str()), Some("Vanilla"));
    assert_eq!(count_selections(&emitted), 1);
}

#[test]
fn test_menu_loaded_ignored_when_not_loading() {
    let mut state = AppState::new();

    // Completion arriving before any activation is discarded
    let result = update(
        &mut state,
        Message::MenuLoaded {
            flavors: sample_menu(),
        },
    );

    assert_eq!(state.phase, MenuPhase::Idle);
    assert!(state.flavors.is_empty());
    assert!(result.message.is_none());
}

// ─────────────────────────────────────────────────────────────
// Load failure
// ─────────────────────────────────────────────────────────────

#[test]
fn test_menu_load_failed_enters_failed_state() {
    let mut state = AppState::new();
    update(&mut state, Message::FetchMenu);

    let (emitted, _) = drive(
        &mut state,
        Message::MenuLoadFailed {
            error: "Transport error: HTTP 500".to_string(),
        },
    );

    assert_eq!(state.phase, MenuPhase::Failed);
    assert!(!state.is_loading()); // indicator hidden
    assert!(state.flavors.is_empty());
    assert!(state.selected.is_none());
    assert!(state.detail.is_none()); // no detail update on failure
    assert_eq!(count_selections(&emitted), 0);
    assert!(state.load_error.as_deref().unwrap().contains("HTTP 500"));
}

#[test]
fn test_second_failure_leaves_state_unchanged() {
    let mut state = AppState::new();
    update(&mut state, Message::FetchMenu);
    update(
        &mut state,
        Message::MenuLoadFailed {
            error: "boom".to_string(),
        },
    );
    let snapshot = state.clone();

    update(
        &mut state,
        Message::MenuLoadFailed {
            error: "boom again".to_string(),
        },
    );

    assert_eq!(state.phase, snapshot.phase);
    assert_eq!(state.flavors, snapshot.flavors);
    assert_eq!(state.selected, snapshot.selected);
    assert_eq!(state.load_error, snapshot.load_error);
}

#[test]
fn test_late_success_after_failure_is_discarded() {
    let mut state = AppState::new();
    update(&mut state, Message::FetchMenu);
    update(
        &mut state,
        Message::MenuLoadFailed {
            error: "timeout".to_string(),
        },
    );

    let result = update(
        &mut state,
        Message::MenuLoaded {
            flavors: sample_menu(),
        },
    );

    assert_eq!(state.phase, MenuPhase::Failed);
    assert!(state.flavors.is_empty());
    assert!(result.message.is_none());
}

// ─────────────────────────────────────────────────────────────
// Selection and navigation
// ─────────────────────────────────────────────────────────────

fn populated_state() -> AppState {
    let mut state = AppState::new();
    update(&mut state, Message::FetchMenu);
    drive(
        &mut state,
        Message::MenuLoaded {
            flavors: sample_menu(),
        },
    );
    state
}

#[test]
fn test_right_key_moves_selection() {
    let mut state = populated_state();

    let message = handle_key(&state, InputKey::Right);
    assert!(matches!(message, Some(Message::FlavorSelected { index: 1 })));

    drive(&mut state, Message::Key(InputKey::Right));
    assert_eq!(state.selected, Some(1));
    assert_eq!(state.detail.as_ref().map(|f| f.name.as_str()), Some("Chocolate"));
}

#[test]
fn test_left_key_wraps_backwards() {
    let mut state = populated_state();

    drive(&mut state, Message::Key(InputKey::Left));

    assert_eq!(state.selected, Some(3));
    assert_eq!(state.detail.as_ref().map(|f| f.name.as_str()), Some("Mint"));
}

#[test]
fn test_vim_keys_navigate() {
    let mut state = populated_state();

    drive(&mut state, Message::Key(InputKey::Char('l')));
    assert_eq!(state.selected, Some(1));

    drive(&mut state, Message::Key(InputKey::Char('h')));
    assert_eq!(state.selected, Some(0));

    drive(&mut state, Message::Key(InputKey::Char('j')));
    assert_eq!(state.selected, Some(3));

    drive(&mut state, Message::Key(InputKey::Char('k')));
    assert_eq!(state.selected, Some(0));
}

#[test]
fn test_down_key_moves_one_row() {
    // 3-column grid: 0 1 2 / 3
    let mut state = populated_state();

    drive(&mut state, Message::Key(InputKey::Down));
    assert_eq!(state.selected, Some(3));

    drive(&mut state, Message::Key(InputKey::Up));
    assert_eq!(state.selected, Some(0));
}

#[test]
fn test_home_end_keys() {
    let mut state = populated_state();

    drive(&mut state, Message::Key(InputKey::End));
    assert_eq!(state.selected, Some(3));

    drive(&mut state, Message::Key(InputKey::Home));
    assert_eq!(state.selected, Some(0));
}

#[test]
fn test_enter_reconfirms_selection() {
    let mut state = populated_state();
    let detail_before = state.detail.clone();

    drive(&mut state, Message::Key(InputKey::Enter));

    assert_eq!(state.selected, Some(0));
    assert_eq!(state.detail, detail_before);
}

#[test]
fn test_navigation_ignored_while_loading() {
    let mut state = AppState::new();
    update(&mut state, Message::FetchMenu);

    assert!(handle_key(&state, InputKey::Right).is_none());
    assert!(handle_key(&state, InputKey::Down).is_none());
    assert!(handle_key(&state, InputKey::Enter).is_none());
}

#[test]
fn test_navigation_ignored_after_failure() {
    let mut state = AppState::new();
    update(&mut state, Message::FetchMenu);
    update(
        &mut state,
        Message::MenuLoadFailed {
            error: "boom".to_string(),
        },
    );

    assert!(handle_key(&state, InputKey::Right).is_none());
    assert!(matches!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::Quit)
    ));
}

#[test]
fn test_selection_always_valid_or_none() {
    let mut state = populated_state();

    // Walk the whole grid in every direction
    for key in [
        InputKey::Right,
        InputKey::Right,
        InputKey::Down,
        InputKey::Left,
        InputKey::Up,
        InputKey::End,
        InputKey::Right, // wraps to 0
    ] {
        drive(&mut state, Message::Key(key));
        let index = state.selected.unwrap();
        assert!(index < state.flavors.len());
    }
}

// ─────────────────────────────────────────────────────────────
// Quit
// ─────────────────────────────────────────────────────────────

fn loading_state() -> AppState {
    let mut state = AppState::new();
    update(&mut state, Message::FetchMenu);
    state
}

#[test]
fn test_q_key_quits_in_every_phase() {
    for build in [AppState::new as fn() -> AppState, loading_state, populated_state] {
        let mut state = build();
        drive(&mut state, Message::Key(InputKey::Char('q')));
        assert!(state.should_quit());
    }
}

#[test]
fn test_ctrl_c_quits() {
    let mut state = populated_state();
    drive(&mut state, Message::Key(InputKey::CharCtrl('c')));
    assert!(state.should_quit());
}

#[test]
fn test_esc_quits() {
    let mut state = populated_state();
    drive(&mut state, Message::Key(InputKey::Esc));
    assert!(state.should_quit());
}
