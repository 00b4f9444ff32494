//! Main TUI runner - terminal ownership and the event loop

use tokio::sync::mpsc;
use url::Url;

use gelato_app::{update, AppState, Message, UpdateAction};
use gelato_core::prelude::*;
use gelato_menu::HttpMenu;

use super::{event, render, signals, spawn, terminal};
use crate::config::Settings;

/// Message channel capacity
const MESSAGE_BUFFER: usize = 256;

/// Run the TUI against the given menu URL
pub async fn run(menu_url: Url, settings: &Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    info!("Menu URL: {}", menu_url);
    let source = HttpMenu::new(menu_url, settings.menu.timeout());

    // Initialize terminal
    let mut term = ratatui::init();

    let mut state = AppState::new();

    // Unified message channel (background fetch, signal handler)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_BUFFER);

    // Spawn signal handler (sends Message::Quit on SIGINT/SIGTERM)
    signals::spawn_signal_handler(msg_tx.clone());

    // The fetch goes through the update loop like everything else, so the
    // Loading transition and the background task start together.
    process_message(&mut state, Message::FetchMenu, &msg_tx, &source);

    // Run the main loop
    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &source, settings);

    // Restore terminal
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    source: &HttpMenu,
    settings: &Settings,
) -> Result<()> {
    while !state.should_quit() {
        // Process background messages (fetch result, signal handler)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, source);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll(settings.ui.tick())? {
            process_message(state, message, &msg_tx, source);
        }
    }

    Ok(())
}

/// Process a message through the update function
///
/// Follow-up messages feed back in until the chain settles; actions are
/// dispatched as they surface.
fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    source: &HttpMenu,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx, source);
        }

        msg = result.message;
    }
}

/// Dispatch a side effect requested by the update function
fn handle_action(action: UpdateAction, msg_tx: &mpsc::Sender<Message>, source: &HttpMenu) {
    match action {
        UpdateAction::LoadMenu => {
            spawn::spawn_menu_load(msg_tx.clone(), source.clone());
        }
    }
}
