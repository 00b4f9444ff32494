//! Background task spawning for the menu fetch

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use gelato_app::Message;
use gelato_menu::{load_menu, MenuSource};

/// Spawn the one-shot menu fetch in the background
///
/// Exactly one message comes back: `MenuLoaded` on success or
/// `MenuLoadFailed` on error. If the receiver is gone by the time the
/// fetch finishes, the send fails and the late result is dropped.
pub fn spawn_menu_load<S>(msg_tx: mpsc::Sender<Message>, source: S) -> JoinHandle<()>
where
    S: MenuSource + Send + Sync + 'static,
{
    tokio::spawn(async move {
        match load_menu(&source).await {
            Ok(flavors) => {
                let _ = msg_tx.send(Message::MenuLoaded { flavors }).await;
            }
            Err(e) => {
                let _ = msg_tx
                    .send(Message::MenuLoadFailed {
                        error: e.to_string(),
                    })
                    .await;
            }
        }
    })
}
