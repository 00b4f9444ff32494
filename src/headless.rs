//! Headless mode - print the fetched menu to stdout
//!
//! For shells and scripts: fetch the menu once and write one flavor name
//! per line, no TUI.

use std::io::{self, Write};
use std::time::Duration;

use url::Url;

use gelato_core::prelude::*;
use gelato_menu::{load_menu, HttpMenu};

/// Fetch the menu once and print flavor names, one per line
pub async fn print_menu(menu_url: Url, timeout: Duration) -> Result<()> {
    info!("Listing menu from {}", menu_url);

    let source = HttpMenu::new(menu_url, timeout);
    let flavors = load_menu(&source).await?;

    if flavors.is_empty() {
        eprintln!("The menu is empty.");
        return Ok(());
    }

    let mut stdout = io::stdout().lock();
    for flavor in &flavors {
        writeln!(stdout, "{}", flavor.name)?;
    }
    stdout.flush()?;

    Ok(())
}
