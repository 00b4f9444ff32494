//! Gelato - a terminal browser for remote ice-cream flavor menus
//!
//! This is the binary entry point. All logic lives in the library.

use clap::Parser;

use gelato::config;
use gelato_core::{logging, prelude::*};

/// Gelato - a terminal browser for remote ice-cream flavor menus
#[derive(Parser, Debug)]
#[command(name = "gelato", version)]
#[command(about = "Browse a hosted ice-cream flavor menu from the terminal", long_about = None)]
struct Args {
    /// Menu document URL (overrides the config file and the built-in default)
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Fetch the menu once and print flavor names to stdout (no TUI)
    #[arg(long)]
    list: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    logging::init()?;

    let settings = config::load_settings();
    let menu_url = config::resolve_menu_url(args.url.as_deref(), &settings)?;
    info!("Menu URL resolved to {}", menu_url);

    let result = if args.list {
        gelato::print_menu(menu_url, settings.menu.timeout()).await
    } else {
        gelato::run(menu_url, &settings).await
    };

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("Gelato exiting");
    result
}
