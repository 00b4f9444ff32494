//! Custom widget components

mod detail;
mod grid;
mod header;
mod loading;
mod status_bar;

pub use detail::DetailPane;
pub use grid::FlavorGrid;
pub use header::Header;
pub use loading::LoadingOverlay;
pub use status_bar::StatusBar;
