//! Screen layout definitions

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
pub struct ScreenAreas {
    pub header: Rect,
    pub body: Rect,
    pub status: Rect,
}

/// Body panes while a menu is on screen
pub struct BodyPanes {
    pub menu: Rect,
    pub detail: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(2), // Header (1 for content + 1 for border)
        Constraint::Min(5),    // Menu body
        Constraint::Length(2), // Status bar (1 for border + 1 for content)
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}

/// Split the body into the flavor grid and the detail pane
pub fn split_body(area: Rect) -> BodyPanes {
    let chunks = Layout::horizontal([
        Constraint::Percentage(60), // Flavor grid
        Constraint::Percentage(40), // Detail pane
    ])
    .split(area);

    BodyPanes {
        menu: chunks[0],
        detail: chunks[1],
    }
}
