//! Status bar widget
//!
//! Shows the menu phase, the current selection, and where to look when a
//! load fails.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use gelato_app::{AppState, MenuPhase};
use gelato_core::logging;

/// Status bar widget showing application state
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Get the state indicator with appropriate styling
    fn state_indicator(&self) -> Span<'static> {
        match self.state.phase {
            MenuPhase::Idle => Span::styled("○ Starting", Style::default().fg(Color::DarkGray)),
            MenuPhase::Loading => Span::styled(
                "↻ Fetching menu",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            MenuPhase::Populated => Span::styled(
                format!("● {} flavors", self.state.flavors.len()),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            MenuPhase::Failed => Span::styled(
                "✗ Load failed",
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ),
        }
    }

    /// Get the selected flavor span
    fn selection_info(&self) -> Option<Span<'static>> {
        self.state
            .selected_flavor()
            .map(|flavor| Span::styled(flavor.name.clone(), Style::default().fg(Color::Cyan)))
    }

    /// Get the log pointer shown after a failed load
    fn failure_hint(&self) -> Option<Span<'static>> {
        if self.state.phase != MenuPhase::Failed {
            return None;
        }

        let hint = match logging::get_current_log_file() {
            Ok(path) => format!("See {} for details", path.display()),
            Err(_) => "See the log for details".to_string(),
        };
        Some(Span::styled(hint, Style::default().fg(Color::DarkGray)))
    }

    /// Build all segments with separators
    fn build_segments(&self) -> Vec<Span<'static>> {
        let separator = Span::styled(" │ ", Style::default().fg(Color::DarkGray));

        let mut segments = Vec::new();

        segments.push(Span::raw(" "));
        segments.push(self.state_indicator());

        if let Some(selection) = self.selection_info() {
            segments.push(separator.clone());
            segments.push(selection);
        }

        if let Some(hint) = self.failure_hint() {
            segments.push(separator.clone());
            segments.push(hint);
        }

        segments.push(Span::raw(" "));

        segments
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray));

        Paragraph::new(Line::from(self.build_segments()))
            .block(block)
            .render(area, buf);
    }
}
