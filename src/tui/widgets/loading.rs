//! Loading overlay widget
//!
//! Centered modal shown for the whole Loading phase, with an animated
//! indeterminate gauge driven by tick messages.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    symbols,
    widgets::{Block, Borders, Clear, LineGauge, Paragraph, Widget},
};

use gelato_app::AppState;

/// Modal overlay with the fetch-in-progress animation
pub struct LoadingOverlay<'a> {
    state: &'a AppState,
}

impl<'a> LoadingOverlay<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Calculate the modal area centered in the parent
    fn centered_rect(area: Rect) -> Rect {
        let width = area.width.min(44);
        let height = area.height.min(5);
        Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        )
    }
}

impl Widget for LoadingOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal = Self::centered_rect(area);

        // Clear the area behind the modal
        Clear.render(modal, buf);

        let block = Block::default()
            .title(" Loading ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(modal);
        block.render(modal, buf);

        if inner.height < 3 {
            return;
        }

        let chunks = Layout::vertical([
            Constraint::Length(1), // Text
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Gauge
        ])
        .split(inner);

        Paragraph::new("Fetching the menu...")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow))
            .render(chunks[0], buf);

        let gauge_area = Rect {
            x: chunks[2].x.saturating_add(4),
            y: chunks[2].y,
            width: chunks[2].width.saturating_sub(8),
            height: 1,
        };

        LineGauge::default()
            .ratio(self.state.indeterminate_ratio())
            .filled_style(Style::default().fg(Color::Cyan))
            .unfilled_style(Style::default().fg(Color::Black))
            .filled_symbol(symbols::line::THICK.horizontal)
            .unfilled_symbol(symbols::line::THICK.horizontal)
            .render(gauge_area, buf);
    }
}
