//! Flavor grid widget
//!
//! Renders the menu as a grid of bordered cells, three per row, the
//! terminal stand-in for the original collection view. Also owns the
//! empty and failed states of the menu area.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

use gelato_app::state::GRID_COLUMNS;
use gelato_app::{AppState, MenuPhase};

/// Height of one grid cell, borders included
const CELL_HEIGHT: u16 = 3;

/// Grid widget over the current menu
pub struct FlavorGrid<'a> {
    state: &'a AppState,
}

impl<'a> FlavorGrid<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Render a single centered message line in the menu area
    fn render_message(&self, area: Rect, buf: &mut Buffer, text: &str, color: Color) {
        if area.height == 0 {
            return;
        }

        let line = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(color))
            .render(line, buf);
    }

    /// Render the stored failure reason under the headline
    fn render_failure_reason(&self, area: Rect, buf: &mut Buffer) {
        let Some(reason) = self.state.load_error.as_deref() else {
            return;
        };
        if area.height < 2 || area.height / 2 + 1 >= area.height {
            return;
        }

        let line = Rect::new(area.x, area.y + area.height / 2 + 1, area.width, 1);
        Paragraph::new(truncate_string(reason, area.width as usize))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .render(line, buf);
    }

    /// Render the flavor cells with the selected row kept visible
    fn render_cells(&self, area: Rect, buf: &mut Buffer) {
        let cell_width = area.width / GRID_COLUMNS as u16;
        if cell_width < 4 || area.height < CELL_HEIGHT {
            return;
        }

        let visible_rows = (area.height / CELL_HEIGHT).max(1) as usize;
        let selected = self.state.selected.unwrap_or(0);
        let selected_row = selected / GRID_COLUMNS;
        let first_row = selected_row.saturating_sub(visible_rows - 1);

        for (i, flavor) in self.state.flavors.iter().enumerate() {
            let row = i / GRID_COLUMNS;
            if row < first_row || row >= first_row + visible_rows {
                continue;
            }

            let col = i % GRID_COLUMNS;
            let cell = Rect::new(
                area.x + col as u16 * cell_width,
                area.y + (row - first_row) as u16 * CELL_HEIGHT,
                cell_width,
                CELL_HEIGHT,
            );

            let is_selected = self.state.selected == Some(i);
            let (border_style, name_style) = if is_selected {
                (
                    Style::default().fg(Color::Yellow),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                (Style::default().fg(Color::DarkGray), Style::default())
            };

            let name = truncate_string(&flavor.name, cell_width.saturating_sub(2) as usize);
            Paragraph::new(name)
                .alignment(Alignment::Center)
                .style(name_style)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(border_style),
                )
                .render(cell, buf);
        }
    }
}

impl Widget for FlavorGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Menu ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        block.render(area, buf);

        match self.state.phase {
            MenuPhase::Failed => {
                self.render_message(inner, buf, "Couldn't load the flavor menu.", Color::Red);
                self.render_failure_reason(inner, buf);
            }
            MenuPhase::Populated if self.state.flavors.is_empty() => {
                self.render_message(inner, buf, "The menu is empty.", Color::DarkGray);
            }
            MenuPhase::Populated => self.render_cells(inner, buf),
            // Idle is a blink before the fetch starts; Loading draws its
            // own overlay on top of the bare block.
            MenuPhase::Idle | MenuPhase::Loading => {}
        }
    }
}

/// Truncate a string, appending an ellipsis when it doesn't fit
fn truncate_string(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        s.to_string()
    } else if max_len <= 1 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 1).collect();
        format!("{}…", truncated)
    }
}
