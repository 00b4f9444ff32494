//! Detail pane widget
//!
//! Shows the selected flavor: a tinted scoop area standing in for the
//! original flavor image, the flavor name, and the image file it came
//! with. With no selection it renders a placeholder.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

use gelato_core::Flavor;

/// Detail pane for the selected flavor
pub struct DetailPane<'a> {
    flavor: Option<&'a Flavor>,
}

impl<'a> DetailPane<'a> {
    pub fn new(flavor: Option<&'a Flavor>) -> Self {
        Self { flavor }
    }

    fn render_flavor(&self, flavor: &Flavor, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::vertical([
            Constraint::Min(3),    // Scoop art
            Constraint::Length(1), // Flavor name
            Constraint::Length(1), // Image file
        ])
        .split(area);

        self.render_scoop(flavor, chunks[0], buf);

        Paragraph::new(flavor.name.as_str())
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .render(chunks[1], buf);

        Paragraph::new(flavor.image.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .render(chunks[2], buf);
    }

    /// Fill the art area with a block of the flavor's tint
    fn render_scoop(&self, flavor: &Flavor, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 2 {
            return;
        }

        let scoop_width = (area.width / 2).max(4);
        let scoop_height = (area.height / 2).max(2);
        let scoop = Rect::new(
            area.x + (area.width - scoop_width) / 2,
            area.y + (area.height - scoop_height) / 2,
            scoop_width,
            scoop_height,
        );

        let style = Style::default().fg(scoop_color(&flavor.name));
        let lines: Vec<Line> = (0..scoop.height)
            .map(|_| Line::styled("█".repeat(scoop.width as usize), style))
            .collect();

        Paragraph::new(lines).render(scoop, buf);
    }
}

impl Widget for DetailPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Flavor ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        block.render(area, buf);

        match self.flavor {
            Some(flavor) => self.render_flavor(flavor, inner, buf),
            None => {
                if inner.height == 0 {
                    return;
                }
                let line = Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 1);
                Paragraph::new("No flavor selected.")
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::DarkGray))
                    .render(line, buf);
            }
        }
    }
}

/// Deterministic tint for a flavor name
fn scoop_color(name: &str) -> Color {
    const PALETTE: [Color; 7] = [
        Color::LightYellow,
        Color::LightMagenta,
        Color::LightRed,
        Color::LightGreen,
        Color::LightCyan,
        Color::LightBlue,
        Color::White,
    ];

    let sum: usize = name.bytes().map(usize::from).sum();
    PALETTE[sum % PALETTE.len()]
}
