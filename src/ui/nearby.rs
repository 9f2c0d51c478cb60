//! Nearby-places panel
//!
//! Renders one row per nearby city with its condition icon and temperature.
//! The snapshot is fetched after the forecast and may lag behind it, so an
//! absent snapshot renders as a note rather than an error.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::condition_glyph;
use crate::app::App;
use crate::summary::city_glance;

/// Renders the nearby-places panel into `area`.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" NEARBY PLACES ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let Some(nearby) = &app.nearby else {
        let note = Paragraph::new("No nearby data")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(note, area);
        return;
    };

    let mut lines = Vec::new();
    let mut index = 0;
    while let Some(glance) = city_glance(nearby, index) {
        lines.push(Line::from(format!(
            "{:<20} {:<3} {:>4}°C",
            glance.city,
            condition_glyph(&glance.icon_key),
            glance.temp,
        )));
        index += 1;
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
