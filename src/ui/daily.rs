//! Five-day strip
//!
//! Renders one headline row per forecast day: weekday, date, icon, headline
//! temperature and condition.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::condition_glyph;
use crate::app::App;
use crate::summary::day_headline;

/// Number of days shown on the strip
const FORECAST_DAYS: usize = 5;

/// Renders the five-day strip into `area`.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" 5-DAY FORECAST ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let Some(model) = &app.model else {
        frame.render_widget(Paragraph::new("").block(block), area);
        return;
    };

    let mut lines = Vec::new();
    for index in 0..FORECAST_DAYS {
        let Some(headline) = day_headline(model, index) else {
            break;
        };
        lines.push(Line::from(format!(
            "{:<4} {:<7} {:<3} {:>4}°C  {}",
            headline.day_of_week,
            headline.day_month,
            condition_glyph(&headline.icon_key),
            headline.temp,
            headline.info,
        )));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
