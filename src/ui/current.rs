//! Current-weather panel
//!
//! Renders the headline conditions for the active city: temperature, real
//! feel, and the sunrise/sunset/daylight-duration column.

use chrono::Local;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{condition_glyph, day_night_glyph};
use crate::app::App;
use crate::summary::current_conditions;

/// Renders the current-weather panel into `area`.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" CURRENT WEATHER ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let Some(model) = &app.model else {
        frame.render_widget(Paragraph::new("").block(block), area);
        return;
    };

    let lines = match current_conditions(model, &Local) {
        Ok(current) => vec![
            Line::from(vec![
                Span::raw(format!("{} ", day_night_glyph(app.current_icon))),
                Span::styled(
                    format!("{}°C", current.temp),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(
                    "  {} {}",
                    condition_glyph(&current.forecast),
                    current.forecast
                )),
            ]),
            Line::from(format!("Real Feel {}°C", current.real_feel)),
            Line::from(""),
            Line::from(format!("Sunrise:  {}", current.sunrise)),
            Line::from(format!("Sunset:   {}", current.sunset)),
            Line::from(format!("Duration: {}", current.duration)),
        ],
        Err(err) => vec![Line::from(Span::styled(
            err.to_string(),
            Style::default().fg(Color::Red),
        ))],
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
