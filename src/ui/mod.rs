//! UI rendering module for Skycast
//!
//! This module contains all the rendering logic for the terminal dashboard,
//! using the ratatui library: a search header, the current-weather panel, the
//! hourly and five-day strips, and the nearby-places panel.

pub mod current;
pub mod daily;
pub mod hourly;
pub mod nearby;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::daynight::DayNight;

/// Condition label to icon glyph mapping (OpenWeatherMap `weather.main` values)
pub fn condition_glyph(icon_key: &str) -> &'static str {
    match icon_key {
        "Clear" => "\u{2600}",                    // ☀
        "Clouds" => "\u{2601}",                   // ☁
        "Rain" => "\u{1F327}",                    // 🌧
        "Drizzle" => "\u{1F326}",                 // 🌦
        "Thunderstorm" => "\u{26C8}",             // ⛈
        "Snow" => "\u{2744}",                     // ❄
        "Mist" | "Fog" | "Haze" => "\u{1F32B}",   // 🌫
        _ => "\u{26C5}",                          // ⛅ for anything unmapped
    }
}

/// Day/night verdict to icon glyph mapping
pub fn day_night_glyph(verdict: DayNight) -> &'static str {
    match verdict {
        DayNight::Sun => "\u{2600}",           // ☀
        DayNight::Moon => "\u{263E}",          // ☾
        DayNight::Indeterminate => "\u{00B7}", // · no determination yet
    }
}

/// Renders the full dashboard: header, status line, and the four panels.
pub fn render_dashboard(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // search header
            Constraint::Length(1), // status line
            Constraint::Min(10),   // panels
        ])
        .split(frame.area());

    render_header(frame, chunks[0], app);
    render_status(frame, chunks[1], app);

    if app.model.is_some() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(38), Constraint::Min(40)])
            .split(chunks[2]);

        current::render(frame, columns[0], app);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(9), // hourly strip
                Constraint::Length(8), // five-day strip
                Constraint::Min(5),    // nearby places
            ])
            .split(columns[1]);

        hourly::render(frame, rows[0], app);
        daily::render(frame, rows[1], app);
        nearby::render(frame, rows[2], app);
    } else {
        let hint = Paragraph::new("No forecast loaded yet - search for a city above")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(hint, chunks[2]);
    }
}

/// Renders the title and the search box.
///
/// When the box is empty the active city shows as a placeholder, mirroring
/// how the search field advertises the current location.
fn render_header(frame: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let typed = if app.search_input.is_empty() {
        let placeholder = app
            .model
            .as_ref()
            .map(|m| format!("{}, {}", m.location.name, m.location.country))
            .unwrap_or_default();
        Span::styled(placeholder, Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(app.search_input.clone())
    };

    let line = Line::from(vec![
        Span::styled(
            " SKYCAST ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  Search: "),
        typed,
        Span::styled("_", Style::default().fg(Color::Yellow)),
    ]);

    let block = Block::default().borders(Borders::ALL);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Renders the status line: errors, hints, or the key legend.
fn render_status(frame: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let (text, color) = match &app.status {
        Some(message) => (message.clone(), Color::Red),
        None => (
            "Enter: search   Esc: quit".to_string(),
            Color::DarkGray,
        ),
    };

    let paragraph = Paragraph::new(text).style(Style::default().fg(color));
    frame.render_widget(paragraph, area);
}
