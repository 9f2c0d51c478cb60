//! Hourly strip
//!
//! Renders the next six forecast slots from the flat timeline. Slot indexing
//! crosses day boundaries, so late in the evening the strip naturally runs
//! into tomorrow's bucket. Each slot carries its own day/night icon derived
//! from the slot's clock time against sunrise/sunset.

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
use crate::data::ForecastModel;
use crate::daynight::{classify_day_night, DayNight};
use crate::summary::{hour_detail, HourDetail};
use crate::units::{epoch_to_hour_minute, to_12_hour, ClockTime};

/// Number of slots shown on the strip
const HOURLY_SLOTS: usize = 6;

/// Renders the hourly strip into `area`.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" HOURLY ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let Some(model) = &app.model else {
        frame.render_widget(Paragraph::new("").block(block), area);
        return;
    };

    let mut lines = vec![Line::from(Span::styled(
        format!(
            "{:<10} {:<3} {:<13} {:>6} {:>6}  {}",
            "Time", "", "Forecast", "Temp", "Feel", "Wind(km/h)"
        ),
        Style::default().add_modifier(Modifier::BOLD),
    ))];

    // A short forecast window caps the strip below six rows
    for slot in 0..HOURLY_SLOTS.min(model.slot_count()) {
        match hour_detail(model, slot) {
            Ok(detail) => lines.push(detail_line(model, &detail)),
            Err(_) => break,
        }
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Formats one slot row, with a sun/moon icon chosen for the slot's time.
fn detail_line(model: &ForecastModel, detail: &HourDetail) -> Line<'static> {
    let icon = slot_icon(model, &detail.time)
        .map(day_night_glyph)
        .unwrap_or_else(|| condition_glyph(&detail.icon_key));

    Line::from(format!(
        "{:<10} {:<3} {:<13} {:>4}°C {:>4}°C  {}",
        detail.time,
        icon,
        detail.forecast,
        detail.temp,
        detail.real_feel,
        detail.wind.trim_end(),
    ))
}

/// Classifies a slot's clock time against the model's sunrise/sunset.
///
/// Returns `None` when the time text does not parse, when sunrise/sunset
/// cannot be converted, or when the classification is indeterminate; the
/// caller then falls back to the condition glyph.
fn slot_icon(model: &ForecastModel, time_text: &str) -> Option<DayNight> {
    let current = ClockTime::parse(time_text).ok()?;

    let (hour, minute) = epoch_to_hour_minute(model.location.sunrise, &Local).ok()?;
    let sunrise = to_12_hour(hour, minute, None);
    let (hour, minute) = epoch_to_hour_minute(model.location.sunset, &Local).ok()?;
    let sunset = to_12_hour(hour, minute, None);

    match classify_day_night(current, sunrise, sunset) {
        DayNight::Indeterminate => None,
        verdict => Some(verdict),
    }
}
