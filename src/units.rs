//! Pure display-unit conversions
//!
//! Stateless helpers that turn raw provider values (Kelvin, m/s, degrees,
//! epoch seconds) into display-ready forms. Every function takes explicit
//! inputs; time-zone dependent conversions take the zone as a parameter.

use chrono::{NaiveDateTime, TimeZone, Timelike};
use std::fmt;
use thiserror::Error;

/// Errors from time parsing and conversion
#[derive(Debug, Error)]
pub enum TimeError {
    /// A 12-hour time string did not match the "h:mm AM" shape
    #[error("malformed time string: '{0}'")]
    MalformedTimeString(String),

    /// An epoch value could not be represented as a date-time
    #[error("timestamp {0} is out of range")]
    TimestampOutOfRange(i64),
}

/// Suffix attached to a 12-hour clock value.
///
/// `Hr` is the duration-display marker: the hour field then holds an
/// elapsed-hours count rather than a clock position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Am,
    Pm,
    Hr,
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Marker::Am => write!(f, "AM"),
            Marker::Pm => write!(f, "PM"),
            Marker::Hr => write!(f, "hr"),
        }
    }
}

/// A parsed 12-hour clock value: hour 1-12, minute 0-59, plus a marker.
///
/// Displays as "h:mm AM" with the minute always zero-padded to two digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
    pub marker: Marker,
}

impl ClockTime {
    /// Parses a 12-hour time string such as "5:46 AM" or "11:03 pm".
    ///
    /// # Returns
    /// * `Ok(ClockTime)` if the string has the "h:mm AM" shape
    /// * `Err(TimeError::MalformedTimeString)` otherwise
    pub fn parse(text: &str) -> Result<Self, TimeError> {
        let malformed = || TimeError::MalformedTimeString(text.to_string());

        let mut parts = text.trim().split_whitespace();
        let time_part = parts.next().ok_or_else(malformed)?;
        let marker_part = parts.next().ok_or_else(malformed)?;
        if parts.next().is_some() {
            return Err(malformed());
        }

        let (hour_text, minute_text) = time_part.split_once(':').ok_or_else(malformed)?;
        let hour: u32 = hour_text.parse().map_err(|_| malformed())?;
        let minute: u32 = minute_text.parse().map_err(|_| malformed())?;
        if !(1..=12).contains(&hour) || minute > 59 {
            return Err(malformed());
        }

        let marker = match marker_part.to_ascii_lowercase().as_str() {
            "am" => Marker::Am,
            "pm" => Marker::Pm,
            _ => return Err(malformed()),
        };

        Ok(ClockTime {
            hour,
            minute,
            marker,
        })
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02} {}", self.hour, self.minute, self.marker)
    }
}

/// Eight-point compass labels, clockwise from north.
const COMPASS_POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

/// Converts a Kelvin temperature to whole degrees Celsius.
pub fn kelvin_to_celsius(kelvin: f64) -> i32 {
    (kelvin - 273.15).round() as i32
}

/// Converts a 24-hour clock value to 12-hour form.
///
/// Hour 0 maps to 12. When `marker` is given it is used verbatim instead of
/// deriving AM/PM from the hour; the caller passes `Marker::Hr` when the
/// value is an elapsed-hours count rather than a clock position.
pub fn to_12_hour(hour: u32, minute: u32, marker: Option<Marker>) -> ClockTime {
    let marker = marker.unwrap_or(if hour >= 12 { Marker::Pm } else { Marker::Am });
    let hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    ClockTime {
        hour,
        minute,
        marker,
    }
}

/// Splits a Unix timestamp into its hour and minute in the given time zone.
///
/// # Returns
/// * `Ok((hour, minute))` with hour 0-23 and minute 0-59
/// * `Err(TimeError::TimestampOutOfRange)` if the epoch value is unrepresentable
pub fn epoch_to_hour_minute<Tz: TimeZone>(epoch: i64, tz: &Tz) -> Result<(u32, u32), TimeError> {
    let datetime = tz
        .timestamp_opt(epoch, 0)
        .single()
        .ok_or(TimeError::TimestampOutOfRange(epoch))?;
    Ok((datetime.hour(), datetime.minute()))
}

/// Maps a wind direction in degrees to the nearest 8-point compass label.
///
/// Degrees are normalized into [0, 360) first, so negative and >360 inputs
/// are accepted.
pub fn degrees_to_compass(degrees: f64) -> &'static str {
    let normalized = ((degrees % 360.0) + 360.0) % 360.0;
    let index = ((normalized / 45.0).round() as usize) % 8;
    COMPASS_POINTS[index]
}

/// Formats wind for display: speed in km/h plus compass direction.
///
/// Speed is converted via `m/s x 3.6` and truncated toward zero, not
/// rounded. The result has the shape `"<speed> <direction> "` - the trailing
/// space is part of the format and callers that need a tight string trim it.
pub fn format_wind(speed_mps: f64, degrees: f64) -> String {
    let kmh = (speed_mps * 3.6) as i64;
    format!("{} {} ", kmh, degrees_to_compass(degrees))
}

/// Computes the daylight duration between sunrise and sunset epochs.
///
/// The difference in seconds is run through the same epoch-splitting path as
/// clock times and tagged with the `hr` marker, so a 12h27m day displays as
/// "12:27 hr".
pub fn daylight_duration<Tz: TimeZone>(
    sunrise_epoch: i64,
    sunset_epoch: i64,
    tz: &Tz,
) -> Result<ClockTime, TimeError> {
    let (hours, minutes) = epoch_to_hour_minute(sunset_epoch - sunrise_epoch, tz)?;
    Ok(to_12_hour(hours, minutes, Some(Marker::Hr)))
}

/// Derives the hour label for a forecast slot from its provider timestamp
/// text (e.g. "2024-09-14 15:00:00" becomes 3:00 PM).
///
/// # Returns
/// * `Ok(ClockTime)` with the slot's hour on the 12-hour clock, minute 0
/// * `Err(TimeError::MalformedTimeString)` if the text does not parse
pub fn slot_time_label(dt_txt: &str) -> Result<ClockTime, TimeError> {
    let datetime = NaiveDateTime::parse_from_str(dt_txt, "%Y-%m-%d %H:%M:%S")
        .map_err(|_| TimeError::MalformedTimeString(dt_txt.to_string()))?;
    Ok(to_12_hour(datetime.hour(), 0, None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_kelvin_to_celsius_rounds() {
        // 300 - 273.15 = 26.85, rounds up to 27
        assert_eq!(kelvin_to_celsius(300.0), 27);
        assert_eq!(kelvin_to_celsius(273.15), 0);
        assert_eq!(kelvin_to_celsius(263.15), -10);
    }

    #[test]
    fn test_to_12_hour_midnight_maps_to_twelve() {
        let time = to_12_hour(0, 5, None);
        assert_eq!(time.hour, 12);
        assert_eq!(time.minute, 5);
        assert_eq!(time.marker, Marker::Am);
        assert_eq!(time.to_string(), "12:05 AM");
    }

    #[test]
    fn test_to_12_hour_afternoon() {
        let time = to_12_hour(13, 30, None);
        assert_eq!(time.hour, 1);
        assert_eq!(time.marker, Marker::Pm);
        assert_eq!(time.to_string(), "1:30 PM");
    }

    #[test]
    fn test_to_12_hour_noon_stays_twelve_pm() {
        let time = to_12_hour(12, 0, None);
        assert_eq!(time.hour, 12);
        assert_eq!(time.marker, Marker::Pm);
    }

    #[test]
    fn test_to_12_hour_marker_override_wins() {
        // Elapsed-hours mode: 15 would normally be PM, but the caller wants "hr"
        let time = to_12_hour(15, 12, Some(Marker::Hr));
        assert_eq!(time.hour, 3);
        assert_eq!(time.marker, Marker::Hr);
        assert_eq!(time.to_string(), "3:12 hr");
    }

    #[test]
    fn test_epoch_to_hour_minute_utc() {
        // 2024-09-14 15:42:00 UTC
        let (hour, minute) = epoch_to_hour_minute(1_726_328_520, &Utc).unwrap();
        assert_eq!(hour, 15);
        assert_eq!(minute, 42);
    }

    #[test]
    fn test_degrees_to_compass_table() {
        assert_eq!(degrees_to_compass(0.0), "N");
        assert_eq!(degrees_to_compass(90.0), "E");
        assert_eq!(degrees_to_compass(180.0), "S");
        assert_eq!(degrees_to_compass(270.0), "W");
        assert_eq!(degrees_to_compass(359.0), "N");
    }

    #[test]
    fn test_degrees_to_compass_sector_boundaries() {
        // Rounding flips halfway between points: 22 is still N, 23 is NE
        assert_eq!(degrees_to_compass(22.0), "N");
        assert_eq!(degrees_to_compass(23.0), "NE");
        // 44 and 46 both round to sector 1
        assert_eq!(degrees_to_compass(44.0), "NE");
        assert_eq!(degrees_to_compass(46.0), "NE");
    }

    #[test]
    fn test_degrees_to_compass_normalizes_out_of_range() {
        assert_eq!(degrees_to_compass(-90.0), "W");
        assert_eq!(degrees_to_compass(450.0), "E");
        assert_eq!(degrees_to_compass(720.0), "N");
    }

    #[test]
    fn test_format_wind_truncates_and_keeps_trailing_space() {
        assert_eq!(format_wind(10.0, 90.0), "36 E ");
        // 2.9 m/s * 3.6 = 10.44, truncated to 10
        assert_eq!(format_wind(2.9, 0.0), "10 N ");
    }

    #[test]
    fn test_daylight_duration_in_utc() {
        // 12 hours 27 minutes of daylight
        let sunrise = 1_726_300_000;
        let sunset = sunrise + 12 * 3600 + 27 * 60;
        let duration = daylight_duration(sunrise, sunset, &Utc).unwrap();
        assert_eq!(duration.to_string(), "12:27 hr");
    }

    #[test]
    fn test_daylight_duration_short_day() {
        let sunrise = 1_726_300_000;
        let sunset = sunrise + 8 * 3600 + 5 * 60;
        let duration = daylight_duration(sunrise, sunset, &Utc).unwrap();
        assert_eq!(duration.to_string(), "8:05 hr");
    }

    #[test]
    fn test_slot_time_label_from_provider_text() {
        let label = slot_time_label("2024-09-14 15:00:00").unwrap();
        assert_eq!(label.to_string(), "3:00 PM");

        let label = slot_time_label("2024-09-14 00:00:00").unwrap();
        assert_eq!(label.to_string(), "12:00 AM");

        let label = slot_time_label("2024-09-14 09:00:00").unwrap();
        assert_eq!(label.to_string(), "9:00 AM");
    }

    #[test]
    fn test_slot_time_label_rejects_malformed_text() {
        assert!(slot_time_label("not a timestamp").is_err());
        assert!(slot_time_label("2024-09-14T15:00:00").is_err());
    }

    #[test]
    fn test_clock_time_parse_valid() {
        let time = ClockTime::parse("5:46 AM").unwrap();
        assert_eq!(time.hour, 5);
        assert_eq!(time.minute, 46);
        assert_eq!(time.marker, Marker::Am);

        let time = ClockTime::parse("11:03 pm").unwrap();
        assert_eq!(time.marker, Marker::Pm);

        // Zero-padded minute round-trips through Display
        let time = ClockTime::parse("12:05 AM").unwrap();
        assert_eq!(time.to_string(), "12:05 AM");
    }

    #[test]
    fn test_clock_time_parse_malformed() {
        for text in ["", "5:46", "25:00 AM", "5:75 PM", "5:46 XY", "5 46 AM", "0:30 AM"] {
            let result = ClockTime::parse(text);
            assert!(result.is_err(), "'{}' should not parse", text);
            let err = result.unwrap_err();
            assert!(err.to_string().contains("malformed time string"));
        }
    }
}
