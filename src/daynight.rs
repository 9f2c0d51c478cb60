//! Day/night icon classification
//!
//! Decides whether a clock time should display a sun or a moon icon, by
//! comparing it against the day's sunrise and sunset on the 12-hour clock.

use crate::units::ClockTime;

/// Outcome of classifying a time of day against sunrise/sunset boundaries.
///
/// `Indeterminate` is returned when the time's marker matches neither
/// sunrise's nor sunset's, so no daytime decision is possible. Callers make
/// an explicit choice for that case, typically keeping the icon they were
/// already showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayNight {
    Sun,
    Moon,
    Indeterminate,
}

/// Classifies `current` as daytime or nighttime relative to sunrise/sunset.
///
/// All three values are 12-hour clock times. The comparison assumes sunrise
/// carries AM and sunset carries PM, which holds at temperate latitudes; in
/// polar conditions where that breaks down the result degrades to
/// `Indeterminate` rather than guessing.
///
/// Hour 12 is special-cased on both branches: it sits at the wrap point of
/// the 12-hour encoding, so a 12 o'clock value in sunrise's half of the day
/// is always `Moon` and one in sunset's half is always `Sun`. Equal-hour
/// comparisons against sunrise keep the same quirk: minutes before sunrise's
/// minute count as `Sun`. These rules are kept exactly as shipped; do not
/// "fix" them without revisiting every icon consumer.
pub fn classify_day_night(current: ClockTime, sunrise: ClockTime, sunset: ClockTime) -> DayNight {
    if current.marker == sunrise.marker {
        if current.hour == 12 {
            DayNight::Moon
        } else if current.hour > sunrise.hour {
            DayNight::Sun
        } else if current.hour == sunrise.hour {
            if current.minute < sunrise.minute {
                DayNight::Sun
            } else {
                DayNight::Moon
            }
        } else {
            DayNight::Moon
        }
    } else if current.marker == sunset.marker {
        if current.hour == 12 {
            DayNight::Sun
        } else if current.hour > sunset.hour {
            DayNight::Moon
        } else if current.hour == sunset.hour {
            if current.minute > sunset.minute {
                DayNight::Moon
            } else {
                DayNight::Sun
            }
        } else {
            DayNight::Sun
        }
    } else {
        DayNight::Indeterminate
    }
}
