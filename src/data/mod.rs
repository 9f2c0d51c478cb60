//! Core data models for Skycast
//!
//! This module contains the data types used throughout the application for
//! representing forecast samples, per-day buckets, and nearby-city summaries.

pub mod openweather;

pub use openweather::{OpenWeatherClient, ProviderError};

use serde::{Deserialize, Serialize};

/// One 3-hour forecast slot as returned by the provider.
///
/// Temperatures are kept in Kelvin and wind in m/s exactly as received;
/// display conversion happens in the `units` module. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSample {
    /// Forecast time as epoch seconds
    pub dt: i64,
    /// Temperature in Kelvin
    pub temp_kelvin: f64,
    /// Feels-like temperature in Kelvin
    pub feels_like_kelvin: f64,
    /// Weather condition label (e.g. "Clear", "Rain")
    pub condition: String,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Wind direction in degrees
    pub wind_deg: f64,
    /// Formatted timestamp text from the provider (e.g. "2024-09-14 15:00:00")
    pub dt_txt: String,
}

/// All forecast samples falling on the same local calendar day, plus the
/// display labels derived from the first sample.
///
/// Samples stay in ascending timestamp order, inherited from the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayBucket {
    /// Samples for this day, in input order
    pub samples: Vec<RawSample>,
    /// Short weekday name, e.g. "Mon"
    pub day_of_week: String,
    /// Short month and day-of-month label, e.g. "Sep 14"
    pub day_month: String,
}

/// Location descriptor for a fetched forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// City name
    pub name: String,
    /// ISO country code
    pub country: String,
    /// Latitude coordinate
    pub lat: f64,
    /// Longitude coordinate
    pub lon: f64,
    /// Sunrise time as epoch seconds
    pub sunrise: i64,
    /// Sunset time as epoch seconds
    pub sunset: i64,
}

/// An ungrouped forecast as fetched: a location plus the flat chronological
/// sample list, before the aggregator turns it into day buckets.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatForecast {
    /// Location the forecast is for
    pub location: Location,
    /// Chronological 3-hour samples, typically spanning ~5 days
    pub samples: Vec<RawSample>,
}

/// Root forecast aggregate: a location and its ordered day buckets.
///
/// A model is built once per successful fetch and replaced wholesale by the
/// next fetch; there is no incremental update path.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastModel {
    /// Location the forecast is for
    pub location: Location,
    /// Day buckets in chronological order
    pub days: Vec<DayBucket>,
}

impl ForecastModel {
    /// Returns the sample at the given flat timeline position.
    ///
    /// Slot 0 is the first sample of the first day; indexing continues across
    /// day boundaries, so a slot past today's remaining samples lands in
    /// tomorrow's bucket without any caller-side index juggling.
    ///
    /// # Returns
    /// * `Some(&RawSample)` if the slot exists
    /// * `None` if `slot` is beyond the forecast window
    pub fn nth_slot(&self, slot: usize) -> Option<&RawSample> {
        let mut remaining = slot;
        for day in &self.days {
            if remaining < day.samples.len() {
                return day.samples.get(remaining);
            }
            remaining -= day.samples.len();
        }
        None
    }

    /// Total number of samples across all day buckets.
    pub fn slot_count(&self) -> usize {
        self.days.iter().map(|day| day.samples.len()).sum()
    }
}

/// A single-sample summary for one nearby city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitySample {
    /// City name
    pub name: String,
    /// Current temperature in Kelvin
    pub temp_kelvin: f64,
    /// Weather condition label
    pub condition: String,
}

/// Ordered nearby-city summaries.
///
/// Fetched separately from the forecast and may be stale relative to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyCities {
    /// City summaries in provider order
    pub cities: Vec<CitySample>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(dt: i64, condition: &str) -> RawSample {
        RawSample {
            dt,
            temp_kelvin: 293.15,
            feels_like_kelvin: 292.0,
            condition: condition.to_string(),
            wind_speed: 3.0,
            wind_deg: 180.0,
            dt_txt: "2024-09-14 12:00:00".to_string(),
        }
    }

    fn model_with_days(day_sizes: &[usize]) -> ForecastModel {
        let mut dt = 0;
        let days = day_sizes
            .iter()
            .map(|&size| {
                let samples = (0..size)
                    .map(|_| {
                        dt += 10_800;
                        sample(dt, "Clear")
                    })
                    .collect();
                DayBucket {
                    samples,
                    day_of_week: "Mon".to_string(),
                    day_month: "Sep 14".to_string(),
                }
            })
            .collect();
        ForecastModel {
            location: Location {
                name: "Testville".to_string(),
                country: "CA".to_string(),
                lat: 49.0,
                lon: -123.0,
                sunrise: 1_700_000_000,
                sunset: 1_700_040_000,
            },
            days,
        }
    }

    #[test]
    fn test_nth_slot_within_first_day() {
        let model = model_with_days(&[3, 8]);
        let slot = model.nth_slot(1).expect("slot 1 should exist");
        assert_eq!(slot.dt, model.days[0].samples[1].dt);
    }

    #[test]
    fn test_nth_slot_rolls_over_into_next_day() {
        let model = model_with_days(&[3, 8]);
        // Slot 3 is past the 3 samples of day 0, so it is day 1's first sample
        let slot = model.nth_slot(3).expect("slot 3 should exist");
        assert_eq!(slot.dt, model.days[1].samples[0].dt);

        let slot = model.nth_slot(5).expect("slot 5 should exist");
        assert_eq!(slot.dt, model.days[1].samples[2].dt);
    }

    #[test]
    fn test_nth_slot_beyond_window_returns_none() {
        let model = model_with_days(&[3, 8]);
        assert!(model.nth_slot(11).is_none());
        assert!(model.nth_slot(100).is_none());
    }

    #[test]
    fn test_slot_count_sums_all_days() {
        let model = model_with_days(&[3, 8, 8]);
        assert_eq!(model.slot_count(), 19);

        let empty = model_with_days(&[]);
        assert_eq!(empty.slot_count(), 0);
    }

    #[test]
    fn test_raw_sample_serialization_roundtrip() {
        let original = sample(1_700_000_000, "Rain");

        let json = serde_json::to_string(&original).expect("Failed to serialize RawSample");
        let deserialized: RawSample =
            serde_json::from_str(&json).expect("Failed to deserialize RawSample");

        assert_eq!(deserialized, original);
    }
}
