//! Display-field extraction
//!
//! Pure lookups that turn a forecast model (or the nearby-cities snapshot)
//! into the small display-ready records the UI panels render. Each function
//! takes the model explicitly; there is no ambient "current model".

use chrono::TimeZone;
use thiserror::Error;

use crate::data::{ForecastModel, NearbyCities};
use crate::units::{
    self, daylight_duration, epoch_to_hour_minute, format_wind, kelvin_to_celsius, to_12_hour,
    TimeError,
};

/// Errors from extracting display fields
#[derive(Debug, Error)]
pub enum SummaryError {
    /// The forecast model holds no samples at all
    #[error("forecast model has no samples")]
    NoSamples,

    /// The requested flat slot is past the end of the forecast window
    #[error("slot {0} is beyond the forecast window")]
    SlotOutOfRange(usize),

    /// A time value could not be parsed or converted
    #[error(transparent)]
    Time(#[from] TimeError),
}

/// Headline record for the current-weather panel
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    /// Condition label of the nearest forecast slot
    pub forecast: String,
    /// Temperature in whole degrees Celsius
    pub temp: i32,
    /// Feels-like temperature in whole degrees Celsius
    pub real_feel: i32,
    /// Sunrise as "h:mm AM"
    pub sunrise: String,
    /// Sunset as "h:mm PM"
    pub sunset: String,
    /// Daylight duration as "h:mm hr"
    pub duration: String,
}

/// One entry of the five-day strip
#[derive(Debug, Clone, PartialEq)]
pub struct DayHeadline {
    /// Short weekday name, e.g. "Mon"
    pub day_of_week: String,
    /// Short month/day label, e.g. "Sep 14"
    pub day_month: String,
    /// Condition label used to pick the icon glyph
    pub icon_key: String,
    /// Temperature in whole degrees Celsius
    pub temp: i32,
    /// Condition label shown as text
    pub info: String,
}

/// One entry of the hourly strip
#[derive(Debug, Clone, PartialEq)]
pub struct HourDetail {
    /// Slot time as "h:00 AM"
    pub time: String,
    /// Condition label used to pick the icon glyph
    pub icon_key: String,
    /// Condition label shown as text
    pub forecast: String,
    /// Temperature in whole degrees Celsius
    pub temp: i32,
    /// Feels-like temperature in whole degrees Celsius
    pub real_feel: i32,
    /// Wind as "<km/h> <compass> "
    pub wind: String,
}

/// One entry of the nearby-places panel
#[derive(Debug, Clone, PartialEq)]
pub struct CityGlance {
    /// City name
    pub city: String,
    /// Condition label used to pick the icon glyph
    pub icon_key: String,
    /// Temperature in whole degrees Celsius
    pub temp: i32,
}

/// Builds the current-weather record from the model's first slot and its
/// location's sunrise/sunset epochs.
///
/// # Arguments
/// * `model` - the grouped forecast
/// * `tz` - time zone used to render sunrise/sunset as wall-clock times
pub fn current_conditions<Tz: TimeZone>(
    model: &ForecastModel,
    tz: &Tz,
) -> Result<CurrentConditions, SummaryError> {
    let first = model.nth_slot(0).ok_or(SummaryError::NoSamples)?;
    let location = &model.location;

    let (hour, minute) = epoch_to_hour_minute(location.sunrise, tz)?;
    let sunrise = to_12_hour(hour, minute, None);

    let (hour, minute) = epoch_to_hour_minute(location.sunset, tz)?;
    let sunset = to_12_hour(hour, minute, None);

    let duration = daylight_duration(location.sunrise, location.sunset, tz)?;

    Ok(CurrentConditions {
        forecast: first.condition.clone(),
        temp: kelvin_to_celsius(first.temp_kelvin),
        real_feel: kelvin_to_celsius(first.feels_like_kelvin),
        sunrise: sunrise.to_string(),
        sunset: sunset.to_string(),
        duration: duration.to_string(),
    })
}

/// Builds the headline for the day at `index`, or `None` past the window.
pub fn day_headline(model: &ForecastModel, index: usize) -> Option<DayHeadline> {
    let day = model.days.get(index)?;
    let first = day.samples.first()?;

    Some(DayHeadline {
        day_of_week: day.day_of_week.clone(),
        day_month: day.day_month.clone(),
        icon_key: first.condition.clone(),
        temp: kelvin_to_celsius(first.temp_kelvin),
        info: first.condition.clone(),
    })
}

/// Builds the hourly record for the flat timeline position `slot`.
///
/// Slots count across day boundaries, so asking for the sixth slot late in
/// the evening naturally lands in tomorrow's bucket.
pub fn hour_detail(model: &ForecastModel, slot: usize) -> Result<HourDetail, SummaryError> {
    let sample = model
        .nth_slot(slot)
        .ok_or(SummaryError::SlotOutOfRange(slot))?;

    Ok(HourDetail {
        time: units::slot_time_label(&sample.dt_txt)?.to_string(),
        icon_key: sample.condition.clone(),
        forecast: sample.condition.clone(),
        temp: kelvin_to_celsius(sample.temp_kelvin),
        real_feel: kelvin_to_celsius(sample.feels_like_kelvin),
        wind: format_wind(sample.wind_speed, sample.wind_deg),
    })
}

/// Builds the glance record for the nearby city at `index`.
pub fn city_glance(nearby: &NearbyCities, index: usize) -> Option<CityGlance> {
    let city = nearby.cities.get(index)?;

    Some(CityGlance {
        city: city.name.clone(),
        icon_key: city.condition.clone(),
        temp: kelvin_to_celsius(city.temp_kelvin),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{CitySample, DayBucket, Location, RawSample};
    use chrono::Utc;

    fn sample(dt: i64, dt_txt: &str, condition: &str) -> RawSample {
        RawSample {
            dt,
            temp_kelvin: 300.0,
            feels_like_kelvin: 301.5,
            condition: condition.to_string(),
            wind_speed: 10.0,
            wind_deg: 90.0,
            dt_txt: dt_txt.to_string(),
        }
    }

    fn test_model() -> ForecastModel {
        // 2024-09-14 UTC: sunrise 05:45, sunset 18:12
        let base = 1_726_272_000;
        ForecastModel {
            location: Location {
                name: "London".to_string(),
                country: "GB".to_string(),
                lat: 51.5,
                lon: -0.12,
                sunrise: base + 5 * 3600 + 45 * 60,
                sunset: base + 18 * 3600 + 12 * 60,
            },
            days: vec![
                DayBucket {
                    samples: vec![
                        sample(base + 15 * 3600, "2024-09-14 15:00:00", "Rain"),
                        sample(base + 18 * 3600, "2024-09-14 18:00:00", "Clouds"),
                        sample(base + 21 * 3600, "2024-09-14 21:00:00", "Clear"),
                    ],
                    day_of_week: "Sat".to_string(),
                    day_month: "Sep 14".to_string(),
                },
                DayBucket {
                    samples: vec![
                        sample(base + 24 * 3600, "2024-09-15 00:00:00", "Clear"),
                        sample(base + 27 * 3600, "2024-09-15 03:00:00", "Clouds"),
                    ],
                    day_of_week: "Sun".to_string(),
                    day_month: "Sep 15".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_current_conditions_fields() {
        let model = test_model();
        let current = current_conditions(&model, &Utc).unwrap();

        assert_eq!(current.forecast, "Rain");
        // 300.0 K -> 26.85 C -> 27
        assert_eq!(current.temp, 27);
        // 301.5 K -> 28.35 C -> 28
        assert_eq!(current.real_feel, 28);
        assert_eq!(current.sunrise, "5:45 AM");
        assert_eq!(current.sunset, "6:12 PM");
        assert_eq!(current.duration, "12:27 hr");
    }

    #[test]
    fn test_current_conditions_needs_a_sample() {
        let mut model = test_model();
        model.days.clear();

        let result = current_conditions(&model, &Utc);
        assert!(matches!(result, Err(SummaryError::NoSamples)));
    }

    #[test]
    fn test_day_headline_uses_first_sample_of_day() {
        let model = test_model();

        let today = day_headline(&model, 0).unwrap();
        assert_eq!(today.day_of_week, "Sat");
        assert_eq!(today.day_month, "Sep 14");
        assert_eq!(today.icon_key, "Rain");
        assert_eq!(today.info, "Rain");
        assert_eq!(today.temp, 27);

        let tomorrow = day_headline(&model, 1).unwrap();
        assert_eq!(tomorrow.day_of_week, "Sun");
        assert_eq!(tomorrow.icon_key, "Clear");
    }

    #[test]
    fn test_day_headline_past_window_is_none() {
        let model = test_model();
        assert!(day_headline(&model, 2).is_none());
    }

    #[test]
    fn test_hour_detail_formats_slot() {
        let model = test_model();
        let detail = hour_detail(&model, 0).unwrap();

        assert_eq!(detail.time, "3:00 PM");
        assert_eq!(detail.forecast, "Rain");
        assert_eq!(detail.icon_key, "Rain");
        assert_eq!(detail.temp, 27);
        assert_eq!(detail.real_feel, 28);
        assert_eq!(detail.wind, "36 E ");
    }

    #[test]
    fn test_hour_detail_crosses_day_boundary() {
        let model = test_model();

        // Slot 3 is the first sample of the second day
        let detail = hour_detail(&model, 3).unwrap();
        assert_eq!(detail.time, "12:00 AM");
        assert_eq!(detail.forecast, "Clear");
    }

    #[test]
    fn test_hour_detail_out_of_range() {
        let model = test_model();
        let result = hour_detail(&model, 5);
        assert!(matches!(result, Err(SummaryError::SlotOutOfRange(5))));
    }

    #[test]
    fn test_hour_detail_surfaces_malformed_timestamp_text() {
        let mut model = test_model();
        model.days[0].samples[0].dt_txt = "garbage".to_string();

        let result = hour_detail(&model, 0);
        assert!(matches!(
            result,
            Err(SummaryError::Time(TimeError::MalformedTimeString(_)))
        ));
    }

    #[test]
    fn test_city_glance() {
        let nearby = NearbyCities {
            cities: vec![CitySample {
                name: "Islington".to_string(),
                temp_kelvin: 293.62,
                condition: "Rain".to_string(),
            }],
        };

        let glance = city_glance(&nearby, 0).unwrap();
        assert_eq!(glance.city, "Islington");
        assert_eq!(glance.icon_key, "Rain");
        // 293.62 K -> 20.47 C -> 20
        assert_eq!(glance.temp, 20);

        assert!(city_glance(&nearby, 1).is_none());
    }
}
