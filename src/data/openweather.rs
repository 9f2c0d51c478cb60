//! OpenWeatherMap API client
//!
//! This module fetches the 5-day/3-hour forecast and the nearby-cities
//! snapshot from the OpenWeatherMap API and parses the responses into our
//! data structures. Requests are plain one-shot GETs: no retry, no backoff,
//! and failures surface to the caller unmodified.

use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize};
use thiserror::Error;

use super::{CitySample, FlatForecast, Location, NearbyCities, RawSample};

/// Base URL for the OpenWeatherMap API
const OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Errors that can occur when fetching weather data
#[derive(Debug, Error)]
pub enum ProviderError {
    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider answered with a non-success status
    #[error("provider returned status {0}")]
    Status(reqwest::StatusCode),

    /// Failed to parse the JSON response
    #[error("failed to parse provider response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Missing expected field in response
    #[error("missing expected field in response: {0}")]
    MissingField(String),
}

/// Client for fetching forecast and nearby-city data from OpenWeatherMap
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenWeatherClient {
    /// Creates a new client that talks to the production API
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: OPENWEATHER_BASE_URL.to_string(),
        }
    }

    /// Points the client at a different base URL (used by tests with a mock
    /// server)
    #[allow(dead_code)]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetches the 5-day forecast for a city by name.
    ///
    /// # Returns
    /// * `Ok(FlatForecast)` - the location plus the flat sample list
    /// * `Err(ProviderError)` - if the request or parsing fails
    pub async fn fetch_forecast_by_city(&self, city: &str) -> Result<FlatForecast, ProviderError> {
        let response: ForecastResponse = self
            .fetch_json("forecast", &[("q".to_string(), city.to_string())])
            .await?;
        parse_forecast(response)
    }

    /// Fetches the 5-day forecast for a pair of coordinates.
    ///
    /// Library-surface alternative to [`fetch_forecast_by_city`]; the TUI
    /// itself always resolves by name.
    ///
    /// [`fetch_forecast_by_city`]: Self::fetch_forecast_by_city
    #[allow(dead_code)]
    pub async fn fetch_forecast_by_coords(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<FlatForecast, ProviderError> {
        let response: ForecastResponse = self
            .fetch_json(
                "forecast",
                &[("lat".to_string(), lat.to_string()), ("lon".to_string(), lon.to_string())],
            )
            .await?;
        parse_forecast(response)
    }

    /// Fetches current-weather summaries for cities near the coordinates.
    ///
    /// Callers resolve a city name to coordinates first (by fetching its
    /// forecast) and then pass the coordinates here; the two requests are
    /// sequenced, never issued in parallel.
    ///
    /// # Arguments
    /// * `lat`, `lon` - center of the search circle
    /// * `count` - number of cities to return
    pub async fn fetch_nearby_cities(
        &self,
        lat: f64,
        lon: f64,
        count: u8,
    ) -> Result<NearbyCities, ProviderError> {
        let response: FindResponse = self
            .fetch_json(
                "find",
                &[
                    ("lat".to_string(), lat.to_string()),
                    ("lon".to_string(), lon.to_string()),
                    ("cnt".to_string(), count.to_string()),
                ],
            )
            .await?;
        parse_nearby(response)
    }

    /// Issues a GET against the given API path and deserializes the body.
    ///
    /// A non-2xx status is an error before the body is ever looked at.
    async fn fetch_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T, ProviderError> {
        let url = format!("{}/{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .query(query)
            .query(&[("appid", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status));
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Converts a forecast response into the flat domain form.
fn parse_forecast(response: ForecastResponse) -> Result<FlatForecast, ProviderError> {
    let city = response.city;
    let location = Location {
        name: city.name,
        country: city.country,
        lat: city.coord.lat,
        lon: city.coord.lon,
        sunrise: city.sunrise,
        sunset: city.sunset,
    };

    let samples = response
        .list
        .into_iter()
        .map(sample_from_entry)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(FlatForecast { location, samples })
}

/// Converts a find response into nearby-city summaries.
fn parse_nearby(response: FindResponse) -> Result<NearbyCities, ProviderError> {
    let cities = response
        .list
        .into_iter()
        .map(|entry| {
            let condition = first_condition(&entry.weather)?;
            Ok(CitySample {
                name: entry.name,
                temp_kelvin: entry.main.temp,
                condition,
            })
        })
        .collect::<Result<Vec<_>, ProviderError>>()?;

    Ok(NearbyCities { cities })
}

/// Converts one forecast list entry into a domain sample.
fn sample_from_entry(entry: SlotEntry) -> Result<RawSample, ProviderError> {
    let condition = first_condition(&entry.weather)?;
    Ok(RawSample {
        dt: entry.dt,
        temp_kelvin: entry.main.temp,
        feels_like_kelvin: entry.main.feels_like,
        condition,
        wind_speed: entry.wind.speed,
        wind_deg: entry.wind.deg,
        dt_txt: entry.dt_txt,
    })
}

/// Pulls the headline condition label out of a weather array.
fn first_condition(weather: &[WeatherEntry]) -> Result<String, ProviderError> {
    weather
        .first()
        .map(|w| w.main.clone())
        .ok_or_else(|| ProviderError::MissingField("weather".to_string()))
}

/// Forecast endpoint response structure
#[derive(Debug, Deserialize)]
struct ForecastResponse {
    list: Vec<SlotEntry>,
    city: CityEntry,
}

/// One 3-hour slot in the forecast list
#[derive(Debug, Deserialize)]
struct SlotEntry {
    dt: i64,
    dt_txt: String,
    main: MainEntry,
    weather: Vec<WeatherEntry>,
    wind: WindEntry,
}

/// Temperature block of a slot
#[derive(Debug, Deserialize)]
struct MainEntry {
    temp: f64,
    feels_like: f64,
}

/// Condition tag of a slot
#[derive(Debug, Deserialize)]
struct WeatherEntry {
    main: String,
}

/// Wind block of a slot
#[derive(Debug, Deserialize)]
struct WindEntry {
    speed: f64,
    deg: f64,
}

/// City block of a forecast response
#[derive(Debug, Deserialize)]
struct CityEntry {
    name: String,
    country: String,
    coord: CoordEntry,
    sunrise: i64,
    sunset: i64,
}

/// Coordinates of a city
#[derive(Debug, Deserialize)]
struct CoordEntry {
    lat: f64,
    lon: f64,
}

/// Find endpoint response structure
#[derive(Debug, Deserialize)]
struct FindResponse {
    list: Vec<FindEntry>,
}

/// One city in a find response
#[derive(Debug, Deserialize)]
struct FindEntry {
    name: String,
    main: FindMainEntry,
    weather: Vec<WeatherEntry>,
}

/// Temperature block of a find entry
#[derive(Debug, Deserialize)]
struct FindMainEntry {
    temp: f64,
}
