//! Application state management for Skycast
//!
//! This module contains the central application state: the current forecast
//! and nearby-city models, the day/night icon, the search input, and the
//! fetch sequencing. Models are replaced wholesale on every successful fetch;
//! nothing merges into a previous model.

use chrono::{Local, TimeZone, Timelike};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use thiserror::Error;

use crate::cli::StartupConfig;
use crate::data::{ForecastModel, NearbyCities, OpenWeatherClient, ProviderError};
use crate::daynight::{classify_day_night, DayNight};
use crate::forecast::{group_by_day, AggregateError};
use crate::prefs::FavoriteStore;
use crate::units::{epoch_to_hour_minute, to_12_hour, ClockTime};

/// Application state enum representing the current view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    /// A fetch sequence is in flight
    Loading,
    /// The dashboard is showing (possibly without data yet)
    Dashboard,
}

/// Errors from a full load sequence (fetch plus grouping)
#[derive(Debug, Error)]
pub enum LoadError {
    /// The provider request failed
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// The fetched samples could not be grouped
    #[error(transparent)]
    Aggregate(#[from] AggregateError),
}

/// Main application struct managing state and data
pub struct App {
    /// Current application state/view
    pub state: AppState,
    /// Grouped forecast for the active city, replaced wholesale per fetch
    pub model: Option<ForecastModel>,
    /// Nearby-city snapshot; fetched after the forecast and may lag behind it
    pub nearby: Option<NearbyCities>,
    /// Day/night icon currently displayed; kept as-is when classification
    /// is indeterminate
    pub current_icon: DayNight,
    /// Text the user has typed into the search box
    pub search_input: String,
    /// Status line for surfaced fetch errors and hints
    pub status: Option<String>,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    /// City search submitted but not yet fetched
    pending_search: Option<String>,
    /// Number of nearby cities to request
    nearby_count: u8,
    /// OpenWeatherMap API client
    client: OpenWeatherClient,
    /// Favorite-city persistence, absent when no config dir exists
    store: Option<FavoriteStore>,
}

impl App {
    /// Creates a new App from the startup configuration.
    ///
    /// The initial city is the CLI argument when given, otherwise the saved
    /// favorite. With neither, the app starts on an empty dashboard with a
    /// hint in the status line.
    pub fn new(config: StartupConfig) -> Self {
        let client = OpenWeatherClient::new(config.api_key.clone());
        let store = FavoriteStore::new();
        Self::assemble(config, client, store)
    }

    /// Creates an App with explicit client and store (for testing)
    #[cfg(test)]
    pub fn with_parts(
        config: StartupConfig,
        client: OpenWeatherClient,
        store: Option<FavoriteStore>,
    ) -> Self {
        Self::assemble(config, client, store)
    }

    fn assemble(
        config: StartupConfig,
        client: OpenWeatherClient,
        store: Option<FavoriteStore>,
    ) -> Self {
        let initial_city = config
            .city
            .or_else(|| store.as_ref().and_then(FavoriteStore::load));

        let (state, status, pending_search) = match initial_city {
            Some(city) => (AppState::Loading, None, Some(city)),
            None => (
                AppState::Dashboard,
                Some("Type a city name and press Enter".to_string()),
                None,
            ),
        };

        Self {
            state,
            model: None,
            nearby: None,
            current_icon: DayNight::Indeterminate,
            search_input: String::new(),
            status,
            should_quit: false,
            pending_search,
            nearby_count: config.nearby_count,
            client,
            store,
        }
    }

    /// Takes the submitted-but-unfetched city, if any.
    ///
    /// The main loop calls this each frame and runs the load sequence for
    /// whatever it returns.
    pub fn take_pending_search(&mut self) -> Option<String> {
        self.pending_search.take()
    }

    /// Runs the full load sequence for a city.
    ///
    /// Fetches the forecast, groups it into day buckets, refreshes the
    /// day/night icon, then fetches nearby cities from the coordinates the
    /// forecast resolved - one awaited request at a time. On success the
    /// city becomes the saved favorite. Any failure lands in the status line
    /// and leaves the previous models in place.
    pub async fn load_city(&mut self, city: &str) {
        self.state = AppState::Loading;
        self.status = None;

        match self.fetch_model(city).await {
            Ok(model) => {
                let now = Local::now();
                self.update_icon(to_12_hour(now.hour(), now.minute(), None), &model, &Local);

                match self
                    .client
                    .fetch_nearby_cities(model.location.lat, model.location.lon, self.nearby_count)
                    .await
                {
                    Ok(nearby) => self.nearby = Some(nearby),
                    Err(err) => self.status = Some(format!("Nearby places unavailable: {err}")),
                }

                if let Some(store) = &self.store {
                    // A failed preference write is not worth interrupting the view
                    let _ = store.save(city);
                }

                self.model = Some(model);
            }
            Err(err) => self.status = Some(err.to_string()),
        }

        self.state = AppState::Dashboard;
    }

    /// Fetches and groups the forecast for a city.
    async fn fetch_model(&self, city: &str) -> Result<ForecastModel, LoadError> {
        let flat = self.client.fetch_forecast_by_city(city).await?;
        let days = group_by_day(flat.samples, &Local)?;
        Ok(ForecastModel {
            location: flat.location,
            days,
        })
    }

    /// Re-evaluates the day/night icon for the given wall-clock moment.
    ///
    /// An indeterminate classification keeps the previously displayed icon
    /// rather than blanking it.
    pub fn update_icon<Tz: TimeZone>(
        &mut self,
        current: ClockTime,
        model: &ForecastModel,
        tz: &Tz,
    ) {
        let Ok((hour, minute)) = epoch_to_hour_minute(model.location.sunrise, tz) else {
            return;
        };
        let sunrise = to_12_hour(hour, minute, None);

        let Ok((hour, minute)) = epoch_to_hour_minute(model.location.sunset, tz) else {
            return;
        };
        let sunset = to_12_hour(hour, minute, None);

        match classify_day_night(current, sunrise, sunset) {
            DayNight::Indeterminate => {}
            verdict => self.current_icon = verdict,
        }
    }

    /// Handles keyboard input and updates state accordingly
    ///
    /// # Key Bindings
    /// - Printable characters: type into the search box
    /// - `Backspace`: delete the last typed character
    /// - `Enter`: search for the typed city
    /// - `Esc` or `Ctrl-C`: quit
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => {
                let city = self.search_input.trim().to_string();
                if !city.is_empty() {
                    self.pending_search = Some(city);
                }
                self.search_input.clear();
            }
            KeyCode::Backspace => {
                self.search_input.pop();
            }
            KeyCode::Char(c) => {
                if c == 'c' && key_event.modifiers.contains(KeyModifiers::CONTROL) {
                    self.should_quit = true;
                } else {
                    self.search_input.push(c);
                }
            }
            _ => {}
        }
    }
}
