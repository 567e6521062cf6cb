//! View state of the weather screen and its pure transitions.
//!
//! Every transition borrows the current state and returns the next one, so
//! the controller (or a test) decides when a new state becomes current.

use serde::Serialize;

use crate::{
    error::SearchError,
    format::{self, SunriseClock},
    icon::{IconSymbol, map_to_icon_symbol},
    model::CurrentConditions,
};

/// Everything the main panel shows for one city.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherSnapshot {
    pub city: String,
    pub region: String,
    /// Celsius with exactly one fractional digit.
    pub temperature: String,
    pub condition: String,
    pub wind: String,
    pub humidity: String,
    pub sunrise: String,
    pub icon_code: String,
    pub icon_symbol: IconSymbol,
}

impl WeatherSnapshot {
    /// What the screen shows before any search.
    pub fn initial() -> Self {
        let condition = "Sunny";
        let icon_code = "01d";

        Self {
            city: "San Francisco".to_string(),
            region: "California, USA".to_string(),
            temperature: "36.9".to_string(),
            condition: condition.to_string(),
            wind: "12 km/h".to_string(),
            humidity: "68%".to_string(),
            sunrise: "6:12 AM".to_string(),
            icon_code: icon_code.to_string(),
            icon_symbol: map_to_icon_symbol(condition, icon_code),
        }
    }

    pub fn from_conditions(conditions: &CurrentConditions, clock: SunriseClock) -> Self {
        Self {
            city: conditions.city.clone(),
            region: conditions.country.clone().unwrap_or_default(),
            temperature: format::format_temperature(conditions.temperature_k),
            condition: conditions.condition.clone(),
            wind: format::format_wind(conditions.wind_speed_mps),
            humidity: format::format_humidity(conditions.humidity_pct),
            sunrise: format::format_sunrise(conditions.sunrise, conditions.utc_offset, clock),
            icon_code: conditions.icon_code.clone(),
            icon_symbol: map_to_icon_symbol(&conditions.condition, &conditions.icon_code),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchState {
    pub is_open: bool,
    pub input: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RequestState {
    pub is_loading: bool,
    pub error: Option<SearchError>,
}

/// Identifies one submitted search. Later searches get larger tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SearchTicket(u64);

/// A search that has been started and awaits its provider answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSearch {
    pub ticket: SearchTicket,
    /// Trimmed city name to look up.
    pub city: String,
}

/// What is visible in the center of the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Screen<'a> {
    Loading,
    Error(SearchError),
    Snapshot(&'a WeatherSnapshot),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewState {
    pub snapshot: WeatherSnapshot,
    pub search: SearchState,
    pub request: RequestState,
    #[serde(skip)]
    last_ticket: Option<SearchTicket>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            snapshot: WeatherSnapshot::initial(),
            search: SearchState::default(),
            request: RequestState::default(),
            last_ticket: None,
        }
    }
}

impl ViewState {
    pub fn open_search(&self) -> Self {
        Self {
            search: SearchState { is_open: true, ..self.search.clone() },
            ..self.clone()
        }
    }

    pub fn with_input(&self, text: impl Into<String>) -> Self {
        Self {
            search: SearchState { input: text.into(), ..self.search.clone() },
            ..self.clone()
        }
    }

    /// Start a search for `raw`. Blank input is ignored and yields `None`.
    pub fn begin_search(&self, raw: &str) -> Option<(Self, PendingSearch)> {
        let city = raw.trim();
        if city.is_empty() {
            return None;
        }

        let ticket = match self.last_ticket {
            Some(SearchTicket(n)) => SearchTicket(n + 1),
            None => SearchTicket(1),
        };

        let next = Self {
            request: RequestState { is_loading: true, error: None },
            last_ticket: Some(ticket),
            ..self.clone()
        };

        Some((next, PendingSearch { ticket, city: city.to_string() }))
    }

    /// Apply the answer for `ticket`.
    ///
    /// An answer for anything but the most recently issued ticket is stale and
    /// leaves the state as it is.
    pub fn complete_search(
        &self,
        ticket: SearchTicket,
        outcome: Result<WeatherSnapshot, SearchError>,
    ) -> Self {
        if !self.is_current(ticket) {
            return self.clone();
        }

        let (snapshot, error) = match outcome {
            Ok(snapshot) => (snapshot, None),
            Err(err) => (self.snapshot.clone(), Some(err)),
        };

        Self {
            snapshot,
            search: SearchState::default(),
            request: RequestState { is_loading: false, error },
            last_ticket: self.last_ticket,
        }
    }

    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        self.last_ticket == Some(ticket)
    }

    pub fn screen(&self) -> Screen<'_> {
        if self.request.is_loading {
            Screen::Loading
        } else if let Some(err) = self.request.error {
            Screen::Error(err)
        } else {
            Screen::Snapshot(&self.snapshot)
        }
    }
}
