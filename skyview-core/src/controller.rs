use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::{
    error::{FetchError, SearchError},
    format::SunriseClock,
    model::Lookup,
    provider::WeatherProvider,
    state::{PendingSearch, SearchTicket, ViewState, WeatherSnapshot},
};

/// Owns the screen's view state and talks to the provider on its behalf.
#[derive(Debug)]
pub struct WeatherViewController {
    state: ViewState,
    provider: Arc<dyn WeatherProvider>,
    sunrise_clock: SunriseClock,
}

impl WeatherViewController {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self {
            state: ViewState::default(),
            provider,
            sunrise_clock: SunriseClock::default(),
        }
    }

    pub fn with_sunrise_clock(mut self, clock: SunriseClock) -> Self {
        self.sunrise_clock = clock;
        self
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn provider(&self) -> Arc<dyn WeatherProvider> {
        Arc::clone(&self.provider)
    }

    pub fn open_search(&mut self) {
        self.state = self.state.open_search();
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.state = self.state.with_input(text);
    }

    /// Search for `raw` and wait for the answer.
    ///
    /// Blank input is ignored without contacting the provider.
    pub async fn submit_search(&mut self, raw: &str) -> &ViewState {
        let Some(pending) = self.begin_search(raw) else {
            return &self.state;
        };

        let result = self.provider.current_conditions(&pending.city).await;
        self.complete_search(pending.ticket, result);

        &self.state
    }

    /// First half of [`submit_search`](Self::submit_search), for callers that
    /// run the provider request themselves.
    pub fn begin_search(&mut self, raw: &str) -> Option<PendingSearch> {
        let (next, pending) = self.state.begin_search(raw)?;
        info!(city = %pending.city, ticket = ?pending.ticket, "searching");
        self.state = next;
        Some(pending)
    }

    pub fn complete_search(&mut self, ticket: SearchTicket, result: Result<Lookup, FetchError>) {
        if !self.state.is_current(ticket) {
            debug!(?ticket, "discarding answer for superseded search");
            return;
        }

        let outcome = match result {
            Ok(Lookup::Found(conditions)) => {
                Ok(WeatherSnapshot::from_conditions(&conditions, self.sunrise_clock))
            }
            Ok(Lookup::NotFound) => Err(SearchError::NotFound),
            Err(err) => {
                warn!(error = %err, "weather lookup failed");
                Err(SearchError::from(&err))
            }
        };

        self.state = self.state.complete_search(ticket, outcome);
    }
}
