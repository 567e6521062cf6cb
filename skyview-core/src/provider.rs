use async_trait::async_trait;
use std::fmt::Debug;

use crate::{Config, FetchError, Lookup, provider::openweather::OpenWeatherProvider};

pub mod openweather;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Current conditions for a city name.
    async fn current_conditions(&self, city: &str) -> Result<Lookup, FetchError>;
}

/// Construct the OpenWeather provider from config.
///
/// The API key comes from `OPENWEATHER_API_KEY` when set, otherwise from the
/// config file.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.resolve_api_key()?;

    let provider = OpenWeatherProvider::with_base_url(api_key, config.base_url());
    Ok(Box::new(provider))
}
