//! Core library for the `skyview` weather screen.
//!
//! This crate defines:
//! - The screen's view state and its pure transitions
//! - The controller that runs searches against a weather provider
//! - Icon mapping and display formatting
//! - Configuration & credentials handling
//!
//! It is used by `skyview-cli`, but a graphical front-end can drive the same
//! controller and render [`ViewState`] its own way.

pub mod config;
pub mod controller;
pub mod error;
pub mod forecast;
pub mod format;
pub mod icon;
pub mod model;
pub mod provider;
pub mod state;

pub use config::Config;
pub use controller::WeatherViewController;
pub use error::{FetchError, SearchError};
pub use forecast::{ForecastEntry, static_forecast};
pub use format::SunriseClock;
pub use icon::{IconSymbol, map_to_icon_symbol};
pub use model::{CurrentConditions, Lookup};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider, provider_from_config};
pub use state::{PendingSearch, Screen, SearchTicket, ViewState, WeatherSnapshot};
