use chrono::{DateTime, FixedOffset, Utc};

/// Current conditions for one city as reported by a provider, before any
/// display formatting.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub city: String,
    pub country: Option<String>,
    pub temperature_k: f64,
    pub humidity_pct: Option<u8>,
    /// Primary weather group, e.g. "Rain".
    pub condition: String,
    /// Raw provider icon code, e.g. "10n".
    pub icon_code: String,
    pub wind_speed_mps: Option<f64>,
    pub sunrise: Option<DateTime<Utc>>,
    /// UTC offset of the city itself, when the provider reports it.
    pub utc_offset: Option<FixedOffset>,
}

/// Outcome of a lookup that reached the provider and got an answer back.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    Found(CurrentConditions),
    /// The provider answered with a non-success status.
    NotFound,
}
