use serde::Serialize;

use crate::icon::IconSymbol;

/// One card of the forecast strip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForecastEntry {
    pub day: &'static str,
    pub icon: IconSymbol,
    pub temperature_c: f64,
}

/// The forecast strip is fixed; nothing feeds it live data.
pub const STATIC_FORECAST: [ForecastEntry; 5] = [
    ForecastEntry { day: "Fri", icon: IconSymbol::Sunny, temperature_c: 30.3 },
    ForecastEntry { day: "Sat", icon: IconSymbol::PartlyCloudy, temperature_c: 28.1 },
    ForecastEntry { day: "Sun", icon: IconSymbol::Rainy, temperature_c: 25.7 },
    ForecastEntry { day: "Mon", icon: IconSymbol::Lightning, temperature_c: 27.2 },
    ForecastEntry { day: "Tue", icon: IconSymbol::Cloudy, temperature_c: 26.4 },
];

pub fn static_forecast() -> &'static [ForecastEntry] {
    &STATIC_FORECAST
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_has_five_days_in_order() {
        let days: Vec<_> = static_forecast().iter().map(|e| e.day).collect();
        assert_eq!(days, ["Fri", "Sat", "Sun", "Mon", "Tue"]);
    }
}
