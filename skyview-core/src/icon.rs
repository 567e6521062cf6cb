use serde::{Deserialize, Serialize};

/// Glyph shown for the current conditions and on forecast cards.
///
/// The identifiers follow the Material Community icon names the screen was
/// designed around, so a graphical front-end can use them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconSymbol {
    Sunny,
    PartlyCloudy,
    NightPartlyCloudy,
    Cloudy,
    Rainy,
    NightRainy,
    Hail,
    Lightning,
    Snowy,
    Fog,
    Windy,
}

impl IconSymbol {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconSymbol::Sunny => "weather-sunny",
            IconSymbol::PartlyCloudy => "weather-partly-cloudy",
            IconSymbol::NightPartlyCloudy => "weather-night-partly-cloudy",
            IconSymbol::Cloudy => "weather-cloudy",
            IconSymbol::Rainy => "weather-rainy",
            IconSymbol::NightRainy => "weather-night-rainy",
            IconSymbol::Hail => "weather-hail",
            IconSymbol::Lightning => "weather-lightning",
            IconSymbol::Snowy => "weather-snowy",
            IconSymbol::Fog => "weather-fog",
            IconSymbol::Windy => "weather-windy",
        }
    }

    /// Terminal rendition of the symbol.
    pub fn glyph(&self) -> &'static str {
        match self {
            IconSymbol::Sunny => "☀",
            IconSymbol::PartlyCloudy => "⛅",
            IconSymbol::NightPartlyCloudy => "☁☾",
            IconSymbol::Cloudy => "☁",
            IconSymbol::Rainy => "🌧",
            IconSymbol::NightRainy => "🌧☾",
            IconSymbol::Hail => "🌨",
            IconSymbol::Lightning => "🌩",
            IconSymbol::Snowy => "❄",
            IconSymbol::Fog => "🌫",
            IconSymbol::Windy => "🌬",
        }
    }

    #[cfg(test)]
    const fn all() -> &'static [IconSymbol] {
        &[
            IconSymbol::Sunny,
            IconSymbol::PartlyCloudy,
            IconSymbol::NightPartlyCloudy,
            IconSymbol::Cloudy,
            IconSymbol::Rainy,
            IconSymbol::NightRainy,
            IconSymbol::Hail,
            IconSymbol::Lightning,
            IconSymbol::Snowy,
            IconSymbol::Fog,
            IconSymbol::Windy,
        ]
    }
}

impl std::fmt::Display for IconSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Primary weather group reported by OpenWeather (`weather[0].main`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConditionCategory {
    Clear,
    Clouds,
    Rain,
    Drizzle,
    Thunderstorm,
    Snow,
    /// Mist, Smoke, Haze, Dust, Fog, Sand, Ash.
    Atmosphere,
    /// Squall, Tornado.
    Wind,
    Other(String),
}

impl From<&str> for ConditionCategory {
    fn from(value: &str) -> Self {
        match value {
            "Clear" => ConditionCategory::Clear,
            "Clouds" => ConditionCategory::Clouds,
            "Rain" => ConditionCategory::Rain,
            "Drizzle" => ConditionCategory::Drizzle,
            "Thunderstorm" => ConditionCategory::Thunderstorm,
            "Snow" => ConditionCategory::Snow,
            "Mist" | "Smoke" | "Haze" | "Dust" | "Fog" | "Sand" | "Ash" => {
                ConditionCategory::Atmosphere
            }
            "Squall" | "Tornado" => ConditionCategory::Wind,
            other => ConditionCategory::Other(other.to_string()),
        }
    }
}

/// OpenWeather icon codes end in `n` for night-time observations (`04n`).
fn is_night(icon_code: &str) -> bool {
    icon_code.ends_with('n')
}

/// Pick the glyph for a condition category and raw provider icon code.
///
/// Total: unrecognized categories fall back to [`IconSymbol::PartlyCloudy`].
pub fn map_to_icon_symbol(category: &str, icon_code: &str) -> IconSymbol {
    match ConditionCategory::from(category) {
        ConditionCategory::Clear => IconSymbol::Sunny,
        ConditionCategory::Clouds if is_night(icon_code) => IconSymbol::NightPartlyCloudy,
        ConditionCategory::Clouds => IconSymbol::PartlyCloudy,
        ConditionCategory::Rain if is_night(icon_code) => IconSymbol::NightRainy,
        ConditionCategory::Rain => IconSymbol::Rainy,
        // Drizzle has no glyph of its own.
        ConditionCategory::Drizzle => IconSymbol::Hail,
        ConditionCategory::Thunderstorm => IconSymbol::Lightning,
        ConditionCategory::Snow => IconSymbol::Snowy,
        ConditionCategory::Atmosphere => IconSymbol::Fog,
        ConditionCategory::Wind => IconSymbol::Windy,
        ConditionCategory::Other(_) => IconSymbol::PartlyCloudy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_categories_map_to_their_symbols() {
        let cases = [
            ("Clear", "01d", IconSymbol::Sunny),
            ("Clear", "01n", IconSymbol::Sunny),
            ("Drizzle", "09d", IconSymbol::Hail),
            ("Thunderstorm", "11d", IconSymbol::Lightning),
            ("Snow", "13d", IconSymbol::Snowy),
            ("Squall", "50d", IconSymbol::Windy),
            ("Tornado", "50d", IconSymbol::Windy),
        ];

        for (category, code, expected) in cases {
            assert_eq!(map_to_icon_symbol(category, code), expected, "{category}/{code}");
        }
    }

    #[test]
    fn clouds_and_rain_branch_on_night_suffix() {
        assert_eq!(map_to_icon_symbol("Clouds", "04n"), IconSymbol::NightPartlyCloudy);
        assert_eq!(map_to_icon_symbol("Clouds", "04d"), IconSymbol::PartlyCloudy);
        assert_eq!(map_to_icon_symbol("Rain", "10n"), IconSymbol::NightRainy);
        assert_eq!(map_to_icon_symbol("Rain", "10d"), IconSymbol::Rainy);
        assert_eq!(map_to_icon_symbol("Rain", ""), IconSymbol::Rainy);
    }

    #[test]
    fn atmosphere_group_maps_to_fog() {
        for category in ["Mist", "Smoke", "Haze", "Dust", "Fog", "Sand", "Ash"] {
            assert_eq!(map_to_icon_symbol(category, "50d"), IconSymbol::Fog);
        }
    }

    #[test]
    fn unknown_categories_fall_back_to_partly_cloudy() {
        for category in ["Sunny", "", "clear", "Volcano"] {
            assert_eq!(map_to_icon_symbol(category, "01d"), IconSymbol::PartlyCloudy);
        }
    }

    #[test]
    fn symbol_names_are_unique() {
        let mut names: Vec<_> = IconSymbol::all().iter().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), IconSymbol::all().len());
    }

    #[test]
    fn serde_name_matches_suffix_of_identifier() {
        let json = serde_json::to_string(&IconSymbol::NightPartlyCloudy).unwrap();
        assert_eq!(json, "\"night-partly-cloudy\"");
    }
}
