use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{
    error::FetchError,
    model::{CurrentConditions, Lookup},
};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Point the provider at another host, e.g. a mock server.
    pub fn with_base_url(api_key: String, base_url: &str) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    async fn fetch_current(&self, city: &str) -> Result<Lookup, FetchError> {
        let url = format!("{}{}", self.base_url, CURRENT_WEATHER_PATH);

        let res = self
            .http
            .get(&url)
            .query(&[("q", city), ("appid", self.api_key.as_str())])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        // A body that is not JSON is a failed fetch whatever the status.
        let envelope: OwEnvelope = serde_json::from_str(&body).inspect_err(|_| {
            debug!(%status, body = %truncate_body(&body), "unreadable OpenWeather response");
        })?;

        if !status.is_success() {
            debug!(%status, body = %truncate_body(&body), "OpenWeather rejected lookup");
            return Ok(Lookup::NotFound);
        }

        match &envelope.cod {
            Some(cod) if cod.is_success() => {}
            Some(cod) => {
                debug!(%cod, "OpenWeather answered with a failure code");
                return Ok(Lookup::NotFound);
            }
            None => {
                debug!("OpenWeather answer carries no code");
                return Ok(Lookup::NotFound);
            }
        }

        let parsed: OwCurrentResponse = serde_json::from_str(&body)?;
        parsed.into_conditions().map(Lookup::Found)
    }
}

/// `cod` is a number on success but a string on most failures (`"404"`).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OwCod {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for OwCod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OwCod::Number(n) => write!(f, "{n}"),
            OwCod::Text(s) => f.write_str(s),
        }
    }
}

impl OwCod {
    fn is_success(&self) -> bool {
        matches!(self, OwCod::Number(200))
    }
}

#[derive(Debug, Deserialize)]
struct OwEnvelope {
    cod: Option<OwCod>,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: Option<u8>,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct OwSys {
    country: Option<String>,
    sunrise: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: Option<OwWind>,
    #[serde(default)]
    sys: OwSys,
    /// Shift in seconds from UTC.
    timezone: Option<i32>,
}

impl OwCurrentResponse {
    fn into_conditions(self) -> Result<CurrentConditions, FetchError> {
        let weather = self
            .weather
            .into_iter()
            .next()
            .ok_or(FetchError::MissingField("weather[0]"))?;

        Ok(CurrentConditions {
            city: self.name,
            country: self.sys.country.filter(|c| !c.is_empty()),
            temperature_k: self.main.temp,
            humidity_pct: self.main.humidity,
            condition: weather.main,
            icon_code: weather.icon,
            wind_speed_mps: self.wind.and_then(|w| w.speed),
            sunrise: self.sys.sunrise.and_then(unix_to_utc),
            utc_offset: self.timezone.and_then(FixedOffset::east_opt),
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_conditions(&self, city: &str) -> Result<Lookup, FetchError> {
        self.fetch_current(city).await
    }
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0)
}

fn truncate_body(body: &str) -> &str {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<CurrentConditions, FetchError> {
        let parsed: OwCurrentResponse = serde_json::from_str(json)?;
        parsed.into_conditions()
    }

    #[test]
    fn full_payload_maps_every_field() {
        let conditions = parse(
            r#"{
                "cod": 200,
                "name": "Tokyo",
                "timezone": 32400,
                "sys": { "country": "JP", "sunrise": 1700000000 },
                "main": { "temp": 295.15, "humidity": 60 },
                "weather": [ { "main": "Clear", "icon": "01d" } ],
                "wind": { "speed": 3 }
            }"#,
        )
        .unwrap();

        assert_eq!(conditions.city, "Tokyo");
        assert_eq!(conditions.country.as_deref(), Some("JP"));
        assert_eq!(conditions.temperature_k, 295.15);
        assert_eq!(conditions.humidity_pct, Some(60));
        assert_eq!(conditions.condition, "Clear");
        assert_eq!(conditions.icon_code, "01d");
        assert_eq!(conditions.wind_speed_mps, Some(3.0));
        assert_eq!(conditions.sunrise.map(|t| t.timestamp()), Some(1_700_000_000));
        assert_eq!(conditions.utc_offset, FixedOffset::east_opt(32400));
    }

    #[test]
    fn optional_sections_may_be_absent() {
        let conditions = parse(
            r#"{
                "name": "Nowhere",
                "main": { "temp": 280.0 },
                "weather": [ { "main": "Mist", "icon": "50n" } ]
            }"#,
        )
        .unwrap();

        assert_eq!(conditions.country, None);
        assert_eq!(conditions.wind_speed_mps, None);
        assert_eq!(conditions.humidity_pct, None);
        assert_eq!(conditions.sunrise, None);
        assert_eq!(conditions.utc_offset, None);
    }

    #[test]
    fn empty_weather_list_is_a_missing_field() {
        let err = parse(r#"{ "name": "X", "main": { "temp": 280.0 }, "weather": [] }"#)
            .unwrap_err();
        assert!(matches!(err, FetchError::MissingField("weather[0]")));
    }

    #[test]
    fn missing_temperature_is_a_decode_error() {
        let err = parse(r#"{ "name": "X", "main": {}, "weather": [] }"#).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn only_numeric_200_is_success() {
        let ok: OwEnvelope = serde_json::from_str(r#"{ "cod": 200 }"#).unwrap();
        let text: OwEnvelope = serde_json::from_str(r#"{ "cod": "200" }"#).unwrap();
        let missing: OwEnvelope = serde_json::from_str(r#"{ "cod": "404" }"#).unwrap();

        let absent: OwEnvelope = serde_json::from_str("{}").unwrap();

        assert!(ok.cod.unwrap().is_success());
        assert!(!text.cod.unwrap().is_success());
        assert!(!missing.cod.unwrap().is_success());
        assert!(absent.cod.is_none());
    }

    #[test]
    fn failure_code_displays_as_sent() {
        let text: OwEnvelope = serde_json::from_str(r#"{ "cod": "404" }"#).unwrap();
        let number: OwEnvelope = serde_json::from_str(r#"{ "cod": 401 }"#).unwrap();

        assert_eq!(text.cod.unwrap().to_string(), "404");
        assert_eq!(number.cod.unwrap().to_string(), "401");
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let long = "é".repeat(300);
        assert_eq!(truncate_body(&long).chars().count(), 200);
        assert_eq!(truncate_body("short"), "short");
    }
}
