//! Conversions from provider units to the strings the screen shows.

use chrono::{DateTime, FixedOffset, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Shown in place of a metric the provider did not report.
pub const MISSING: &str = "-";

const ZERO_CELSIUS_IN_KELVIN: f64 = 273.15;

/// Which wall clock the sunrise time is shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SunriseClock {
    /// Time zone of the machine running the screen.
    #[default]
    Device,
    /// Time zone of the searched city, as reported by the provider.
    City,
}

pub fn celsius_from_kelvin(kelvin: f64) -> f64 {
    kelvin - ZERO_CELSIUS_IN_KELVIN
}

/// Kelvin to a Celsius string with exactly one fractional digit.
pub fn format_temperature(kelvin: f64) -> String {
    format!("{:.1}", celsius_from_kelvin(kelvin))
}

pub fn format_wind(speed_mps: Option<f64>) -> String {
    match speed_mps {
        Some(speed) => format!("{speed} m/s"),
        None => MISSING.to_string(),
    }
}

pub fn format_humidity(humidity_pct: Option<u8>) -> String {
    match humidity_pct {
        Some(pct) => format!("{pct}%"),
        None => MISSING.to_string(),
    }
}

/// 12-hour clock without a leading zero on the hour, e.g. "6:12 AM".
pub fn format_clock<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    time.format("%-I:%M %p").to_string()
}

pub fn format_sunrise(
    sunrise: Option<DateTime<Utc>>,
    city_offset: Option<FixedOffset>,
    clock: SunriseClock,
) -> String {
    let Some(sunrise) = sunrise else {
        return MISSING.to_string();
    };

    match (clock, city_offset) {
        (SunriseClock::City, Some(offset)) => format_clock(&sunrise.with_timezone(&offset)),
        // A city clock without a reported offset degrades to the device clock.
        _ => format_clock(&sunrise.with_timezone(&Local)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(ts: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(ts, 0).unwrap()
    }

    #[test]
    fn kelvin_is_rounded_to_one_decimal() {
        assert_eq!(format_temperature(300.00), "26.9");
        assert_eq!(format_temperature(295.15), "22.0");
        assert_eq!(format_temperature(273.15), "0.0");
        assert_eq!(format_temperature(263.0), "-10.1");
    }

    #[test]
    fn wind_prints_provider_number_as_is() {
        assert_eq!(format_wind(Some(3.0)), "3 m/s");
        assert_eq!(format_wind(Some(4.12)), "4.12 m/s");
        assert_eq!(format_wind(None), "-");
    }

    #[test]
    fn humidity_is_a_percentage() {
        assert_eq!(format_humidity(Some(60)), "60%");
        assert_eq!(format_humidity(None), "-");
    }

    #[test]
    fn clock_is_twelve_hour_without_leading_zero() {
        // 1970-01-01 00:05 UTC
        assert_eq!(format_clock(&utc(5 * 60)), "12:05 AM");
        // 13:07
        assert_eq!(format_clock(&utc(13 * 3600 + 7 * 60)), "1:07 PM");
        // noon
        assert_eq!(format_clock(&utc(12 * 3600)), "12:00 PM");
        // 06:12
        assert_eq!(format_clock(&utc(6 * 3600 + 12 * 60)), "6:12 AM");
    }

    #[test]
    fn sunrise_uses_city_offset_when_asked() {
        let offset = FixedOffset::east_opt(9 * 3600).unwrap();
        // 20:30 UTC is 05:30 in UTC+9
        let sunrise = utc(20 * 3600 + 30 * 60);

        assert_eq!(
            format_sunrise(Some(sunrise), Some(offset), SunriseClock::City),
            "5:30 AM"
        );
    }

    #[test]
    fn missing_sunrise_degrades_to_dash() {
        assert_eq!(format_sunrise(None, None, SunriseClock::Device), "-");
        assert_eq!(format_sunrise(None, None, SunriseClock::City), "-");
    }

    #[test]
    fn sunrise_clock_reads_lowercase() {
        let clock: SunriseClock = serde_json::from_str("\"city\"").unwrap();
        assert_eq!(clock, SunriseClock::City);
        assert_eq!(SunriseClock::default(), SunriseClock::Device);
    }
}
