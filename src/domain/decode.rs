use std::fmt;

use serde::{Deserialize, Deserializer};
use thiserror::Error;
use tracing::debug;

use super::dates::{self, MILLIS_PER_DAY};
use super::units::{self, UnitMode};

const STATUS_OK: u16 = 200;
const STATUS_NOT_FOUND: u16 = 404;

#[derive(Debug, Error)]
pub enum DecodeError {
    /// JSON unparsable or a required field missing. One bad day entry
    /// invalidates the whole forecast; there is no per-day recovery.
    #[error("malformed forecast payload: {0}")]
    MalformedPayload(String),
    /// The service reported 404 for the location query.
    #[error("location not found")]
    LocationNotFound,
    /// Any other non-OK service status; safe to retry later.
    #[error("weather service reported status {0}")]
    ServerError(u16),
}

/// One display-ready forecast day. Ownership passes to the caller; nothing
/// here is cached across decode calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastLine {
    pub date_label: String,
    pub description: String,
    pub temperature_range: String,
    /// Provider condition code, kept so the display layer can pick icon and
    /// art assets without re-parsing the payload.
    pub condition_code: i64,
}

impl fmt::Display for ForecastLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} - {}",
            self.date_label, self.description, self.temperature_range
        )
    }
}

/// Decodes a raw forecast payload into ordered per-day display lines.
///
/// `now_millis` is the current instant (epoch milliseconds) and `offset_at`
/// resolves the time-zone offset in effect at a given instant. The payload's
/// own per-entry timestamps are ignored: entries are trusted to arrive in
/// chronological order starting today, so each day is synthesized from the
/// normalized current day plus the entry index.
pub fn decode_forecast(
    raw: &str,
    now_millis: i64,
    mode: UnitMode,
    offset_at: impl Fn(i64) -> i64,
) -> Result<Vec<ForecastLine>, DecodeError> {
    let envelope: Envelope =
        serde_json::from_str(raw).map_err(|err| DecodeError::MalformedPayload(err.to_string()))?;

    // A non-OK status short-circuits before any day entry is looked at.
    match envelope.status {
        Some(STATUS_NOT_FOUND) => return Err(DecodeError::LocationNotFound),
        Some(status) if status != STATUS_OK => return Err(DecodeError::ServerError(status)),
        _ => {}
    }

    let list = envelope
        .list
        .ok_or_else(|| DecodeError::MalformedPayload("missing forecast list".to_string()))?;
    let entries: Vec<DayEntry> = serde_json::from_value(list)
        .map_err(|err| DecodeError::MalformedPayload(err.to_string()))?;

    let utc_now = dates::utc_from_local(now_millis, offset_at(now_millis));
    let start_day = dates::normalize_to_midnight_utc(utc_now);
    debug!(days = entries.len(), "decoding forecast entries");

    let mut lines = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        let condition = entry.weather.first().ok_or_else(|| {
            DecodeError::MalformedPayload("day entry has no weather condition".to_string())
        })?;

        let day_utc = start_day + index as i64 * MILLIS_PER_DAY;
        let day_local = dates::local_from_utc(day_utc, offset_at(day_utc));

        lines.push(ForecastLine {
            date_label: dates::friendly_day_label(now_millis, day_local, false, &offset_at),
            description: condition.main.clone(),
            temperature_range: units::format_high_low(entry.temp.max, entry.temp.min, mode),
            condition_code: condition.id,
        });
    }

    Ok(lines)
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default, rename = "cod", deserialize_with = "status_code")]
    status: Option<u16>,
    // Kept raw so a bad service status wins over a malformed entry list.
    list: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct DayEntry {
    temp: TempRange,
    weather: Vec<ConditionEntry>,
}

#[derive(Debug, Deserialize)]
struct TempRange {
    max: f64,
    min: f64,
}

#[derive(Debug, Deserialize)]
struct ConditionEntry {
    main: String,
    #[serde(default)]
    id: i64,
}

/// The service sends "cod" as a JSON number or as a numeric string.
fn status_code<'de, D>(deserializer: D) -> Result<Option<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u16),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(value)) => Ok(Some(value)),
        Some(Raw::Text(text)) => text
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom("status code is not numeric")),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn fixed_now() -> i64 {
        // 2026-06-08 is a Monday.
        NaiveDate::from_ymd_opt(2026, 6, 8)
            .unwrap()
            .and_hms_opt(15, 0, 0)
            .unwrap()
            .and_utc()
            .timestamp_millis()
    }

    fn decode(raw: &str) -> Result<Vec<ForecastLine>, DecodeError> {
        decode_forecast(raw, fixed_now(), UnitMode::Metric, |_| 0)
    }

    #[test]
    fn status_404_maps_to_location_not_found() {
        assert!(matches!(
            decode(r#"{"cod":"404"}"#),
            Err(DecodeError::LocationNotFound)
        ));
        assert!(matches!(
            decode(r#"{"cod":404}"#),
            Err(DecodeError::LocationNotFound)
        ));
    }

    #[test]
    fn other_non_ok_statuses_map_to_server_error() {
        assert!(matches!(
            decode(r#"{"cod":"500"}"#),
            Err(DecodeError::ServerError(500))
        ));
    }

    #[test]
    fn status_check_wins_over_a_broken_list() {
        let raw = r#"{"cod":503,"list":[{"bogus":true}]}"#;
        assert!(matches!(decode(raw), Err(DecodeError::ServerError(503))));
    }

    #[test]
    fn non_numeric_status_is_malformed() {
        assert!(matches!(
            decode(r#"{"cod":"teapot"}"#),
            Err(DecodeError::MalformedPayload(_))
        ));
    }

    #[test]
    fn unparsable_json_is_malformed() {
        assert!(matches!(
            decode("{not json"),
            Err(DecodeError::MalformedPayload(_))
        ));
    }

    #[test]
    fn missing_list_is_malformed() {
        assert!(matches!(
            decode(r#"{"cod":200}"#),
            Err(DecodeError::MalformedPayload(_))
        ));
    }

    #[test]
    fn one_bad_entry_aborts_the_whole_decode() {
        let raw = r#"{
            "cod": 200,
            "list": [
                {"temp": {"max": 25.0, "min": 10.0}, "weather": [{"main": "Clear", "id": 800}]},
                {"temp": {"min": 8.0}, "weather": [{"main": "Rain", "id": 500}]}
            ]
        }"#;
        assert!(matches!(decode(raw), Err(DecodeError::MalformedPayload(_))));
    }

    #[test]
    fn entry_without_conditions_is_malformed() {
        let raw = r#"{"list":[{"temp":{"max":5.0,"min":1.0},"weather":[]}]}"#;
        assert!(matches!(decode(raw), Err(DecodeError::MalformedPayload(_))));
    }

    #[test]
    fn empty_list_yields_empty_output() {
        let lines = decode(r#"{"cod":200,"list":[]}"#).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn days_are_sequenced_positionally_from_today() {
        let raw = r#"{
            "cod": 200,
            "list": [
                {"temp": {"max": 25.0, "min": 10.0}, "weather": [{"main": "Clear", "id": 800}]},
                {"temp": {"max": 20.0, "min": 8.0}, "weather": [{"main": "Rain", "id": 500}]},
                {"temp": {"max": 15.0, "min": 5.0}, "weather": [{"main": "Thunderstorm", "id": 200}]}
            ]
        }"#;
        let lines = decode(raw).unwrap();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].date_label.starts_with("Today"));
        assert_eq!(lines[0].temperature_range, "25°C / 10°C");
        assert_eq!(lines[1].date_label, "Tomorrow");
        assert_eq!(lines[1].description, "Rain");
        assert_eq!(lines[2].date_label, "Wednesday");
        assert_eq!(lines[2].condition_code, 200);
    }

    #[test]
    fn display_joins_the_three_fields() {
        let line = ForecastLine {
            date_label: "Today, June 8".to_string(),
            description: "Clear".to_string(),
            temperature_range: "25°C / 10°C".to_string(),
            condition_code: 800,
        };
        assert_eq!(line.to_string(), "Today, June 8 - Clear - 25°C / 10°C");
    }

    #[test]
    fn imperial_mode_converts_the_range() {
        let raw = r#"{"list":[{"temp":{"max":25.0,"min":10.0},"weather":[{"main":"Clear","id":800}]}]}"#;
        let lines = decode_forecast(raw, fixed_now(), UnitMode::Imperial, |_| 0).unwrap();
        assert_eq!(lines[0].temperature_range, "77°F / 50°F");
    }
}
