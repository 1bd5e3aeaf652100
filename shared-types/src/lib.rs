use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Map centre and weather location used when nothing has been chosen yet.
pub const DEFAULT_COORDINATE: Coordinate = Coordinate {
    lat: 30.0444,
    lng: 31.2357,
};
pub const DEFAULT_CITY: &str = "Cairo";

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Default for Coordinate {
    fn default() -> Self {
        DEFAULT_COORDINATE
    }
}

/// A map coordinate, enriched with a place name once reverse geocoding succeeds.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChosenLocation {
    pub lat: f64,
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

impl ChosenLocation {
    pub fn unnamed(coordinate: Coordinate) -> Self {
        Self {
            lat: coordinate.lat,
            lng: coordinate.lng,
            city: None,
        }
    }

    pub fn named(coordinate: Coordinate, city: impl Into<String>) -> Self {
        Self {
            lat: coordinate.lat,
            lng: coordinate.lng,
            city: Some(city.into()),
        }
    }

    pub fn fallback() -> Self {
        Self::named(DEFAULT_COORDINATE, DEFAULT_CITY)
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            lat: self.lat,
            lng: self.lng,
        }
    }
}

/// Body of `POST /api/weather`. Dates travel as `YYYY-MM-DD`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ActivityRequest {
    pub city: String,
    pub activity: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("response does not match the weather result schema: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("chart series `{series}` has {found} points but there are {expected} labels")]
    MisalignedChart {
        series: &'static str,
        expected: usize,
        found: usize,
    },
}

/// Air quality arrives either as the 1..=3 index or as its label.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum AirQuality {
    Index(f64),
    Label(String),
}

impl fmt::Display for AirQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AirQuality::Index(index) => write!(f, "{}", index),
            AirQuality::Label(label) => f.write_str(label),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DailyWeather {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Mean temperature, °C.
    #[serde(rename = "T2M")]
    pub temperature: f64,
    /// Precipitation, mm.
    #[serde(rename = "PRECTOT")]
    pub precipitation: f64,
    /// Wind speed at 10 m, m/s.
    #[serde(rename = "WS10M")]
    pub wind_speed: f64,
    pub air_quality: AirQuality,
    #[serde(default)]
    pub suitable: bool,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// Parallel series for the forecast chart, index-aligned with `labels`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub temperature: Vec<f64>,
    pub rain: Vec<f64>,
    pub wind: Vec<f64>,
    pub air_quality: Vec<f64>,
}

impl ChartData {
    pub fn validate(&self) -> Result<(), SchemaError> {
        let expected = self.labels.len();
        let series: [(&'static str, usize); 4] = [
            ("temperature", self.temperature.len()),
            ("rain", self.rain.len()),
            ("wind", self.wind.len()),
            ("air_quality", self.air_quality.len()),
        ];

        match series.into_iter().find(|(_, found)| *found != expected) {
            Some((series, found)) => Err(SchemaError::MisalignedChart {
                series,
                expected,
                found,
            }),
            None => Ok(()),
        }
    }
}

/// The weather recommendation returned by the backend for one query.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AiResult {
    pub activity: String,
    #[serde(default)]
    pub best_day: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub daily_weather: Vec<DailyWeather>,
    pub alternative_days: Vec<String>,
    pub chart_data: ChartData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nearest_better_city: Option<String>,
}

impl AiResult {
    pub fn from_json(body: &str) -> Result<Self, SchemaError> {
        let result: AiResult = serde_json::from_str(body)?;
        result.chart_data.validate()?;
        Ok(result)
    }

    pub fn from_value(value: Value) -> Result<Self, SchemaError> {
        let result: AiResult = serde_json::from_value(value)?;
        result.chart_data.validate()?;
        Ok(result)
    }
}

/// `{"error": "..."}` as sent by the backend on failure.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ErrorPayload {
    pub error: String,
}

/// Returns the error description when a stored document is flagged as a failure.
/// `null`, `false`, `0` and the empty string do not count as a flag.
pub fn error_flag(document: &Value) -> Option<String> {
    match document.get("error")? {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(message) if message.is_empty() => None,
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn hiking_result() -> Value {
        json!({
            "activity": "hiking",
            "best_day": "2024-06-02",
            "start_date": "2024-06-01",
            "end_date": "2024-06-03",
            "daily_weather": [{
                "T2M": 22, "PRECTOT": 0, "WS10M": 3, "air_quality": 1,
                "suitable": true, "recommendations": ["bring water"]
            }],
            "alternative_days": ["2024-06-03"],
            "chart_data": {
                "labels": ["06-01", "06-02", "06-03"],
                "temperature": [20, 22, 21],
                "rain": [1, 0, 2],
                "wind": [4, 3, 5],
                "air_quality": [2, 1, 2]
            }
        })
    }

    #[test]
    fn test_parses_result_with_integer_metrics() {
        let result = AiResult::from_value(hiking_result()).unwrap();
        assert_eq!(result.activity, "hiking");
        assert_eq!(result.best_day.as_deref(), Some("2024-06-02"));
        assert_eq!(result.daily_weather[0].temperature, 22.0);
        assert_eq!(result.daily_weather[0].air_quality, AirQuality::Index(1.0));
        assert_eq!(result.chart_data.labels.len(), 3);
    }

    #[test]
    fn test_rejects_misaligned_chart() {
        let mut doc = hiking_result();
        doc["chart_data"]["rain"] = json!([1, 0]);
        match AiResult::from_value(doc) {
            Err(SchemaError::MisalignedChart {
                series,
                expected,
                found,
            }) => {
                assert_eq!(series, "rain");
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("expected misaligned chart, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_error_payload() {
        let err = AiResult::from_json(r#"{"error":"Activity not provided"}"#).unwrap_err();
        assert!(matches!(err, SchemaError::Decode(_)));
    }

    #[test]
    fn test_backend_daily_record_shape() {
        let record: DailyWeather = serde_json::from_value(json!({
            "date": "2024-12-01",
            "T2M": -1.5,
            "PRECTOT": 2.2,
            "WS10M": 5.0,
            "air_quality": "Moderate",
            "snow": true,
            "probabilities": {"prob_above_normal_temp": 0.6},
            "recommendations": ["Carry umbrella"]
        }))
        .unwrap();

        assert_eq!(record.date.as_deref(), Some("2024-12-01"));
        assert_eq!(record.air_quality.to_string(), "Moderate");
        assert!(!record.suitable);
    }

    #[test]
    fn test_unnamed_location_omits_city() {
        let location = ChosenLocation::unnamed(Coordinate { lat: 1.5, lng: 2.0 });
        let encoded = serde_json::to_value(&location).unwrap();
        assert_eq!(encoded, json!({"lat": 1.5, "lng": 2.0}));
    }

    #[test]
    fn test_activity_request_dates_use_iso_format() {
        let request = ActivityRequest {
            city: "Cairo".to_string(),
            activity: "picnic".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
        };
        let encoded = serde_json::to_value(&request).unwrap();
        assert_eq!(encoded["start_date"], "2024-06-01");
        assert_eq!(encoded["end_date"], "2024-06-03");
    }

    #[test]
    fn test_error_flag() {
        assert_eq!(
            error_flag(&json!({"error": "Server error"})).as_deref(),
            Some("Server error")
        );
        assert_eq!(error_flag(&json!({"error": null})), None);
        assert_eq!(error_flag(&json!({"error": ""})), None);
        assert_eq!(error_flag(&json!({"error": 0})), None);
        assert_eq!(error_flag(&json!({"error": 0.0})), None);
        assert_eq!(error_flag(&json!({"error": 1})), Some("1".to_string()));
        assert_eq!(error_flag(&hiking_result()), None);
    }
}
