use serde_json::Value;
use shared_types::DailyWeather;

use crate::errors::ExportError;

pub const JSON_FILE_NAME: &str = "ai_weather.json";
pub const JSON_MIME: &str = "application/json";
pub const CSV_FILE_NAME: &str = "ai_weather.csv";
pub const CSV_MIME: &str = "text/csv;charset=utf-8";

const CSV_HEADERS: [&str; 6] = [
    "Day",
    "Temperature (°C)",
    "Rain (mm)",
    "Wind (m/s)",
    "Air Quality",
    "Recommendations",
];

/// The stored document, pretty-printed with two-space indentation.
pub fn export_json(document: &Value) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// One row per day, numbered from 1.
pub fn export_csv(days: &[DailyWeather]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADERS)?;

    for (index, day) in days.iter().enumerate() {
        writer.write_record([
            (index + 1).to_string(),
            day.temperature.to_string(),
            day.precipitation.to_string(),
            day.wind_speed.to_string(),
            day.air_quality.to_string(),
            day.recommendations.join(" | "),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Buffer(err.to_string()))?;
    String::from_utf8(bytes).map_err(|err| ExportError::Buffer(err.to_string()))
}
