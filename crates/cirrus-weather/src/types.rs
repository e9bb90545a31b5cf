//! Weather provider types.
//!
//! These deserialize directly from the provider's JSON. The persisted
//! last-known snapshot is the same JSON, so it round-trips through the
//! identical decode path as a live response.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use cirrus_core::TemperatureUnit;

/// Location identity attached to every snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub region: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
    pub tz_id: String,
    pub localtime_epoch: i64,
    pub localtime: String,
}

/// Condition text plus the provider's icon reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub text: String,
    pub icon: String,
    pub code: i32,
}

/// Current conditions in both units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temp_c: f64,
    pub temp_f: f64,
    pub condition: Condition,
    pub wind_mph: f64,
    pub wind_kph: f64,
    pub wind_dir: String,
    pub pressure_mb: f64,
    pub precip_mm: f64,
    pub humidity: i32,
    pub feelslike_c: f64,
    pub feelslike_f: f64,
    pub vis_km: f64,
    pub uv: f64,
}

impl CurrentConditions {
    /// Temperature reading for the preferred unit.
    pub fn temperature(&self, unit: TemperatureUnit) -> f64 {
        match unit {
            TemperatureUnit::Celsius => self.temp_c,
            TemperatureUnit::Fahrenheit => self.temp_f,
        }
    }

    pub fn feels_like(&self, unit: TemperatureUnit) -> f64 {
        match unit {
            TemperatureUnit::Celsius => self.feelslike_c,
            TemperatureUnit::Fahrenheit => self.feelslike_f,
        }
    }
}

/// Min/max temperatures and condition for one forecast day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayConditions {
    pub maxtemp_c: f64,
    pub maxtemp_f: f64,
    pub mintemp_c: f64,
    pub mintemp_f: f64,
    pub condition: Condition,
}

impl DayConditions {
    pub fn max_temp(&self, unit: TemperatureUnit) -> f64 {
        match unit {
            TemperatureUnit::Celsius => self.maxtemp_c,
            TemperatureUnit::Fahrenheit => self.maxtemp_f,
        }
    }

    pub fn min_temp(&self, unit: TemperatureUnit) -> f64 {
        match unit {
            TemperatureUnit::Celsius => self.mintemp_c,
            TemperatureUnit::Fahrenheit => self.mintemp_f,
        }
    }
}

/// One daily forecast entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub day: DayConditions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub forecastday: Vec<ForecastDay>,
}

/// Current-only snapshot, used for search-result disambiguation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickSnapshot {
    pub location: Location,
    pub current: CurrentConditions,
}

/// Full snapshot: the only shape that is cached, persisted, and published.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSnapshot {
    pub location: Location,
    pub current: CurrentConditions,
    pub forecast: Forecast,
}

/// Structured error body the provider returns on non-success statuses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub code: i64,
    pub message: String,
}

/// Weather client errors.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Invalid URL")]
    InvalidUrl,

    #[error("{}", .0.as_deref().unwrap_or("Weather server returned an error"))]
    Server(Option<String>),

    #[error("Failed to process weather data")]
    Decoding,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl WeatherError {
    /// User-friendly message for an inline UI banner.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => "Network error. Check your connection.".to_string(),
            other => other.to_string(),
        }
    }
}
