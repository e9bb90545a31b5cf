//! Shared fixtures for unit tests: provider-shaped JSON bodies.

use serde_json::{json, Value};

use crate::types::ForecastSnapshot;

fn location_json(name: &str) -> Value {
    json!({
        "name": name,
        "region": "City of London, Greater London",
        "country": "United Kingdom",
        "lat": 51.52,
        "lon": -0.11,
        "tz_id": "Europe/London",
        "localtime_epoch": 1_756_300_000_i64,
        "localtime": "2026-08-27 14:00"
    })
}

fn current_json(temp_c: f64) -> Value {
    let temp_f = temp_c * 9.0 / 5.0 + 32.0;
    json!({
        "temp_c": temp_c,
        "temp_f": temp_f,
        "condition": {
            "text": "Partly cloudy",
            "icon": "//cdn.weatherapi.com/weather/64x64/day/116.png",
            "code": 1003
        },
        "wind_mph": 8.1,
        "wind_kph": 13.0,
        "wind_dir": "SW",
        "pressure_mb": 1013.0,
        "precip_mm": 0.0,
        "humidity": 71,
        "feelslike_c": temp_c,
        "feelslike_f": temp_f,
        "vis_km": 10.0,
        "uv": 4.0
    })
}

pub fn quick_body(name: &str, temp_c: f64) -> Value {
    json!({
        "location": location_json(name),
        "current": current_json(temp_c)
    })
}

pub fn forecast_body(name: &str, temp_c: f64, days: usize) -> Value {
    let forecastday: Vec<Value> = (0..days)
        .map(|offset| {
            json!({
                "date": format!("2026-08-{:02}", 27 + offset % 4),
                "day": {
                    "maxtemp_c": temp_c + 3.0,
                    "maxtemp_f": (temp_c + 3.0) * 9.0 / 5.0 + 32.0,
                    "mintemp_c": temp_c - 4.0,
                    "mintemp_f": (temp_c - 4.0) * 9.0 / 5.0 + 32.0,
                    "condition": {
                        "text": "Sunny",
                        "icon": "//cdn.weatherapi.com/weather/64x64/day/113.png",
                        "code": 1000
                    }
                }
            })
        })
        .collect();

    json!({
        "location": location_json(name),
        "current": current_json(temp_c),
        "forecast": { "forecastday": forecastday }
    })
}

pub fn snapshot(name: &str, temp_c: f64, days: usize) -> ForecastSnapshot {
    serde_json::from_value(forecast_body(name, temp_c, days)).expect("fixture decodes")
}
