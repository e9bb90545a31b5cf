//! HTTP client for the weather provider.

use tracing::instrument;
use url::Url;

use crate::types::{ApiErrorResponse, ForecastSnapshot, QuickSnapshot, WeatherError};

const WEATHER_API_BASE: &str = "https://api.weatherapi.com/v1";

/// Stateless client: one request per call, no retries. Retry policy belongs
/// to the caller.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl WeatherClient {
    pub fn new(api_key: &str) -> Self {
        Self::with_base_url(api_key, WEATHER_API_BASE)
    }

    /// Client against a non-default provider URL (tests point this at a
    /// local mock server).
    pub fn with_base_url(api_key: &str, base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch current conditions for a free-form or `"lat,lon"` query.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch_current(&self, query: &str) -> Result<QuickSnapshot, WeatherError> {
        let url = self.endpoint_url("current.json", query, &[("aqi", "no")])?;
        self.get_json(url).await
    }

    /// Fetch the full forecast snapshot. `days` is clamped by the caller to
    /// the provider's supported range.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch_forecast(
        &self,
        query: &str,
        days: u8,
    ) -> Result<ForecastSnapshot, WeatherError> {
        let days = days.to_string();
        let url = self.endpoint_url(
            "forecast.json",
            query,
            &[("days", days.as_str()), ("aqi", "no"), ("alerts", "no")],
        )?;
        self.get_json(url).await
    }

    /// Build the request URL, failing fast before any I/O if the query
    /// cannot form a valid URL.
    fn endpoint_url(
        &self,
        endpoint: &str,
        query: &str,
        extra: &[(&str, &str)],
    ) -> Result<Url, WeatherError> {
        if query.is_empty() {
            return Err(WeatherError::InvalidUrl);
        }

        let mut raw = format!(
            "{}/{}?key={}&q={}",
            self.base_url,
            endpoint,
            self.api_key,
            urlencoding::encode(query)
        );
        for (name, value) in extra {
            raw.push_str(&format!("&{name}={value}"));
        }

        Url::parse(&raw).map_err(|e| {
            tracing::error!("Invalid weather URL for query {:?}: {}", query, e);
            WeatherError::InvalidUrl
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<T, WeatherError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            if let Ok(api_error) = serde_json::from_slice::<ApiErrorResponse>(&body) {
                tracing::error!(
                    "Weather API error {} (code {}): {}",
                    status,
                    api_error.error.code,
                    api_error.error.message
                );
                return Err(WeatherError::Server(Some(api_error.error.message)));
            }
            tracing::error!(
                "Weather API error {} with unstructured body: {}",
                status,
                String::from_utf8_lossy(&body)
            );
            return Err(WeatherError::Server(None));
        }

        serde_json::from_slice(&body).map_err(|e| {
            // The typed error is opaque; the structural detail only matters here.
            tracing::error!("Failed to decode weather response: {}", e);
            WeatherError::Decoding
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{forecast_body, quick_body};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn fetch_current_decodes_a_quick_snapshot() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/current.json"))
            .and(query_param("q", "London"))
            .and(query_param("key", "test-key"))
            .and(query_param("aqi", "no"))
            .respond_with(ResponseTemplate::new(200).set_body_json(quick_body("London", 15.0)))
            .mount(&server)
            .await;

        let client = WeatherClient::with_base_url("test-key", &server.uri());
        let snapshot = client.fetch_current("London").await.expect("fetch");
        assert_eq!(snapshot.location.name, "London");
        assert_eq!(snapshot.current.temp_c, 15.0);
    }

    #[tokio::test]
    async fn fetch_forecast_passes_the_horizon() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast.json"))
            .and(query_param("days", "10"))
            .and(query_param("alerts", "no"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(forecast_body("London", 15.0, 10)),
            )
            .mount(&server)
            .await;

        let client = WeatherClient::with_base_url("test-key", &server.uri());
        let snapshot = client.fetch_forecast("London", 10).await.expect("fetch");
        assert_eq!(snapshot.forecast.forecastday.len(), 10);
    }

    #[tokio::test]
    async fn structured_error_body_surfaces_its_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast.json"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "error": { "code": 2006, "message": "API key is invalid." }
            })))
            .mount(&server)
            .await;

        let client = WeatherClient::with_base_url("bad-key", &server.uri());
        match client.fetch_forecast("London", 10).await {
            Err(WeatherError::Server(Some(msg))) => assert_eq!(msg, "API key is invalid."),
            other => panic!("expected server error with message, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unstructured_error_body_surfaces_without_a_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/current.json"))
            .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = WeatherClient::with_base_url("test-key", &server.uri());
        match client.fetch_current("London").await {
            Err(WeatherError::Server(None)) => {}
            other => panic!("expected bare server error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_success_body_is_a_decoding_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/current.json"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"unexpected": true})),
            )
            .mount(&server)
            .await;

        let client = WeatherClient::with_base_url("test-key", &server.uri());
        match client.fetch_current("London").await {
            Err(WeatherError::Decoding) => {}
            other => panic!("expected decoding error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_query_fails_before_any_request() {
        let server = MockServer::start().await;
        let client = WeatherClient::with_base_url("test-key", &server.uri());
        match client.fetch_current("").await {
            Err(WeatherError::InvalidUrl) => {}
            other => panic!("expected invalid URL, got {other:?}"),
        }
        assert!(server
            .received_requests()
            .await
            .map(|reqs| reqs.is_empty())
            .unwrap_or(true));
    }

    #[tokio::test]
    async fn coordinate_queries_are_percent_encoded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/current.json"))
            .and(query_param("q", "51.5,-0.1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(quick_body("London", 15.0)))
            .mount(&server)
            .await;

        let client = WeatherClient::with_base_url("test-key", &server.uri());
        let snapshot = client.fetch_current("51.5,-0.1").await.expect("fetch");
        assert_eq!(snapshot.location.name, "London");
    }
}
