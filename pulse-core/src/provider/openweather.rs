use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, de::DeserializeOwned};
use std::time::Duration;
use tracing::{debug, instrument};

use crate::{
    config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS},
    error::{FetchError, truncate_body},
    model::{CurrentConditions, FORECAST_LEN, ForecastEntry},
};

use super::WeatherProvider;

const CURRENT_ENDPOINT: &str = "weather";
const FORECAST_ENDPOINT: &str = "forecast";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

#[derive(Debug)]
pub struct OpenWeatherProviderBuilder {
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl OpenWeatherProviderBuilder {
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<OpenWeatherProvider> {
        let http = Client::builder()
            .timeout(self.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(OpenWeatherProvider {
            api_key: self.api_key,
            base_url: self.base_url,
            http,
        })
    }
}

impl OpenWeatherProvider {
    pub fn builder(api_key: String) -> OpenWeatherProviderBuilder {
        OpenWeatherProviderBuilder {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        place: &str,
    ) -> Result<T, FetchError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(%url, place, "sending OpenWeather request");

        // `query` percent-encodes the place name.
        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", place),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(|source| FetchError::Transport { endpoint, source })?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|source| FetchError::Transport { endpoint, source })?;

        if !status.is_success() {
            return Err(FetchError::Status {
                endpoint,
                status,
                body: truncate_body(&body),
            });
        }

        serde_json::from_str(&body).map_err(|source| FetchError::Decode { endpoint, source })
    }
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    sys: OwSys,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

impl From<OwCurrentResponse> for CurrentConditions {
    fn from(parsed: OwCurrentResponse) -> Self {
        let (description, icon_code) = parsed
            .weather
            .into_iter()
            .next()
            .map(|w| (w.description, w.icon))
            .unwrap_or_else(|| ("Unknown".to_string(), String::new()));

        CurrentConditions {
            location_name: parsed.name,
            country_code: parsed.sys.country,
            temperature_c: parsed.main.temp,
            humidity_pct: parsed.main.humidity,
            wind_speed_mps: parsed.wind.speed,
            description,
            icon_code,
        }
    }
}

#[derive(Debug, Deserialize)]
struct OwForecastMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwForecastWeather {
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: i64,
    main: OwForecastMain,
    weather: Vec<OwForecastWeather>,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<OwForecastEntry>,
}

impl From<OwForecastEntry> for ForecastEntry {
    fn from(entry: OwForecastEntry) -> Self {
        ForecastEntry {
            timestamp: entry.dt,
            temperature_c: entry.main.temp,
            icon_code: entry
                .weather
                .into_iter()
                .next()
                .map(|w| w.icon)
                .unwrap_or_default(),
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    #[instrument(skip(self), level = "debug")]
    async fn current(&self, place: &str) -> Result<CurrentConditions, FetchError> {
        let parsed: OwCurrentResponse = self.get_json(CURRENT_ENDPOINT, place).await?;
        Ok(parsed.into())
    }

    #[instrument(skip(self), level = "debug")]
    async fn forecast(&self, place: &str) -> Result<Vec<ForecastEntry>, FetchError> {
        let parsed: OwForecastResponse = self.get_json(FORECAST_ENDPOINT, place).await?;
        Ok(parsed
            .list
            .into_iter()
            .take(FORECAST_LEN)
            .map(ForecastEntry::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider_for(server: &MockServer) -> OpenWeatherProvider {
        OpenWeatherProvider::builder("test_key".to_string())
            .base_url(&server.uri())
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap()
    }

    fn forecast_step(dt: i64, temp: f64, icon: &str) -> serde_json::Value {
        serde_json::json!({
            "dt": dt,
            "main": { "temp": temp, "humidity": 70 },
            "weather": [ { "icon": icon, "description": "ignored" } ]
        })
    }

    #[tokio::test]
    async fn current_decodes_paris() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/weather"))
            .and(query_param("q", "Paris"))
            .and(query_param("appid", "test_key"))
            .and(query_param("units", "metric"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "name": "Paris",
                "sys": { "country": "FR" },
                "main": { "temp": 18.44, "humidity": 60 },
                "weather": [ { "description": "clear sky", "icon": "01d" } ],
                "wind": { "speed": 3.6 }
            })))
            .mount(&mock_server)
            .await;

        let current = provider_for(&mock_server).current("Paris").await.unwrap();

        assert_eq!(current.location_name, "Paris");
        assert_eq!(current.country_code, "FR");
        assert_eq!(current.temperature_c, 18.44);
        assert_eq!(current.humidity_pct, 60);
        assert_eq!(current.wind_speed_mps, 3.6);
        assert_eq!(current.description, "clear sky");
        assert_eq!(current.icon_code, "01d");
    }

    #[tokio::test]
    async fn place_name_is_escaped() {
        let mock_server = MockServer::start().await;

        // wiremock matches against the decoded value, so a raw `&` would split the parameter.
        Mock::given(method("GET"))
            .and(path("/weather"))
            .and(query_param("q", "Saint-Denis & Co, FR"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "name": "Saint-Denis",
                "sys": { "country": "FR" },
                "main": { "temp": 21.0, "humidity": 40 },
                "weather": [],
                "wind": { "speed": 1.0 }
            })))
            .mount(&mock_server)
            .await;

        let current = provider_for(&mock_server)
            .current("Saint-Denis & Co, FR")
            .await
            .unwrap();

        assert_eq!(current.description, "Unknown");
        assert_eq!(current.icon_code, "");
    }

    #[tokio::test]
    async fn forecast_keeps_first_five_in_order() {
        let mock_server = MockServer::start().await;

        let list: Vec<_> = (0..8)
            .map(|i| forecast_step(1_700_000_000 + i * 10_800, 10.0 + i as f64, "10d"))
            .collect();

        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "cod": "200", "list": list })),
            )
            .mount(&mock_server)
            .await;

        let forecast = provider_for(&mock_server).forecast("Oslo").await.unwrap();

        assert_eq!(forecast.len(), FORECAST_LEN);
        for (i, entry) in forecast.iter().enumerate() {
            assert_eq!(entry.timestamp, 1_700_000_000 + i as i64 * 10_800);
            assert_eq!(entry.temperature_c, 10.0 + i as f64);
            assert_eq!(entry.icon_code, "10d");
        }
    }

    #[tokio::test]
    async fn short_forecast_is_not_padded() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "list": [
                    forecast_step(1, 1.0, "01n"),
                    forecast_step(2, 2.0, "02n"),
                    { "dt": 3, "main": { "temp": 3.0 }, "weather": [] }
                ]
            })))
            .mount(&mock_server)
            .await;

        let forecast = provider_for(&mock_server).forecast("Oslo").await.unwrap();

        assert_eq!(forecast.len(), 3);
        assert_eq!(forecast[2].icon_code, "");
    }

    #[tokio::test]
    async fn missing_field_is_a_decode_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "name": "Paris",
                "main": { "temp": 18.44, "humidity": 60 },
                "weather": [],
                "wind": { "speed": 3.6 }
            })))
            .mount(&mock_server)
            .await;

        let err = provider_for(&mock_server).current("Paris").await.unwrap_err();
        assert!(matches!(err, FetchError::Decode { endpoint: "weather", .. }));
    }

    #[tokio::test]
    async fn non_success_status_is_reported() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_string(r#"{"cod":"404","message":"city not found"}"#),
            )
            .mount(&mock_server)
            .await;

        let err = provider_for(&mock_server).forecast("Atlantis").await.unwrap_err();
        match err {
            FetchError::Status { status, body, .. } => {
                assert_eq!(status.as_u16(), 404);
                assert!(body.contains("city not found"));
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreachable_server_is_a_transport_error() {
        let provider = OpenWeatherProvider::builder("k".to_string())
            .base_url("http://127.0.0.1:9")
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap();

        let err = provider.current("Paris").await.unwrap_err();
        assert!(matches!(err, FetchError::Transport { .. }));
    }
}
