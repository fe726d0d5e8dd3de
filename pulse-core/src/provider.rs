use crate::{
    Config,
    error::FetchError,
    model::{CurrentConditions, ForecastEntry},
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// A source of current conditions and short-range forecasts for a place name.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, place: &str) -> Result<CurrentConditions, FetchError>;

    /// Returns at most [`crate::model::FORECAST_LEN`] entries in the order the source lists them.
    async fn forecast(&self, place: &str) -> Result<Vec<ForecastEntry>, FetchError>;
}

/// Construct the OpenWeather provider from config, with an optional key that
/// takes precedence over everything the config knows about.
pub fn provider_from_config(
    config: &Config,
    api_key_override: Option<&str>,
) -> anyhow::Result<OpenWeatherProvider> {
    let api_key = config.resolve_api_key(api_key_override)?;
    OpenWeatherProvider::builder(api_key)
        .base_url(config.base_url())
        .timeout(config.timeout())
        .build()
}
