//! Core library for Weather Pulse.
//!
//! This crate defines:
//! - Configuration & credential handling
//! - The OpenWeather provider behind the [`WeatherProvider`] trait
//! - The query service that runs fetches and reports [`Update`]s
//! - The owned [`DisplayState`] and the [`DisplayView`] derived from it
//!
//! It is used by `pulse-cli`, but can also be reused by other front ends.

pub mod config;
pub mod error;
pub mod format;
pub mod icon;
pub mod model;
pub mod provider;
pub mod service;
pub mod state;
pub mod view;

pub use config::Config;
pub use error::FetchError;
pub use icon::Icon;
pub use model::{CurrentConditions, FORECAST_LEN, ForecastEntry};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider, provider_from_config};
pub use service::{Update, WeatherService};
pub use state::{ApplyOutcome, DisplayState, GroupStatus, SearchTicket};
pub use view::{DisplayView, ForecastCard};
