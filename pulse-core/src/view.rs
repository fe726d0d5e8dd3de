//! Display-ready strings derived from a [`DisplayState`].

use crate::{
    format,
    icon::Icon,
    model::ForecastEntry,
    state::{DisplayState, GroupStatus},
};

pub const PLACEHOLDER_LOCATION: &str = "Enter city...";
pub const PLACEHOLDER_TEMPERATURE: &str = "--°C";
pub const PLACEHOLDER_DESCRIPTION: &str = "Weather description";
pub const PLACEHOLDER_HUMIDITY: &str = "--%";
pub const PLACEHOLDER_WIND: &str = "-- m/s";
pub const PLACEHOLDER_ICON: Icon = Icon::Unknown;

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastCard {
    pub weekday: String,
    pub icon: Icon,
    pub temperature: String,
}

impl ForecastCard {
    pub fn from_entry(entry: &ForecastEntry) -> Self {
        Self {
            weekday: format::weekday(entry.timestamp),
            icon: Icon::from_code(&entry.icon_code),
            temperature: format::temperature(entry.temperature_c),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayView {
    pub location: String,
    pub temperature: String,
    pub description: String,
    pub humidity: String,
    pub wind: String,
    pub icon: Icon,
    pub forecast: Vec<ForecastCard>,
    /// Set while a search is in flight.
    pub loading: bool,
    /// One line per group whose last fetch failed.
    pub notices: Vec<String>,
}

impl DisplayView {
    pub fn from_state(state: &DisplayState) -> Self {
        let mut view = match state.current() {
            Some(current) => Self {
                location: format::location(&current.location_name, &current.country_code),
                temperature: format::temperature(current.temperature_c),
                description: format::capitalize_words(&current.description),
                humidity: format::humidity(current.humidity_pct),
                wind: format::wind_speed(current.wind_speed_mps),
                icon: Icon::from_code(&current.icon_code),
                ..Self::placeholder()
            },
            None => Self::placeholder(),
        };

        view.forecast = state.forecast().iter().map(ForecastCard::from_entry).collect();
        view.loading = !state.is_settled();

        let place = state.place().unwrap_or_default();
        if let GroupStatus::Failed(reason) = state.current_status() {
            view.notices
                .push(format!("Could not refresh current weather for {place}: {reason}"));
        }
        if let GroupStatus::Failed(reason) = state.forecast_status() {
            view.notices.push(format!("Could not refresh forecast for {place}: {reason}"));
        }

        view
    }

    pub fn placeholder() -> Self {
        Self {
            location: PLACEHOLDER_LOCATION.to_string(),
            temperature: PLACEHOLDER_TEMPERATURE.to_string(),
            description: PLACEHOLDER_DESCRIPTION.to_string(),
            humidity: PLACEHOLDER_HUMIDITY.to_string(),
            wind: PLACEHOLDER_WIND.to_string(),
            icon: PLACEHOLDER_ICON,
            forecast: Vec::new(),
            loading: false,
            notices: Vec::new(),
        }
    }
}
