/// Number of forecast steps kept from the 3-hourly forecast list.
pub const FORECAST_LEN: usize = 5;

/// Current conditions for one place, as decoded from the current-weather endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub location_name: String,
    pub country_code: String,
    pub temperature_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub description: String,
    pub icon_code: String,
}

/// One step of the forecast list.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastEntry {
    /// Unix seconds.
    pub timestamp: i64,
    pub temperature_c: f64,
    pub icon_code: String,
}
