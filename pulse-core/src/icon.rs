/// Local pictogram for an OpenWeather icon code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    ClearSky,
    FewClouds,
    ScatteredClouds,
    BrokenClouds,
    ShowerRain,
    Rain,
    Thunderstorm,
    Snow,
    Mist,
    Unknown,
}

impl Icon {
    /// Map an icon code such as `"01d"` or `"10n"`. Never fails: unrecognized
    /// codes (including the empty string) map to [`Icon::Unknown`].
    pub fn from_code(code: &str) -> Self {
        match code {
            "01d" | "01n" => Self::ClearSky,
            "02d" | "02n" => Self::FewClouds,
            "03d" | "03n" => Self::ScatteredClouds,
            "04d" | "04n" => Self::BrokenClouds,
            "09d" | "09n" => Self::ShowerRain,
            "10d" | "10n" => Self::Rain,
            "11d" | "11n" => Self::Thunderstorm,
            "13d" | "13n" => Self::Snow,
            "50d" | "50n" => Self::Mist,
            _ => Self::Unknown,
        }
    }

    /// Symbol name in the system symbol set.
    pub fn symbol_name(&self) -> &'static str {
        match self {
            Self::ClearSky => "sun.max.fill",
            Self::FewClouds => "cloud.sun.fill",
            Self::ScatteredClouds => "cloud.fill",
            Self::BrokenClouds => "smoke.fill",
            Self::ShowerRain => "cloud.drizzle.fill",
            Self::Rain => "cloud.rain.fill",
            Self::Thunderstorm => "cloud.bolt.fill",
            Self::Snow => "snowflake",
            Self::Mist => "cloud.fog.fill",
            Self::Unknown => "questionmark",
        }
    }

    /// Single glyph for terminals.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::ClearSky => "☀️",
            Self::FewClouds => "🌤",
            Self::ScatteredClouds => "☁️",
            Self::BrokenClouds => "🌥",
            Self::ShowerRain => "🌦",
            Self::Rain => "🌧",
            Self::Thunderstorm => "⛈",
            Self::Snow => "❄️",
            Self::Mist => "🌫",
            Self::Unknown => "❓",
        }
    }
}

impl std::fmt::Display for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol_name())
    }
}
