//! Closed set of weather conditions the map distinguishes.
//!
//! Conditions are derived once, when weather data enters the application, either from a WMO
//! weather interpretation code or from a free-text description. Everything downstream matches
//! on [`WeatherCondition`] instead of searching the description again.

use crate::color::Color;
use crate::error::SkyatlasError;
use serde::{Deserialize, Serialize};

/// Weather condition category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    /// Clear or mainly clear sky.
    #[default]
    ClearSky,
    /// Partly cloudy to overcast.
    Cloudy,
    /// Drizzle, rain, freezing rain and rain showers.
    Rain,
    /// Snow fall, snow grains and snow showers.
    Snow,
    /// Thunderstorms, with or without hail.
    Storm,
    /// Fog and depositing rime fog.
    Fog,
}

impl TryFrom<u16> for WeatherCondition {
    type Error = SkyatlasError;

    /// Converts a WMO weather interpretation code (as reported by Open-Meteo).
    fn try_from(code: u16) -> Result<Self, Self::Error> {
        Ok(match code {
            0 | 1 => Self::ClearSky,
            2 | 3 => Self::Cloudy,
            45 | 48 => Self::Fog,
            51 | 53 | 55 | 56 | 57 | 61 | 63 | 65 | 66 | 67 | 80 | 81 | 82 => Self::Rain,
            71 | 73 | 75 | 77 | 85 | 86 => Self::Snow,
            95 | 96 | 99 => Self::Storm,
            _ => return Err(SkyatlasError::UnknownWeatherCode(code)),
        })
    }
}

impl WeatherCondition {
    /// All conditions.
    pub const ALL: [WeatherCondition; 6] = [
        Self::ClearSky,
        Self::Cloudy,
        Self::Rain,
        Self::Snow,
        Self::Storm,
        Self::Fog,
    ];

    /// Classifies a free-text description such as `"Light Snow Showers"` by keywords.
    ///
    /// Keywords are checked from the most to the least severe category, so a "thunderstorm with
    /// rain" is a storm and "snow showers" are snow. Descriptions without any known keyword are
    /// considered clear sky.
    pub fn from_description(description: &str) -> Self {
        const KEYWORDS: [(WeatherCondition, &[&str]); 5] = [
            (WeatherCondition::Storm, &["storm", "thunder"]),
            (WeatherCondition::Snow, &["snow", "ice", "blizzard", "sleet"]),
            (WeatherCondition::Rain, &["rain", "drizzle", "shower"]),
            (WeatherCondition::Fog, &["fog", "mist", "haze"]),
            (WeatherCondition::Cloudy, &["cloud", "overcast"]),
        ];

        let description = description.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(_, words)| words.iter().any(|word| description.contains(word)))
            .map(|(condition, _)| *condition)
            .unwrap_or_default()
    }

    /// Human readable name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ClearSky => "Clear sky",
            Self::Cloudy => "Cloudy",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::Storm => "Storm",
            Self::Fog => "Fog",
        }
    }

    /// Fill color of city markers shown under this condition.
    pub fn marker_color(&self) -> Color {
        match self {
            Self::ClearSky => Color::SUN_ORANGE,
            Self::Cloudy | Self::Fog => Color::CLOUD_GRAY,
            Self::Rain => Color::RAIN_BLUE,
            Self::Snow => Color::SNOW_CYAN,
            Self::Storm => Color::STORM_AMBER,
        }
    }
}
