//! Temperature units shown next to the weather of a city.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref INTEGER: Regex = Regex::new(r"-?\d+").expect("valid integer regex");
}

/// Temperature unit preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TemperatureUnit {
    /// Degrees Celsius.
    #[default]
    #[serde(rename = "C")]
    Celsius,
    /// Degrees Fahrenheit.
    #[serde(rename = "F")]
    Fahrenheit,
}

impl TemperatureUnit {
    /// Unit symbol: `C` or `F`.
    pub fn symbol(&self) -> char {
        match self {
            Self::Celsius => 'C',
            Self::Fahrenheit => 'F',
        }
    }

    /// Converts a value in this unit into the `target` unit.
    pub fn convert(&self, value: f64, target: TemperatureUnit) -> f64 {
        match (self, target) {
            (Self::Celsius, Self::Fahrenheit) => value * 9.0 / 5.0 + 32.0,
            (Self::Fahrenheit, Self::Celsius) => (value - 32.0) * 5.0 / 9.0,
            _ => value,
        }
    }

    /// Formats a value rounded to whole degrees, e.g. `25°C`.
    pub fn format(&self, value: f64) -> String {
        // `+ 0.0` turns negative zero into zero.
        format!("{}°{}", value.round() + 0.0, self.symbol())
    }
}

/// Extracts the first integer from a temperature string such as `"25°C"` or `"-3 °F"`.
pub fn parse_temperature(text: &str) -> Option<i32> {
    INTEGER.find(text)?.as_str().parse().ok()
}

/// Converts a temperature string from one unit to another, e.g. `"25°C"` into `"77°F"`.
///
/// Returns `None` if the string contains no number.
pub fn convert_temperature(
    text: &str,
    from: TemperatureUnit,
    to: TemperatureUnit,
) -> Option<String> {
    let value = parse_temperature(text)?;
    Some(to.format(from.convert(value as f64, to)))
}
