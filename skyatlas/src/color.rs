use serde::{Deserialize, Serialize};

/// Color representation.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from_hex(&value).ok_or_else(|| format!("invalid color: {value}"))
    }
}

impl From<Color> for String {
    fn from(val: Color) -> Self {
        val.to_hex()
    }
}

impl Color {
    /// White color: `#FFFFFFFF`
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);
    /// Sky blue used for rain: `#60A5FAFF`
    pub const RAIN_BLUE: Color = Color::rgba(96, 165, 250, 255);
    /// Pale cyan used for snow: `#A5F3FCFF`
    pub const SNOW_CYAN: Color = Color::rgba(165, 243, 252, 255);
    /// Amber used for storms and capital rings: `#FBBF24FF`
    pub const STORM_AMBER: Color = Color::rgba(251, 191, 36, 255);
    /// Gray used for overcast skies: `#9CA3AFFF`
    pub const CLOUD_GRAY: Color = Color::rgba(156, 163, 175, 255);
    /// Orange used for clear skies: `#FB923CFF`
    pub const SUN_ORANGE: Color = Color::rgba(251, 146, 60, 255);
    /// Violet used for selected markers: `#A78BFAFF`
    pub const SELECTION_VIOLET: Color = Color::rgba(167, 139, 250, 255);

    /// Constructs color from its RGBA channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Converts the color into HEX8 string: `#RRGGBBAA`.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }

    /// Converts the color into a CSS functional notation: `rgba(r, g, b, alpha)` with alpha in
    /// `0..=1`.
    pub fn to_css(&self) -> String {
        let alpha = (self.a as f64 / 255.0 * 100.0).round() / 100.0;
        format!("rgba({}, {}, {}, {alpha})", self.r, self.g, self.b)
    }

    /// Parses a color from the hex string. Hex string can be either HEX6 (`#RRGGBB`) or HEX8 (`#RRGGBBAA`).
    pub fn try_from_hex(hex_string: &str) -> Option<Self> {
        if hex_string.len() != 7 && hex_string.len() != 9 || !hex_string.starts_with('#') {
            return None;
        }

        let channel = |range: std::ops::Range<usize>| {
            hex_string
                .get(range)
                .and_then(|s| u8::from_str_radix(s, 16).ok())
        };

        let r = channel(1..3)?;
        let g = channel(3..5)?;
        let b = channel(5..7)?;
        let a = if hex_string.len() == 9 {
            channel(7..9)?
        } else {
            255
        };

        Some(Self { r, g, b, a })
    }

    /// Returns a new color instance, copied from the base one but with the given alpha channel.
    pub fn with_alpha(&self, a: u8) -> Self {
        Self { a, ..*self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        let hex = "#FF1000AA";
        let color = Color::try_from_hex(hex).unwrap();
        assert_eq!(&color.to_hex(), hex);
        assert_eq!(Color::try_from_hex("#60a5fa"), Some(Color::RAIN_BLUE));
    }

    #[test]
    fn invalid_hex() {
        assert_eq!(Color::try_from_hex("60A5FA"), None);
        assert_eq!(Color::try_from_hex("#60A5F"), None);
        assert_eq!(Color::try_from_hex("#GGA5FA"), None);
        assert_eq!(Color::try_from_hex("#é0A5F"), None);
    }

    #[test]
    fn css_notation() {
        assert_eq!(Color::RAIN_BLUE.to_css(), "rgba(96, 165, 250, 1)");
        assert_eq!(Color::STORM_AMBER.with_alpha(153).to_css(), "rgba(251, 191, 36, 0.6)");
    }

    #[test]
    fn serde_as_hex_string() {
        let json = serde_json::to_string(&Color::SNOW_CYAN).unwrap();
        assert_eq!(json, "\"#A5F3FCFF\"");
        let color: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(color, Color::SNOW_CYAN);
        assert!(serde_json::from_str::<Color>("\"blue\"").is_err());
    }
}
