//! See [`MarkerStyle`].

use crate::error::SkyatlasError;
use serde::{Deserialize, Serialize};

/// Sizes used to lay out city markers and their labels, in units of the path coordinate space.
///
/// Every field may be omitted when loading from JSON; missing values take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerStyle {
    /// Radius of a regular city dot.
    pub city_radius: f64,
    /// Radius of a capital city dot.
    pub capital_radius: f64,
    /// Radius of the halo drawn under a hovered or selected city.
    pub city_halo_radius: f64,
    /// Radius of the halo drawn under a hovered or selected capital.
    pub capital_halo_radius: f64,
    /// Radius of the ring drawn around capitals.
    pub capital_ring_radius: f64,
    /// Outline width of a marker at rest.
    pub stroke_width: f64,
    /// Outline width of a hovered or selected marker.
    pub highlight_stroke_width: f64,
    /// Radius of the invisible area that reacts to pointer events.
    pub hit_radius: f64,
    /// Label width per character of the city name.
    pub label_char_width: f64,
    /// Minimum width of a label box.
    pub label_min_width: f64,
    /// Height of a label box.
    pub label_height: f64,
    /// Horizontal distance from the marker center to the left edge of the label.
    pub label_offset: f64,
    /// Vertical distance from the marker center up to the top edge of the label.
    pub label_rise: f64,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            city_radius: 1.8,
            capital_radius: 2.5,
            city_halo_radius: 4.0,
            capital_halo_radius: 5.0,
            capital_ring_radius: 4.0,
            stroke_width: 0.5,
            highlight_stroke_width: 0.8,
            hit_radius: 8.0,
            label_char_width: 4.0,
            label_min_width: 40.0,
            label_height: 14.0,
            label_offset: 4.0,
            label_rise: 12.0,
        }
    }
}

impl MarkerStyle {
    /// Loads style from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, SkyatlasError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets radii of city and capital dots.
    pub fn with_radii(mut self, city_radius: f64, capital_radius: f64) -> Self {
        self.city_radius = city_radius;
        self.capital_radius = capital_radius;
        self
    }

    /// Sets per-character width and minimum width of labels.
    pub fn with_label_width(mut self, char_width: f64, min_width: f64) -> Self {
        self.label_char_width = char_width;
        self.label_min_width = min_width;
        self
    }

    /// Sets label height.
    pub fn with_label_height(mut self, height: f64) -> Self {
        self.label_height = height;
        self
    }

    /// Sets radius of the pointer-sensitive area around markers.
    pub fn with_hit_radius(mut self, radius: f64) -> Self {
        self.hit_radius = radius;
        self
    }

    /// Width of the label for a city name: proportional to the number of characters, but not
    /// less than [`MarkerStyle::label_min_width`].
    pub fn label_width(&self, name: &str) -> f64 {
        (name.chars().count() as f64 * self.label_char_width).max(self.label_min_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn partial_json_keeps_defaults() {
        let style = MarkerStyle::from_json(r#"{ "capital_radius": 3.0, "label_min_width": 60 }"#)
            .unwrap();
        assert_eq!(style.capital_radius, 3.0);
        assert_eq!(style.label_min_width, 60.0);
        assert_eq!(style.city_radius, MarkerStyle::default().city_radius);
    }

    #[test]
    fn empty_json_is_default() {
        assert_eq!(MarkerStyle::from_json("{}").unwrap(), MarkerStyle::default());
    }

    #[test]
    fn invalid_json() {
        assert_matches!(
            MarkerStyle::from_json(r#"{ "capital_radius": "big" }"#),
            Err(SkyatlasError::Style(_))
        );
        assert_matches!(MarkerStyle::from_json("["), Err(SkyatlasError::Style(_)));
    }

    #[test]
    fn label_width_has_floor() {
        let style = MarkerStyle::default();
        assert_eq!(style.label_width("Nara"), 40.0);
        assert_eq!(style.label_width("Kitakyushu-Shimonoseki"), 88.0);
        assert_eq!(style.label_width(""), 40.0);
        // Counted in characters, not bytes.
        assert_eq!(
            style.with_label_width(10.0, 0.0).label_width("Kantō"),
            50.0
        );
    }
}
