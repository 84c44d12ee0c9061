//! Render attributes of city markers.
//!
//! Placement is a pure function of the cities, their projected positions, a [`MarkerStyle`], the
//! current pointer [`Interaction`] and the [`WeatherCondition`] shown on the map. The caller owns
//! the interaction state and passes it on every call.

mod style;

pub use style::MarkerStyle;

use crate::city::City;
use crate::color::Color;
use crate::condition::WeatherCondition;
use ahash::AHashMap;
use serde::Serialize;
use skyatlas_types::{Point2d, Rect};
use std::cmp::Ordering;

/// Visual emphasis of a marker. Markers with higher emphasis are drawn on top.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub enum Emphasis {
    /// Marker at rest.
    #[default]
    Normal,
    /// Marker of the selected city.
    Selected,
    /// Marker under the pointer.
    Hovered,
}

/// Pointer state of the map, identified by city names.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Interaction<'a> {
    /// Name of the city under the pointer.
    pub hovered: Option<&'a str>,
    /// Name of the selected city.
    pub selected: Option<&'a str>,
}

impl<'a> Interaction<'a> {
    /// No hovered or selected city.
    pub fn none() -> Self {
        Self::default()
    }

    /// Sets the hovered city.
    pub fn with_hovered(self, name: &'a str) -> Self {
        Self {
            hovered: Some(name),
            ..self
        }
    }

    /// Sets the selected city.
    pub fn with_selected(self, name: &'a str) -> Self {
        Self {
            selected: Some(name),
            ..self
        }
    }

    /// Emphasis of the city with the given name. Hover takes precedence over selection.
    pub fn emphasis_of(&self, name: &str) -> Emphasis {
        if self.hovered == Some(name) {
            Emphasis::Hovered
        } else if self.selected == Some(name) {
            Emphasis::Selected
        } else {
            Emphasis::Normal
        }
    }
}

/// Everything a renderer needs to draw one city marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerAttributes {
    /// Name of the city.
    pub name: String,
    /// Center of the marker in path coordinates.
    pub position: Point2d,
    /// Marker position rounded to whole units, used to detect overlapping markers.
    pub pixel: (i64, i64),
    /// Radius of the marker dot.
    pub radius: f64,
    /// Radius of the highlight halo, if the marker is hovered or selected.
    pub halo_radius: Option<f64>,
    /// Radius of the ring around capitals.
    pub capital_ring_radius: Option<f64>,
    /// Fill of the dot.
    pub fill: Color,
    /// Fill of the highlight halo, if the marker is hovered or selected.
    pub halo_color: Option<Color>,
    /// Color of the ring around capitals.
    pub ring_color: Option<Color>,
    /// Outline color of the dot.
    pub stroke_color: Color,
    /// Outline width of the dot.
    pub stroke_width: f64,
    /// Radius of the pointer-sensitive area.
    pub hit_radius: f64,
    /// Emphasis of the marker.
    pub emphasis: Emphasis,
    /// Box of the name label, to the right of and above the marker.
    pub label: Rect,
    /// Whether the label should be visible.
    pub show_label: bool,
    /// Number of markers (including this one) that share the same pixel.
    pub cluster_size: usize,
    /// Position in the drawing sequence. Markers are drawn in ascending order.
    pub draw_order: usize,
}

/// Computes render attributes for the given markers.
///
/// The result is sorted in drawing order: markers with higher [`Emphasis`] come later. Among
/// markers that land on the same pixel, a capital is drawn last, otherwise the city with larger
/// population is drawn last. Remaining ties keep the input order.
pub fn place_markers<'a>(
    markers: impl IntoIterator<Item = (&'a City, Point2d)>,
    style: &MarkerStyle,
    interaction: &Interaction,
    condition: WeatherCondition,
) -> Vec<MarkerAttributes> {
    let mut placed: Vec<(&City, MarkerAttributes)> = markers
        .into_iter()
        .map(|(city, position)| {
            let marker = marker_attributes(city, position, style, interaction, condition);
            (city, marker)
        })
        .collect();

    let mut clusters: AHashMap<(i64, i64), usize> = AHashMap::new();
    for (_, marker) in &placed {
        *clusters.entry(marker.pixel).or_default() += 1;
    }

    placed.sort_by(|(city_a, a), (city_b, b)| draw_ordering(city_a, a, city_b, b));

    placed
        .into_iter()
        .enumerate()
        .map(|(index, (_, mut marker))| {
            marker.cluster_size = clusters.get(&marker.pixel).copied().unwrap_or(1);
            marker.draw_order = index;
            marker
        })
        .collect()
}

fn draw_ordering(
    city_a: &City,
    a: &MarkerAttributes,
    city_b: &City,
    b: &MarkerAttributes,
) -> Ordering {
    a.emphasis
        .cmp(&b.emphasis)
        .then(city_a.is_capital.cmp(&city_b.is_capital))
        .then(city_a.population.cmp(&city_b.population))
}

const HALO_ALPHA: u8 = 51;
const RING_ALPHA: u8 = 153;
const STROKE_ALPHA: u8 = 230;

/// Render attributes of a single marker. Cluster information and draw order are left unset
/// (`1` and `0`), since they depend on the other markers.
///
/// A selected dot is violet, even under the pointer, and a hovered one is white. Otherwise the dot takes the marker color
/// of `condition`, which also tints the halo.
pub fn marker_attributes(
    city: &City,
    position: Point2d,
    style: &MarkerStyle,
    interaction: &Interaction,
    condition: WeatherCondition,
) -> MarkerAttributes {
    let emphasis = interaction.emphasis_of(&city.name);
    let highlighted = emphasis != Emphasis::Normal;
    let weather_color = condition.marker_color();

    let (radius, halo_radius) = if city.is_capital {
        (style.capital_radius, style.capital_halo_radius)
    } else {
        (style.city_radius, style.city_halo_radius)
    };

    let label_x = position.x + style.label_offset;
    let label_y = position.y - style.label_rise;
    let label = Rect::new(
        label_x,
        label_y,
        label_x + style.label_width(&city.name),
        label_y + style.label_height,
    );

    MarkerAttributes {
        name: city.name.clone(),
        position,
        pixel: (position.x.round() as i64, position.y.round() as i64),
        radius,
        halo_radius: highlighted.then_some(halo_radius),
        capital_ring_radius: city.is_capital.then_some(style.capital_ring_radius),
        fill: if interaction.selected == Some(city.name.as_str()) {
            Color::SELECTION_VIOLET
        } else if emphasis == Emphasis::Hovered {
            Color::WHITE
        } else {
            weather_color
        },
        halo_color: highlighted.then_some(weather_color.with_alpha(HALO_ALPHA)),
        ring_color: city.is_capital.then_some(Color::STORM_AMBER.with_alpha(RING_ALPHA)),
        stroke_color: Color::WHITE.with_alpha(STROKE_ALPHA),
        stroke_width: if highlighted {
            style.highlight_stroke_width
        } else {
            style.stroke_width
        },
        hit_radius: style.hit_radius,
        emphasis,
        label,
        show_label: emphasis == Emphasis::Hovered,
        cluster_size: 1,
        draw_order: 0,
    }
}
