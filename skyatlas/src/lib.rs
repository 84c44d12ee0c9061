//! Skyatlas places the cities of a country onto a pre-drawn outline of that country.
//!
//! Country outlines come as serialized vector paths in their own planar coordinate space, and
//! cities come as latitude/longitude pairs. To draw a marker for a city on top of the outline,
//! the city set is fitted into the outline:
//!
//! 1. [`path_bounds`](path_bounds::path_bounds) finds the rectangle covered by the outline.
//! 2. [`geo_bounds`](city::geo_bounds) finds the latitude/longitude box covered by the cities.
//! 3. [`MercatorFit`] maps the second box onto the first one, with Mercator spacing along the
//!    vertical axis so that the markers follow the way the outlines are drawn.
//! 4. [`place_markers`](placement::place_markers) turns projected positions into render
//!    attributes and resolves the drawing order of overlapping markers.
//!
//! [`CountryMap`] ties these steps together:
//!
//! ```
//! use skyatlas::{City, CountryMap};
//! use skyatlas::placement::{Interaction, MarkerStyle};
//! use skyatlas_types::latlon;
//!
//! let map = CountryMap::new(
//!     "M0,0 L100,0 L100,100 L0,100 Z",
//!     vec![
//!         City::new("Capital", latlon!(10.0, 10.0)).capital(),
//!         City::new("Port", latlon!(-10.0, -10.0)),
//!     ],
//! );
//!
//! let interaction = Interaction::none().with_hovered("Port");
//! for marker in map.markers(&MarkerStyle::default(), &interaction) {
//!     println!("{} at {:?}, label shown: {}", marker.name, marker.position, marker.show_label);
//! }
//! ```
//!
//! None of the operations fail on bad geometry. A path without coordinates falls back to a
//! `100 x 100` square, an empty city set covers the whole globe, and cities sharing a latitude or
//! longitude are centered along that axis.

#![warn(clippy::unwrap_used)]
#![warn(missing_docs)]

pub mod city;
mod color;
pub mod condition;
mod country_map;
pub mod error;
pub mod path_bounds;
pub mod placement;
pub mod projector;
pub mod temperature;
pub mod view_box;

pub use city::City;
pub use color::Color;
pub use condition::WeatherCondition;
pub use country_map::CountryMap;
pub use error::SkyatlasError;
pub use projector::MercatorFit;
pub use temperature::TemperatureUnit;
pub use view_box::ViewBox;

// Reexport skyatlas_types
pub use skyatlas_types;
