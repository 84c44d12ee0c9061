//! Geometries in geographic coordinates (latitude and longitude) (see [`GeoPoint`]), their bounding
//! boxes (see [`GeoBounds`]) and conversion into planar coordinates (see [`Projection`]).

mod bounds;
pub mod mercator;
mod point;
mod projection;

pub use bounds::GeoBounds;
pub use point::{GeoPoint, GeoPoint2d, NewGeoPoint};
pub use projection::Projection;
