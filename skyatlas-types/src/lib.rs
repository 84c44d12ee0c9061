//! Primitive types for placing geographic data onto planar drawings.
//!
//! The crate is split into two coordinate spaces:
//!
//! * [`geo`] contains points in geographic coordinates (latitude and longitude in degrees), their
//!   bounding boxes, and the [`Projection`](geo::Projection) trait with the Mercator transform.
//! * [`cartesian`] contains points and rectangles in a planar coordinate space, such as the user
//!   space of a vector path.

pub mod cartesian;
pub mod error;
pub mod geo;

pub use cartesian::{CartesianPoint2d, NewCartesianPoint2d, PlanarBounds, Point2d, Rect};
pub use error::SkyatlasTypesError;
pub use geo::{GeoBounds, GeoPoint, GeoPoint2d, NewGeoPoint, Projection};
