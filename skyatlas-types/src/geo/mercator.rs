//! Vertical axis of the Mercator projection on a unit sphere.
//!
//! Horizontal coordinate in Mercator is linear in longitude, so only the vertical transform is
//! provided here. Values are dimensionless; multiply by the sphere radius to get meters.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

/// Latitudes are clamped to this value (in degrees) so that the poles have finite ordinates.
pub const MAX_LATITUDE: f64 = 89.9999;

/// Mercator ordinate of the latitude given in degrees: `ln(tan(π/4 + φ/2))`.
///
/// Grows towards the north and equals `0` at the equator. Latitude is clamped to
/// [`MAX_LATITUDE`] in both directions.
pub fn mercator_y(lat: f64) -> f64 {
    let lat = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);
    (FRAC_PI_4 + lat.to_radians() / 2.0).tan().ln()
}

/// Inverse of [`mercator_y`], returns latitude in degrees.
pub fn mercator_lat(y: f64) -> f64 {
    (2.0 * y.exp().atan() - FRAC_PI_2).to_degrees()
}
