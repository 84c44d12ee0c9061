//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SkyatlasTypesError {
    /// Latitude or longitude is outside of the valid range or is not a finite number.
    #[error("invalid coordinate: lat {lat}, lon {lon}")]
    InvalidCoordinate {
        /// Rejected latitude in degrees.
        lat: f64,
        /// Rejected longitude in degrees.
        lon: f64,
    },
}
