//! Error types used by the crate.
//!
//! Projection itself never fails: malformed paths and empty city sets degrade to fallback bounds.
//! Errors only come from the data-ingestion boundary (configuration, weather codes, coordinates).

use skyatlas_types::SkyatlasTypesError;
use thiserror::Error;

/// Skyatlas error type.
#[derive(Debug, Error)]
pub enum SkyatlasError {
    /// Marker style configuration could not be decoded.
    #[error("failed to decode marker style")]
    Style(#[from] serde_json::Error),
    /// The code is not a known WMO weather interpretation code.
    #[error("unknown weather code: {0}")]
    UnknownWeatherCode(u16),
    /// Invalid geographic data.
    #[error(transparent)]
    Types(#[from] SkyatlasTypesError),
}
