use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::angle::wrap_180;

/// Minimum valid latitude in degrees.
pub const MIN_LAT: f64 = -90.0;

/// Maximum valid latitude in degrees.
pub const MAX_LAT: f64 = 90.0;

/// Minimum accepted longitude in degrees.
pub const MIN_LON: f64 = -180.0;

/// Maximum accepted longitude in degrees.
pub const MAX_LON: f64 = 180.0;

/// A point on the sphere, in decimal degrees.
///
/// Equality is structural: two coordinates are equal only when both fields
/// compare equal as `f64`. The engine relies on this for its same-point
/// branches, so no tolerance is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees, positive north.
    pub lat: f64,
    /// Longitude in degrees, positive east.
    pub lon: f64,
}

impl Coordinate {
    /// Creates a coordinate without range checks.
    #[inline]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Creates a coordinate, rejecting non-finite or out-of-range values.
    pub fn try_new(lat: f64, lon: f64) -> Result<Self, CoordError> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(CoordError::NonFinite);
        }
        if !(MIN_LAT..=MAX_LAT).contains(&lat) {
            return Err(CoordError::InvalidLatitude(lat));
        }
        if !(MIN_LON..=MAX_LON).contains(&lon) {
            return Err(CoordError::InvalidLongitude(lon));
        }
        Ok(Self { lat, lon })
    }

    /// Latitude in radians.
    #[inline]
    pub fn lat_rad(&self) -> f64 {
        self.lat.to_radians()
    }

    /// Longitude in radians.
    #[inline]
    pub fn lon_rad(&self) -> f64 {
        self.lon.to_radians()
    }

    /// Returns a copy with the longitude wrapped into (-180, 180].
    #[inline]
    pub fn normalized(&self) -> Self {
        Self {
            lat: self.lat,
            lon: wrap_180(self.lon),
        }
    }
}

/// Errors raised when building a [`Coordinate`] from untrusted input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordError {
    /// Latitude outside -90..=90.
    #[error("Invalid latitude: {0} (must be between -90 and 90)")]
    InvalidLatitude(f64),

    /// Longitude outside -180..=180.
    #[error("Invalid longitude: {0} (must be between -180 and 180)")]
    InvalidLongitude(f64),

    /// NaN or infinite component.
    #[error("Coordinate components must be finite numbers")]
    NonFinite,

    /// Text could not be read as `lat,lon`.
    #[error("Cannot parse coordinate '{0}': expected 'lat,lon' in decimal degrees")]
    Parse(String),
}
