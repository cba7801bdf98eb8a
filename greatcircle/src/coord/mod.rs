//! Coordinate value type
//!
//! Provides the [`Coordinate`] latitude/longitude pair consumed and produced
//! by the great-circle engine, along with validation and text parsing for
//! callers that build coordinates from user input.

mod types;

pub use types::{CoordError, Coordinate, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

use std::fmt;
use std::str::FromStr;

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lon)
    }
}

impl FromStr for Coordinate {
    type Err = CoordError;

    /// Parses `"lat,lon"` in decimal degrees, e.g. `"41.2811, 28.7533"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| CoordError::Parse(s.to_string()))?;

        let lat: f64 = lat
            .trim()
            .parse()
            .map_err(|_| CoordError::Parse(s.to_string()))?;
        let lon: f64 = lon
            .trim()
            .parse()
            .map_err(|_| CoordError::Parse(s.to_string()))?;

        Coordinate::try_new(lat, lon)
    }
}
