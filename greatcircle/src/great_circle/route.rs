//! Leg and route summaries.
//!
//! Bundles the per-leg figures a flight plan shows (distance, initial and
//! final bearing, midpoint) and totals over a sequence of waypoints.

use serde::Serialize;

use super::{bearing, distance, final_bearing, midpoint, KM_TO_NM};
use crate::coord::Coordinate;

/// Summary of a single great-circle leg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Leg {
    /// Departure point.
    pub from: Coordinate,
    /// Arrival point.
    pub to: Coordinate,
    /// Length in kilometres.
    pub distance_km: f64,
    /// Length in nautical miles.
    pub distance_nm: f64,
    /// Initial bearing in degrees.
    pub initial_bearing: f64,
    /// Final bearing in degrees.
    pub final_bearing: f64,
    /// Halfway point along the leg.
    pub midpoint: Coordinate,
}

/// Computes the [`Leg`] summary from `from` to `to`.
pub fn leg(from: &Coordinate, to: &Coordinate) -> Leg {
    let distance_km = distance(from, to);
    Leg {
        from: *from,
        to: *to,
        distance_km,
        distance_nm: distance_km * KM_TO_NM,
        initial_bearing: bearing(from, to),
        final_bearing: final_bearing(from, to),
        midpoint: midpoint(from, to),
    }
}

/// Total great-circle length in kilometres of a route through `points`.
///
/// Fewer than two points give a length of zero.
pub fn route_distance(points: &[Coordinate]) -> f64 {
    points.windows(2).map(|w| distance(&w[0], &w[1])).sum()
}

/// Leg summaries for each consecutive pair of `points`.
pub fn route_legs(points: &[Coordinate]) -> Vec<Leg> {
    points.windows(2).map(|w| leg(&w[0], &w[1])).collect()
}
