//! Great-circle navigation engine
//!
//! Distance, bearing, and position calculations on a spherical Earth of
//! radius [`EARTH_RADIUS_KM`]. All functions take coordinates in degrees and
//! return degrees or kilometres.
//!
//! # Conventions
//!
//! - Bearings are degrees clockwise from true north, in [0, 360).
//! - Longitudes produced here are wrapped into (-180, 180], except by
//!   [`destination`], which leaves wrapping to the caller.
//! - Signed distances are positive to the right of the reference path.
//!
//! Latitudes outside [-90, 90] are not rejected; the formulas are evaluated
//! as-is. Every inverse-trig argument is clamped to [-1, 1], so finite input
//! never produces NaN through rounding.

mod route;

pub use route::{leg, route_distance, route_legs, Leg};

use std::f64::consts::PI;

use tracing::trace;

use crate::angle::{clamp_unit, wrap_180, wrap_360};
use crate::coord::Coordinate;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6372.8;

/// Kilometres to nautical miles.
pub const KM_TO_NM: f64 = 0.539956803;

/// Angular separation (radians) below which two points count as coincident
/// for [`intersection`].
pub const COINCIDENT_THRESHOLD_RAD: f64 = 1e-9;

/// Sines below this count as zero when testing whether two paths share a
/// great circle.
const COLLINEAR_EPSILON: f64 = 1e-12;

/// Haversine distance between two points in kilometres.
///
/// Symmetric in its arguments and exactly zero for identical points.
pub fn distance(start: &Coordinate, end: &Coordinate) -> f64 {
    EARTH_RADIUS_KM * angular_distance(start, end)
}

/// Haversine distance between two points in nautical miles.
#[inline]
pub fn distance_nm(start: &Coordinate, end: &Coordinate) -> f64 {
    distance(start, end) * KM_TO_NM
}

/// Initial bearing from `start` towards `end`, in [0, 360).
///
/// Returns 0 when both points are equal.
pub fn bearing(start: &Coordinate, end: &Coordinate) -> f64 {
    if start == end {
        return 0.0;
    }

    let (lat1, lat2) = (start.lat_rad(), end.lat_rad());
    let dlon = end.lon_rad() - start.lon_rad();

    let y = dlon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();

    wrap_360(y.atan2(x).to_degrees())
}

/// Final bearing on arrival at `end` when travelling from `start`.
///
/// Defined as the initial bearing plus 180°, wrapped into [0, 360).
#[inline]
pub fn final_bearing(start: &Coordinate, end: &Coordinate) -> f64 {
    wrap_360(bearing(start, end) + 180.0)
}

/// Halfway point along the great circle between two points.
pub fn midpoint(start: &Coordinate, end: &Coordinate) -> Coordinate {
    let (lat1, lon1) = (start.lat_rad(), start.lon_rad());
    let lat2 = end.lat_rad();
    let dlon = end.lon_rad() - lon1;

    let bx = lat2.cos() * dlon.cos();
    let by = lat2.cos() * dlon.sin();

    let lat = (lat1.sin() + lat2.sin()).atan2(((lat1.cos() + bx).powi(2) + by * by).sqrt());
    let lon = lon1 + by.atan2(lat1.cos() + bx);

    Coordinate::new(lat.to_degrees(), wrap_180(lon.to_degrees()))
}

/// Point at `fraction` of the way from `start` to `end`.
///
/// A fraction of 0 yields `start`, 1 yields `end`. Values outside [0, 1]
/// extrapolate along the same great circle. Antipodal endpoints do not
/// define a unique great circle and give an arbitrary result.
pub fn intermediate(start: &Coordinate, end: &Coordinate, fraction: f64) -> Coordinate {
    let delta = angular_distance(start, end);
    // Covers equal points and separations too small to resolve
    if delta == 0.0 {
        return *start;
    }

    let (lat1, lon1) = (start.lat_rad(), start.lon_rad());
    let (lat2, lon2) = (end.lat_rad(), end.lon_rad());

    let a = ((1.0 - fraction) * delta).sin() / delta.sin();
    let b = (fraction * delta).sin() / delta.sin();

    let x = a * lat1.cos() * lon1.cos() + b * lat2.cos() * lon2.cos();
    let y = a * lat1.cos() * lon1.sin() + b * lat2.cos() * lon2.sin();
    let z = a * lat1.sin() + b * lat2.sin();

    let lat = z.atan2((x * x + y * y).sqrt());
    let lon = y.atan2(x);

    Coordinate::new(lat.to_degrees(), wrap_180(lon.to_degrees()))
}

/// Intersection of two paths, each given by a start point and initial bearing.
///
/// Returns `None` when the great circles coincide or when the paths diverge
/// so that no forward intersection exists. If the start points are
/// coincident, `p1` is returned.
pub fn intersection(
    p1: &Coordinate,
    bearing1: f64,
    p2: &Coordinate,
    bearing2: f64,
) -> Option<Coordinate> {
    let (lat1, lon1) = (p1.lat_rad(), p1.lon_rad());
    let (lat2, lon2) = (p2.lat_rad(), p2.lon_rad());
    let theta13 = bearing1.to_radians();
    let theta23 = bearing2.to_radians();

    let delta12 = angular_distance(p1, p2);
    if delta12 < COINCIDENT_THRESHOLD_RAD {
        return Some(*p1);
    }

    // Bearings between the two start points
    let cos_theta_a = (lat2.sin() - lat1.sin() * delta12.cos()) / (delta12.sin() * lat1.cos());
    let cos_theta_b = (lat1.sin() - lat2.sin() * delta12.cos()) / (delta12.sin() * lat2.cos());
    let theta_a = clamp_unit(cos_theta_a).acos();
    let theta_b = clamp_unit(cos_theta_b).acos();

    let (theta12, theta21) = if (lon2 - lon1).sin() > 0.0 {
        (theta_a, 2.0 * PI - theta_b)
    } else {
        (2.0 * PI - theta_a, theta_b)
    };

    let alpha1 = theta13 - theta12;
    let alpha2 = theta21 - theta23;

    if alpha1.sin().abs() < COLLINEAR_EPSILON && alpha2.sin().abs() < COLLINEAR_EPSILON {
        trace!(bearing1, bearing2, "paths lie on the same great circle");
        return None;
    }
    if alpha1.sin() * alpha2.sin() < 0.0 {
        trace!(bearing1, bearing2, "paths diverge, no forward intersection");
        return None;
    }

    let cos_alpha3 = -alpha1.cos() * alpha2.cos() + alpha1.sin() * alpha2.sin() * delta12.cos();
    let delta13 = (delta12.sin() * alpha1.sin() * alpha2.sin())
        .atan2(alpha2.cos() + alpha1.cos() * cos_alpha3);

    let lat3 =
        clamp_unit(lat1.sin() * delta13.cos() + lat1.cos() * delta13.sin() * theta13.cos()).asin();
    let dlon13 = (theta13.sin() * delta13.sin() * lat1.cos())
        .atan2(delta13.cos() - lat1.sin() * lat3.sin());
    let lon3 = lon1 + dlon13;

    Some(Coordinate::new(lat3.to_degrees(), wrap_180(lon3.to_degrees())))
}

/// Destination reached by travelling `distance_km` from `start` on the
/// initial bearing `bearing_deg`.
///
/// The returned longitude is not wrapped; call
/// [`Coordinate::normalized`] when the canonical range is required.
pub fn destination(start: &Coordinate, distance_km: f64, bearing_deg: f64) -> Coordinate {
    let (lat1, lon1) = (start.lat_rad(), start.lon_rad());
    let theta = bearing_deg.to_radians();
    let delta = distance_km / EARTH_RADIUS_KM;

    let lat2 = clamp_unit(lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * theta.cos()).asin();
    let lon2 = lon1
        + (theta.sin() * delta.sin() * lat1.cos()).atan2(delta.cos() - lat1.sin() * lat2.sin());

    Coordinate::new(lat2.to_degrees(), lon2.to_degrees())
}

/// Signed distance in kilometres from `current` to the great circle through
/// `start` and `end`.
///
/// Positive when `current` lies to the right of the path, negative to the
/// left, and zero when `current` equals `start`.
pub fn cross_track_distance(current: &Coordinate, start: &Coordinate, end: &Coordinate) -> f64 {
    if current == start {
        return 0.0;
    }

    cross_track_angle(current, start, end) * EARTH_RADIUS_KM
}

/// Signed distance in kilometres from `start` along the path towards `end`
/// to the point closest to `current`.
///
/// Negative when the closest point lies behind `start`. Zero when `current`
/// equals `start`.
pub fn along_track_distance(current: &Coordinate, start: &Coordinate, end: &Coordinate) -> f64 {
    if current == start {
        return 0.0;
    }

    let delta13 = angular_distance(start, current);
    let theta13 = bearing(start, current).to_radians();
    let theta12 = bearing(start, end).to_radians();
    let delta_xt = cross_track_angle(current, start, end);

    let delta_at = clamp_unit(delta13.cos() / delta_xt.cos().abs()).acos();

    delta_at * sign((theta12 - theta13).cos()) * EARTH_RADIUS_KM
}

/// Maximum latitude in degrees reached by a great circle leaving `start` on
/// `bearing_deg` (Clairaut's formula).
///
/// The southern minimum is the negation of this value.
pub fn max_latitude(start: &Coordinate, bearing_deg: f64) -> f64 {
    let theta = bearing_deg.to_radians();
    let lat = start.lat_rad();

    clamp_unit((theta.sin() * lat.cos()).abs()).acos().to_degrees()
}

/// Longitudes at which the great circle through `start` and `end` crosses
/// the parallel `latitude_deg`.
///
/// Returns `None` when the circle never reaches that latitude, or when the
/// endpoints do not define a unique circle crossing it (coincident points,
/// or an equatorial path). Both longitudes are wrapped into (-180, 180].
pub fn crossing_parallels(
    start: &Coordinate,
    end: &Coordinate,
    latitude_deg: f64,
) -> Option<(f64, f64)> {
    let lat = latitude_deg.to_radians();
    let (lat1, lon1) = (start.lat_rad(), start.lon_rad());
    let lat2 = end.lat_rad();
    let dlon = end.lon_rad() - lon1;

    let x = lat1.sin() * lat2.cos() * lat.cos() * dlon.sin();
    let y = lat1.sin() * lat2.cos() * lat.cos() * dlon.cos() - lat1.cos() * lat2.sin() * lat.cos();
    let z = lat1.cos() * lat2.cos() * lat.sin() * dlon.sin();

    let horizontal_sq = x * x + y * y;
    if z * z > horizontal_sq {
        trace!(latitude_deg, "great circle does not reach parallel");
        return None;
    }
    if horizontal_sq == 0.0 {
        trace!(latitude_deg, "endpoints do not define a unique crossing");
        return None;
    }

    let lon_mid = (-y).atan2(x);
    let dlon_i = clamp_unit(z / horizontal_sq.sqrt()).acos();

    let lon_i1 = lon1 + lon_mid - dlon_i;
    let lon_i2 = lon1 + lon_mid + dlon_i;

    Some((wrap_180(lon_i1.to_degrees()), wrap_180(lon_i2.to_degrees())))
}

/// Central angle between two points in radians (haversine).
fn angular_distance(start: &Coordinate, end: &Coordinate) -> f64 {
    let (lat1, lat2) = (start.lat_rad(), end.lat_rad());
    let dlat = lat2 - lat1;
    let dlon = end.lon_rad() - start.lon_rad();

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);

    2.0 * a.sqrt().clamp(0.0, 1.0).asin()
}

/// Cross-track angle in radians.
fn cross_track_angle(current: &Coordinate, start: &Coordinate, end: &Coordinate) -> f64 {
    let delta13 = angular_distance(start, current);
    let theta13 = bearing(start, current).to_radians();
    let theta12 = bearing(start, end).to_radians();

    clamp_unit(delta13.sin() * (theta13 - theta12).sin()).asin()
}

/// Sign of `value` as -1, 0, or 1.
#[inline]
fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}
