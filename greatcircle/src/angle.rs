//! Angle normalization helpers.
//!
//! Bearings live in [0, 360) and longitudes in (-180, 180]. Both wrappers
//! return in-range input unchanged, bit for bit, so repeated wrapping never
//! accumulates floating-point drift.

/// Wraps an angle in degrees into [0, 360).
///
/// # Examples
///
/// ```
/// use greatcircle::angle::wrap_360;
///
/// assert_eq!(wrap_360(370.0), 10.0);
/// assert_eq!(wrap_360(-10.0), 350.0);
/// ```
#[inline]
pub fn wrap_360(degrees: f64) -> f64 {
    if (0.0..360.0).contains(&degrees) {
        return degrees;
    }

    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Wraps an angle in degrees into (-180, 180].
///
/// # Examples
///
/// ```
/// use greatcircle::angle::wrap_180;
///
/// assert_eq!(wrap_180(190.0), -170.0);
/// assert_eq!(wrap_180(180.0), 180.0);
/// assert_eq!(wrap_180(-180.0), 180.0);
/// ```
#[inline]
pub fn wrap_180(degrees: f64) -> f64 {
    if degrees > -180.0 && degrees <= 180.0 {
        return degrees;
    }

    let wrapped = (degrees + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped <= -180.0 {
        180.0
    } else {
        wrapped
    }
}

/// Clamps an inverse-trig argument into [-1, 1].
///
/// Sums and products of sines and cosines can land a few ulps outside the
/// domain of `asin`/`acos`, which would otherwise yield NaN.
#[inline]
pub fn clamp_unit(value: f64) -> f64 {
    value.clamp(-1.0, 1.0)
}
