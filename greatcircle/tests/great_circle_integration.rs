//! Integration tests for the great-circle engine.
//!
//! These tests exercise the public API the way a flight-planning consumer
//! does: parse coordinates from text, compose engine calls, and check that
//! the results agree with each other.
//!
//! Run with: `cargo test --test great_circle_integration`

use greatcircle::angle::{wrap_180, wrap_360};
use greatcircle::great_circle::{
    along_track_distance, bearing, cross_track_distance, crossing_parallels, destination,
    distance, distance_nm, final_bearing, intermediate, intersection, leg, max_latitude,
    midpoint, route_distance,
};
use greatcircle::{Coordinate, EARTH_RADIUS_KM};

// ============================================================================
// Helper Functions
// ============================================================================

fn parse(text: &str) -> Coordinate {
    text.parse().expect("valid coordinate")
}

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() < tolerance,
        "Expected {} ± {}, got {}",
        expected,
        tolerance,
        actual
    );
}

// ============================================================================
// Integration Tests
// ============================================================================

/// Istanbul to New York JFK, as entered in decimal degrees.
#[test]
fn test_istanbul_jfk_flight_plan() {
    let istanbul = parse("41.28111111,28.75333333");
    let jfk = parse("40.63980103,-73.77890015");

    let km = distance(&istanbul, &jfk);
    assert!(km > 8024.0 && km < 8030.0, "Got {} km", km);
    assert_close(distance(&jfk, &istanbul), km, 1e-9);

    let heading = bearing(&istanbul, &jfk);
    assert!(heading > 270.0 && heading < 300.0, "Got {}°", heading);
    assert_close(wrap_360(final_bearing(&istanbul, &jfk) - heading), 180.0, 1e-9);

    assert_close(distance_nm(&istanbul, &jfk), km * 0.539956803, 1e-9);
}

/// Walking the route in fixed fractions stays on the same great circle.
#[test]
fn test_route_waypoints_stay_on_track() {
    let heathrow = parse("51.47,-0.4543");
    let jfk = parse("40.63980103,-73.77890015");
    let total = distance(&heathrow, &jfk);

    for step in 1..10 {
        let fraction = step as f64 / 10.0;
        let waypoint = intermediate(&heathrow, &jfk, fraction);

        assert_close(cross_track_distance(&waypoint, &heathrow, &jfk), 0.0, 1e-6);
        assert_close(
            along_track_distance(&waypoint, &heathrow, &jfk),
            total * fraction,
            1e-3,
        );
    }
}

/// Projecting from the origin by distance and bearing lands on the target.
#[test]
fn test_distance_bearing_destination_round_trip() {
    let pairs = [
        ("41.28111111,28.75333333", "40.63980103,-73.77890015"),
        ("-33.9461,151.1772", "51.47,-0.4543"),
        ("64.1300,-21.9406", "35.5523,139.7797"),
        ("0,0", "0,90"),
    ];

    for (from, to) in pairs {
        let from = parse(from);
        let to = parse(to);

        let reached = destination(&from, distance(&from, &to), bearing(&from, &to)).normalized();
        assert!(
            distance(&reached, &to) < 1e-3,
            "{} -> {}: reached {}",
            from,
            to,
            reached
        );
    }
}

/// A route's parallel crossings respect its maximum-latitude envelope.
#[test]
fn test_crossings_within_envelope() {
    let heathrow = parse("51.47,-0.4543");
    let jfk = parse("40.63980103,-73.77890015");
    let peak = max_latitude(&heathrow, bearing(&heathrow, &jfk));

    assert!(crossing_parallels(&heathrow, &jfk, peak + 0.5).is_none());
    assert!(crossing_parallels(&heathrow, &jfk, -(peak + 0.5)).is_none());

    let (lon1, lon2) =
        crossing_parallels(&heathrow, &jfk, peak - 1.0).expect("Route crosses below its peak");
    assert!(lon1 > -180.0 && lon1 <= 180.0);
    assert!(lon2 > -180.0 && lon2 <= 180.0);
    assert_ne!(lon1, lon2);
}

/// Two flights converging over the Balkans.
#[test]
fn test_converging_flights_intersect() {
    let istanbul = parse("41.28111111,28.75333333");
    let sicily = parse("35.0,15.0");

    let crossing = intersection(&istanbul, 270.0, &sicily, 45.0).expect("Paths should cross");

    // The crossing point is reached from each start on its own heading
    assert_close(bearing(&istanbul, &crossing), 270.0, 1.0);
    assert_close(bearing(&sicily, &crossing), 45.0, 1e-6);

    // Paths swapped give the same crossing
    let swapped = intersection(&sicily, 45.0, &istanbul, 270.0).expect("Symmetric");
    assert!(distance(&crossing, &swapped) < 1e-6);
}

/// The midpoint sits halfway along the leg and matches the leg summary.
#[test]
fn test_leg_summary_midpoint() {
    let rome = parse("41.80002778,12.23888889");
    let heathrow = parse("51.47,-0.4543");

    let summary = leg(&rome, &heathrow);
    let mid = midpoint(&rome, &heathrow);

    assert_eq!(summary.midpoint, mid);
    assert_close(distance(&rome, &mid), summary.distance_km / 2.0, 1e-6);
    assert_close(
        route_distance(&[rome, mid, heathrow]),
        summary.distance_km,
        1e-6,
    );
}

/// Circumnavigating along the equator in four hops returns to the start.
#[test]
fn test_equatorial_circumnavigation() {
    let quarter = EARTH_RADIUS_KM * std::f64::consts::FRAC_PI_2;
    let mut position = Coordinate::new(0.0, 0.0);

    for _ in 0..4 {
        position = destination(&position, quarter, 90.0).normalized();
    }

    assert_close(position.lat, 0.0, 1e-9);
    assert_close(wrap_180(position.lon), 0.0, 1e-9);
}
