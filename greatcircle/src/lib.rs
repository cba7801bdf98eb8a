//! GreatCircle - Navigation math on a spherical Earth
//!
//! This library provides great-circle calculations over latitude/longitude
//! pairs: distance, bearings, midpoint and intermediate points, path
//! intersection, destination projection, cross-track and along-track
//! distances, maximum latitude, and parallel crossings.
//!
//! Every operation is a pure function of its inputs. Nothing here holds
//! state, performs I/O, or reads configuration, so all functions are safe
//! to call from any thread.
//!
//! # Example
//!
//! ```
//! use greatcircle::{great_circle, Coordinate};
//!
//! let istanbul = Coordinate::new(41.28111111, 28.75333333);
//! let jfk = Coordinate::new(40.63980103, -73.77890015);
//!
//! let km = great_circle::distance(&istanbul, &jfk);
//! let heading = great_circle::bearing(&istanbul, &jfk);
//!
//! assert!(km > 8024.0 && km < 8030.0);
//! assert!(heading > 270.0 && heading < 300.0);
//! ```

pub mod angle;
pub mod coord;
pub mod great_circle;

pub use coord::{CoordError, Coordinate};
pub use great_circle::{Leg, EARTH_RADIUS_KM, KM_TO_NM};
