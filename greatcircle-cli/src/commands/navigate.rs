//! Navigation commands.
//!
//! Each subcommand maps onto one great-circle engine call. Evaluation and
//! rendering are split so the numeric answer can be printed as text or JSON.

use clap::Subcommand;
use greatcircle::great_circle::{self, Leg};
use greatcircle::{Coordinate, KM_TO_NM};
use serde::Serialize;
use tracing::debug;

use super::common::Formatter;
use crate::error::CliError;

/// Navigation subcommands. Coordinates are given as `lat,lon`.
#[derive(Debug, Clone, Subcommand)]
pub enum NavCommand {
    /// Great-circle distance between two points
    Distance {
        #[arg(allow_hyphen_values = true)]
        from: Coordinate,
        #[arg(allow_hyphen_values = true)]
        to: Coordinate,
    },

    /// Initial bearing from one point towards another
    Bearing {
        #[arg(allow_hyphen_values = true)]
        from: Coordinate,
        #[arg(allow_hyphen_values = true)]
        to: Coordinate,
    },

    /// Bearing on arrival at the destination
    FinalBearing {
        #[arg(allow_hyphen_values = true)]
        from: Coordinate,
        #[arg(allow_hyphen_values = true)]
        to: Coordinate,
    },

    /// Halfway point between two points
    Midpoint {
        #[arg(allow_hyphen_values = true)]
        from: Coordinate,
        #[arg(allow_hyphen_values = true)]
        to: Coordinate,
    },

    /// Point at a fraction of the way between two points (0 = from, 1 = to)
    Intermediate {
        #[arg(allow_hyphen_values = true)]
        from: Coordinate,
        #[arg(allow_hyphen_values = true)]
        to: Coordinate,
        #[arg(allow_hyphen_values = true)]
        fraction: f64,
    },

    /// Crossing point of two paths given by start point and bearing
    Intersection {
        #[arg(allow_hyphen_values = true)]
        p1: Coordinate,
        #[arg(allow_hyphen_values = true)]
        bearing1: f64,
        #[arg(allow_hyphen_values = true)]
        p2: Coordinate,
        #[arg(allow_hyphen_values = true)]
        bearing2: f64,
    },

    /// Point reached by travelling a distance (km) on a bearing
    Destination {
        #[arg(allow_hyphen_values = true)]
        from: Coordinate,
        #[arg(allow_hyphen_values = true)]
        distance_km: f64,
        #[arg(allow_hyphen_values = true)]
        bearing: f64,
    },

    /// Signed distance from a point to the path between two points
    CrossTrack {
        #[arg(allow_hyphen_values = true)]
        current: Coordinate,
        #[arg(allow_hyphen_values = true)]
        from: Coordinate,
        #[arg(allow_hyphen_values = true)]
        to: Coordinate,
    },

    /// Distance along a path to the point closest to a position
    AlongTrack {
        #[arg(allow_hyphen_values = true)]
        current: Coordinate,
        #[arg(allow_hyphen_values = true)]
        from: Coordinate,
        #[arg(allow_hyphen_values = true)]
        to: Coordinate,
    },

    /// Highest latitude reached leaving a point on a bearing
    MaxLatitude {
        #[arg(allow_hyphen_values = true)]
        from: Coordinate,
        #[arg(allow_hyphen_values = true)]
        bearing: f64,
    },

    /// Longitudes where the path between two points crosses a latitude
    CrossingParallels {
        #[arg(allow_hyphen_values = true)]
        from: Coordinate,
        #[arg(allow_hyphen_values = true)]
        to: Coordinate,
        #[arg(allow_hyphen_values = true)]
        latitude: f64,
    },

    /// Distance, bearings, and midpoint of a single leg
    Leg {
        #[arg(allow_hyphen_values = true)]
        from: Coordinate,
        #[arg(allow_hyphen_values = true)]
        to: Coordinate,
    },

    /// Legs and total distance of a route through two or more points
    ///
    /// Every token after the first point is read as a point, so output
    /// flags such as `--json` must come before the points.
    #[command(after_help = "Example: greatcircle route --json 51.47,-0.4543 64.13,-21.94 40.6398,-73.7789")]
    Route {
        #[arg(required = true, num_args = 2.., allow_hyphen_values = true)]
        points: Vec<Coordinate>,
    },
}

/// Result of a navigation command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Answer {
    Distance { km: f64, nm: f64 },
    Bearing { degrees: f64 },
    Position { position: Coordinate },
    CrossTrack { km: f64, nm: f64 },
    AlongTrack { km: f64, nm: f64 },
    Latitude { degrees: f64 },
    Crossing { lon1: f64, lon2: f64 },
    NoResult { reason: String },
    Leg { leg: Leg },
    Route { legs: Vec<Leg>, total_km: f64, total_nm: f64 },
}

/// Run a navigation command and print its answer.
pub fn run(command: &NavCommand, formatter: &Formatter) -> Result<(), CliError> {
    let answer = evaluate(command)?;
    println!("{}", render(&answer, formatter)?);
    Ok(())
}

/// Evaluate a navigation command against the engine.
pub fn evaluate(command: &NavCommand) -> Result<Answer, CliError> {
    debug!(?command, "Evaluating");

    let answer = match command {
        NavCommand::Distance { from, to } => {
            let km = great_circle::distance(from, to);
            Answer::Distance {
                km,
                nm: km * KM_TO_NM,
            }
        }
        NavCommand::Bearing { from, to } => Answer::Bearing {
            degrees: great_circle::bearing(from, to),
        },
        NavCommand::FinalBearing { from, to } => Answer::Bearing {
            degrees: great_circle::final_bearing(from, to),
        },
        NavCommand::Midpoint { from, to } => Answer::Position {
            position: great_circle::midpoint(from, to),
        },
        NavCommand::Intermediate { from, to, fraction } => {
            require_finite("fraction", *fraction)?;
            Answer::Position {
                position: great_circle::intermediate(from, to, *fraction),
            }
        }
        NavCommand::Intersection {
            p1,
            bearing1,
            p2,
            bearing2,
        } => {
            require_finite("bearing1", *bearing1)?;
            require_finite("bearing2", *bearing2)?;
            match great_circle::intersection(p1, *bearing1, p2, *bearing2) {
                Some(position) => Answer::Position { position },
                None => Answer::NoResult {
                    reason: "no intersection".to_string(),
                },
            }
        }
        NavCommand::Destination {
            from,
            distance_km,
            bearing,
        } => {
            require_finite("distance", *distance_km)?;
            require_finite("bearing", *bearing)?;
            Answer::Position {
                position: great_circle::destination(from, *distance_km, *bearing).normalized(),
            }
        }
        NavCommand::CrossTrack { current, from, to } => {
            let km = great_circle::cross_track_distance(current, from, to);
            Answer::CrossTrack {
                km,
                nm: km * KM_TO_NM,
            }
        }
        NavCommand::AlongTrack { current, from, to } => {
            let km = great_circle::along_track_distance(current, from, to);
            Answer::AlongTrack {
                km,
                nm: km * KM_TO_NM,
            }
        }
        NavCommand::MaxLatitude { from, bearing } => {
            require_finite("bearing", *bearing)?;
            Answer::Latitude {
                degrees: great_circle::max_latitude(from, *bearing),
            }
        }
        NavCommand::CrossingParallels { from, to, latitude } => {
            if !(-90.0..=90.0).contains(latitude) {
                return Err(CliError::InvalidArgument(format!(
                    "latitude must be between -90 and 90, got {}",
                    latitude
                )));
            }
            match great_circle::crossing_parallels(from, to, *latitude) {
                Some((lon1, lon2)) => Answer::Crossing { lon1, lon2 },
                None => Answer::NoResult {
                    reason: "no crossing".to_string(),
                },
            }
        }
        NavCommand::Leg { from, to } => Answer::Leg {
            leg: great_circle::leg(from, to),
        },
        NavCommand::Route { points } => {
            let total_km = great_circle::route_distance(points);
            Answer::Route {
                legs: great_circle::route_legs(points),
                total_km,
                total_nm: total_km * KM_TO_NM,
            }
        }
    };

    Ok(answer)
}

/// Render an answer as text or JSON.
pub fn render(answer: &Answer, formatter: &Formatter) -> Result<String, CliError> {
    if formatter.json {
        return Ok(serde_json::to_string_pretty(answer)?);
    }

    let text = match answer {
        Answer::Distance { km, .. } => formatter.distance(*km),
        Answer::Bearing { degrees } | Answer::Latitude { degrees } => formatter.angle(*degrees),
        Answer::Position { position } => formatter.coordinate(position),
        Answer::CrossTrack { km, .. } => {
            let side = if *km > 0.0 {
                "right of track"
            } else if *km < 0.0 {
                "left of track"
            } else {
                "on track"
            };
            format!("{} {}", formatter.distance(km.abs()), side)
        }
        Answer::AlongTrack { km, .. } => {
            let direction = if *km < 0.0 {
                "behind start"
            } else {
                "from start"
            };
            format!("{} {}", formatter.distance(km.abs()), direction)
        }
        Answer::Crossing { lon1, lon2 } => {
            format!("{}, {}", formatter.angle(*lon1), formatter.angle(*lon2))
        }
        Answer::NoResult { reason } => reason.clone(),
        Answer::Leg { leg } => render_leg(leg, formatter),
        Answer::Route { legs, total_km, .. } => {
            let mut lines = Vec::with_capacity(legs.len() + 1);
            for (i, leg) in legs.iter().enumerate() {
                lines.push(format!(
                    "{:>3}. {} -> {}  {}  {}",
                    i + 1,
                    formatter.coordinate(&leg.from),
                    formatter.coordinate(&leg.to),
                    formatter.distance(leg.distance_km),
                    formatter.angle(leg.initial_bearing),
                ));
            }
            lines.push(format!("Total: {}", formatter.distance(*total_km)));
            lines.join("\n")
        }
    };

    Ok(text)
}

fn render_leg(leg: &Leg, formatter: &Formatter) -> String {
    [
        format!("From:            {}", formatter.coordinate(&leg.from)),
        format!("To:              {}", formatter.coordinate(&leg.to)),
        format!("Distance:        {}", formatter.distance(leg.distance_km)),
        format!("Initial bearing: {}", formatter.angle(leg.initial_bearing)),
        format!("Final bearing:   {}", formatter.angle(leg.final_bearing)),
        format!("Midpoint:        {}", formatter.coordinate(&leg.midpoint)),
    ]
    .join("\n")
}

fn require_finite(name: &str, value: f64) -> Result<(), CliError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CliError::InvalidArgument(format!(
            "{} must be a finite number, got {}",
            name, value
        )))
    }
}
