//! Common types and utilities shared across CLI commands.

use clap::{Args, ValueEnum};
use greatcircle::{Coordinate, KM_TO_NM};
use serde::Serialize;

use crate::config::{ConfigFile, MAX_PRECISION};
use crate::error::CliError;

/// Distance unit selection for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    /// Kilometres
    Km,
    /// Nautical miles
    Nm,
}

impl DistanceUnit {
    /// Parse from config file string.
    pub fn from_config_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "km" => Some(DistanceUnit::Km),
            "nm" => Some(DistanceUnit::Nm),
            _ => None,
        }
    }

    /// Short label used in output.
    pub fn as_str(&self) -> &'static str {
        match self {
            DistanceUnit::Km => "km",
            DistanceUnit::Nm => "nm",
        }
    }

    /// Converts a distance in kilometres into this unit.
    pub fn convert_km(&self, km: f64) -> f64 {
        match self {
            DistanceUnit::Km => km,
            DistanceUnit::Nm => km * KM_TO_NM,
        }
    }
}

/// Output flags shared by every navigation command.
#[derive(Debug, Clone, Default, Args)]
pub struct OutputArgs {
    /// Unit for distances (overrides config)
    #[arg(long, global = true, value_enum)]
    pub unit: Option<DistanceUnit>,

    /// Decimal places in printed numbers (overrides config)
    #[arg(long, global = true)]
    pub precision: Option<usize>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

/// Renders engine results as text.
#[derive(Debug, Clone, PartialEq)]
pub struct Formatter {
    pub unit: DistanceUnit,
    pub precision: usize,
    pub json: bool,
}

impl Formatter {
    /// Resolve output settings from CLI args and config.
    pub fn resolve(args: &OutputArgs, config: &ConfigFile) -> Result<Self, CliError> {
        // CLI takes precedence, then config
        let precision = args.precision.unwrap_or(config.display.precision);
        if precision > MAX_PRECISION {
            return Err(CliError::InvalidArgument(format!(
                "precision must be at most {}, got {}",
                MAX_PRECISION, precision
            )));
        }

        Ok(Self {
            unit: args.unit.unwrap_or(config.display.unit),
            precision,
            json: args.json,
        })
    }

    /// Distance given in kilometres, in the selected unit.
    pub fn distance(&self, km: f64) -> String {
        format!(
            "{:.*} {}",
            self.precision,
            self.unit.convert_km(km),
            self.unit.as_str()
        )
    }

    /// Angle in degrees.
    pub fn angle(&self, degrees: f64) -> String {
        format!("{:.*}°", self.precision, degrees)
    }

    /// Coordinate as `lat, lon` in degrees.
    pub fn coordinate(&self, coord: &Coordinate) -> String {
        format!("{:.*}, {:.*}", self.precision, coord.lat, self.precision, coord.lon)
    }
}
