//! GreatCircle CLI - Command-line navigation calculator
//!
//! Thin consumer of the `greatcircle` library: parses decimal-degree
//! coordinates, invokes the engine, and formats the results.

mod commands;
mod config;
mod error;
mod logging;

use clap::{Parser, Subcommand};
use tracing::debug;

use commands::common::{Formatter, OutputArgs};
use commands::config::ConfigCommands;
use commands::navigate::NavCommand;
use config::ConfigFile;
use error::CliError;

/// Great-circle navigation on a spherical Earth.
///
/// Coordinates are given as `lat,lon` in decimal degrees, e.g.
/// `41.2811,28.7533`. Distances default to kilometres.
#[derive(Debug, Parser)]
#[command(name = "greatcircle", version, about)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    output: OutputArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(flatten)]
    Nav(NavCommand),

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = ConfigFile::load()?;
    logging::init(cli.verbose, config.logging.level.as_deref());
    debug!(?config, "Configuration loaded");

    match &cli.command {
        Commands::Nav(command) => {
            let formatter = Formatter::resolve(&cli.output, &config)?;
            commands::navigate::run(command, &formatter)
        }
        Commands::Config { command } => commands::config::run(command, &config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use commands::common::DistanceUnit;
    use greatcircle::Coordinate;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_distance_with_negative_longitude() {
        let cli = Cli::try_parse_from([
            "greatcircle",
            "distance",
            "41.28111111,28.75333333",
            "40.63980103,-73.77890015",
        ])
        .unwrap();

        match cli.command {
            Commands::Nav(NavCommand::Distance { from, to }) => {
                assert_eq!(from, Coordinate::new(41.28111111, 28.75333333));
                assert_eq!(to, Coordinate::new(40.63980103, -73.77890015));
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_negative_latitude_positional() {
        let cli = Cli::try_parse_from(["greatcircle", "bearing", "-33.9461,151.1772", "51.47,-0.4543"])
            .unwrap();
        assert!(matches!(cli.command, Commands::Nav(NavCommand::Bearing { .. })));
    }

    #[test]
    fn test_parse_global_output_flags() {
        let cli = Cli::try_parse_from([
            "greatcircle",
            "leg",
            "0,0",
            "0,90",
            "--unit",
            "nm",
            "--precision",
            "3",
            "--json",
        ])
        .unwrap();

        assert_eq!(cli.output.unit, Some(DistanceUnit::Nm));
        assert_eq!(cli.output.precision, Some(3));
        assert!(cli.output.json);
    }

    #[test]
    fn test_parse_route_requires_two_points() {
        assert!(Cli::try_parse_from(["greatcircle", "route", "0,0"]).is_err());

        let cli = Cli::try_parse_from(["greatcircle", "route", "0,0", "10,10", "-5,20"]).unwrap();
        match cli.command {
            Commands::Nav(NavCommand::Route { points }) => assert_eq!(points.len(), 3),
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_route_output_flags_before_points() {
        let cli = Cli::try_parse_from([
            "greatcircle",
            "route",
            "--json",
            "--unit",
            "nm",
            "51.47,-0.4543",
            "-33.9461,151.1772",
            "40.6398,-73.7789",
        ])
        .unwrap();

        assert!(cli.output.json);
        assert_eq!(cli.output.unit, Some(DistanceUnit::Nm));
        match cli.command {
            Commands::Nav(NavCommand::Route { points }) => {
                assert_eq!(points.len(), 3);
                assert_eq!(points[1], Coordinate::new(-33.9461, 151.1772));
            }
            other => panic!("Unexpected command: {:?}", other),
        }

        let cli = Cli::try_parse_from([
            "greatcircle",
            "--json",
            "route",
            "51.47,-0.4543",
            "64.13,-21.94",
        ])
        .unwrap();
        assert!(cli.output.json);
    }

    #[test]
    fn test_parse_route_reads_trailing_tokens_as_points() {
        let result = Cli::try_parse_from([
            "greatcircle",
            "route",
            "51.47,-0.4543",
            "64.13,-21.94",
            "--json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_invalid_coordinate() {
        assert!(Cli::try_parse_from(["greatcircle", "distance", "95,0", "0,0"]).is_err());
        assert!(Cli::try_parse_from(["greatcircle", "distance", "north", "0,0"]).is_err());
    }

    #[test]
    fn test_parse_config_subcommand() {
        let cli = Cli::try_parse_from(["greatcircle", "config", "path"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Config {
                command: ConfigCommands::Path
            }
        ));
    }
}
