//! Configuration CLI commands.
//!
//! Provides `config list` and `config path` for inspecting the effective
//! settings from the command line.

use clap::Subcommand;

use crate::config::{config_file_path, ConfigFile};
use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum ConfigCommands {
    /// List effective configuration settings
    List,

    /// Show the configuration file path
    Path,
}

/// Run a config subcommand.
pub fn run(command: &ConfigCommands, config: &ConfigFile) -> Result<(), CliError> {
    match command {
        ConfigCommands::List => {
            println!("{}", format_list(config));
            Ok(())
        }
        ConfigCommands::Path => {
            println!("{}", config_file_path().display());
            Ok(())
        }
    }
}

/// Format settings grouped by INI section.
fn format_list(config: &ConfigFile) -> String {
    let mut lines = vec![
        "Configuration Settings".to_string(),
        "======================".to_string(),
    ];
    let mut current_section = "";

    for (section, key, value) in config.entries() {
        // Print section header when section changes
        if section != current_section {
            lines.push(String::new());
            lines.push(format!("[{}]", section));
            current_section = section;
        }

        if value.is_empty() {
            lines.push(format!("  {} = (not set)", key));
        } else {
            lines.push(format!("  {} = {}", key, value));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_list_defaults() {
        let listing = format_list(&ConfigFile::default());

        assert!(listing.contains("[display]"));
        assert!(listing.contains("  unit = km"));
        assert!(listing.contains("  precision = 2"));
        assert!(listing.contains("[logging]"));
        assert!(listing.contains("  level = (not set)"));
    }

    #[test]
    fn test_format_list_sections_once() {
        let listing = format_list(&ConfigFile::default());
        assert_eq!(listing.matches("[display]").count(), 1);
        assert_eq!(listing.matches("[logging]").count(), 1);
    }
}
