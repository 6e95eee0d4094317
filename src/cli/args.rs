//! Command-line argument definitions
//!
//! This module defines all CLI arguments and subcommands using clap.

use crate::palette::ThemeMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Generate, inspect and edit Material Design 3 color themes
#[derive(Parser, Debug)]
#[command(name = "theme-studio")]
#[command(version)]
#[command(about = "Generate, inspect and edit Material Design 3 color themes from a seed color", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level: error, warn, info, debug, trace (overrides config)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a theme document from a seed color
    Generate {
        /// Seed color (#RGB or #RRGGBB); defaults to the configured seed
        #[arg(short, long)]
        seed: Option<String>,

        /// Theme name stored in the document
        #[arg(short, long)]
        name: Option<String>,

        /// Write the JSON document to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit compact JSON regardless of the config
        #[arg(long)]
        compact: bool,
    },

    /// Show a color in RGB, HSV, HSL and approximate HCT
    Convert {
        /// Color as #RRGGBB (the # is optional)
        color: String,
    },

    /// Check whether values are valid hex colors
    Validate {
        /// Values to check
        #[arg(required = true)]
        values: Vec<String>,
    },

    /// List the colors of a saved theme document
    Inspect {
        /// Theme document (JSON)
        file: PathBuf,

        /// Which scheme to list
        #[arg(short, long, default_value = "light")]
        mode: ThemeMode,
    },

    /// Change one scheme role or extended token in a saved theme document
    Set {
        /// Theme document (JSON)
        file: PathBuf,

        /// Role (e.g. primaryContainer) or extended token (e.g. tagBlueText)
        token: String,

        /// New color (#RGB or #RRGGBB)
        color: String,

        /// Scheme that a role name applies to
        #[arg(short, long, default_value = "light")]
        mode: ThemeMode,
    },

    /// Regenerate every color of a saved theme document from a new seed
    Regenerate {
        /// Theme document (JSON)
        file: PathBuf,

        /// New seed color
        #[arg(short, long)]
        seed: String,
    },

    /// Show or reset the configuration file
    ///
    /// The config file is stored at:
    /// - Windows: %APPDATA%\theme_studio\config.toml
    /// - Linux/macOS: ~/.config/theme_studio/config.toml
    Config {
        /// Show the config file path
        #[arg(long)]
        path: bool,

        /// Reset config to defaults (creates a fresh config file)
        #[arg(long)]
        reset: bool,
    },

    /// Generate a configuration file at a specific location
    GenerateConfig {
        /// Output path for the config file (defaults to standard location)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show current configuration
    ShowConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let args = Args::parse_from(["theme-studio", "generate", "--seed", "#FF0000", "--compact"]);
        match args.command {
            Commands::Generate { seed, compact, output, .. } => {
                assert_eq!(seed.as_deref(), Some("#FF0000"));
                assert!(compact);
                assert!(output.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_set_with_mode_and_global_flags() {
        let args = Args::parse_from([
            "theme-studio",
            "set",
            "theme.json",
            "primary",
            "#123456",
            "--mode",
            "dark",
            "--log-level",
            "debug",
        ]);
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        match args.command {
            Commands::Set { token, mode, .. } => {
                assert_eq!(token, "primary");
                assert_eq!(mode, ThemeMode::Dark);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_validate_requires_values() {
        assert!(Args::try_parse_from(["theme-studio", "validate"]).is_err());
    }
}
