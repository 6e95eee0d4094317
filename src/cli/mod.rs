//! CLI module for the theme toolkit
//!
//! This module contains all command-line interface related code including
//! argument parsing, command definitions, and command handlers.
//!
//! # Submodules
//!
//! - `args` - Command-line argument definitions using clap
//! - `commands` - Command handler implementations
//! - `output` - Swatch formatting and the log file tee

pub mod args;
pub mod commands;
pub mod output;

pub use args::{Args, Commands};
pub use commands::run_command;
pub use output::DualWriter;
