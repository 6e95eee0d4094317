//! Command handler implementations
//!
//! This module contains the implementation of all CLI commands.

use crate::cli::output::{format_token_line, print_header, print_section};
use crate::cli::{Args, Commands};
use crate::color::{hex_to_rgb, normalize_hex, rgb_to_hct, rgb_to_hsl, rgb_to_hsv};
use crate::core::config::{get_config_path, init_config, Config};
use crate::palette::{ThemeDocument, ThemeMode};
use anyhow::{bail, Context, Result};
use log::{debug, info};
use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

/// Run the appropriate command based on CLI arguments
pub fn run_command(args: &Args, config: &Config) -> Result<()> {
    match &args.command {
        Commands::Generate {
            seed,
            name,
            output,
            compact,
        } => generate_theme(config, seed.as_deref(), name.as_deref(), output.as_deref(), *compact),
        Commands::Convert { color } => convert_color(color),
        Commands::Validate { values } => {
            validate_colors(values);
            Ok(())
        }
        Commands::Inspect { file, mode } => inspect_theme(file, *mode),
        Commands::Set {
            file,
            token,
            color,
            mode,
        } => set_token(config, file, token, color, *mode),
        Commands::Regenerate { file, seed } => regenerate_theme(config, file, seed),
        Commands::Config { path, reset } => handle_config_command(*path, *reset),
        Commands::GenerateConfig { output } => generate_config_file(output.clone()),
        Commands::ShowConfig => {
            show_config(config);
            Ok(())
        }
    }
}

/// Generate a theme document and write it to a file or stdout
pub fn generate_theme(
    config: &Config,
    seed: Option<&str>,
    name: Option<&str>,
    output: Option<&Path>,
    compact: bool,
) -> Result<()> {
    let seed = match seed {
        Some(seed) => seed.to_string(),
        None => {
            debug!("No --seed given, using configured default");
            config.generator.default_seed.clone()
        }
    };

    let name = name.unwrap_or(&config.generator.document_name);
    let document = ThemeDocument::from_seed(name, &seed);
    let pretty = config.output.pretty && !compact;

    match output {
        Some(path) => {
            let path = config.output.resolve(path);
            document
                .save(&path, pretty)
                .with_context(|| format!("Failed to write theme to {}", path.display()))?;
            info!(
                "Generated '{}' from {} -> {}",
                document.name,
                document.seed,
                path.display()
            );
        }
        None => println!("{}", document.to_json(pretty)?),
    }

    Ok(())
}

/// Print every representation of one color
pub fn convert_color(color: &str) -> Result<()> {
    let normalized = normalize_hex(color).ok();
    let rgb = normalized
        .as_ref()
        .and_then(|hex| hex_to_rgb(hex.as_str()))
        .or_else(|| hex_to_rgb(color));
    let Some(rgb) = rgb else {
        bail!("'{}' is not a valid hex color (expected #RRGGBB)", color);
    };

    let hsv = rgb_to_hsv(rgb);
    let hsl = rgb_to_hsl(rgb);
    let hct = rgb_to_hct(rgb);

    println!("hex  {}", rgb.to_hex());
    println!("rgb  {} {} {}", rgb.r, rgb.g, rgb.b);
    println!("hsv  {} {}% {}%", hsv.h, hsv.s, hsv.v);
    println!("hsl  {:.1} {:.1}% {:.1}%", hsl.h, hsl.s, hsl.l);
    println!("hct  {} {} {}  (approximate)", hct.h, hct.c, hct.t);
    Ok(())
}

/// Report validity and normalized form for each value
pub fn validate_colors(values: &[String]) {
    for value in values {
        match normalize_hex(value) {
            Ok(hex) => println!("{:<12} valid    {}", value, hex.to_lowercase()),
            Err(_) => println!("{:<12} invalid", value),
        }
    }
}

/// List the roles and extended tokens of a saved document
pub fn inspect_theme(file: &Path, mode: ThemeMode) -> Result<()> {
    let document = ThemeDocument::load(file)
        .with_context(|| format!("Failed to load theme from {}", file.display()))?;
    let swatches = std::io::stdout().is_terminal();

    print_header(&format!("{} ({})", document.name, mode));
    println!("  seed {}", document.seed);

    print_section("Scheme");
    for (role, color) in document.scheme(mode).roles() {
        println!("{}", format_token_line(role, color, swatches));
    }

    print_section("Extended");
    for token in &document.extended {
        println!("{}", format_token_line(&token.name, &token.color, swatches));
    }

    Ok(())
}

/// Edit one token in a saved document
pub fn set_token(
    config: &Config,
    file: &Path,
    token: &str,
    color: &str,
    mode: ThemeMode,
) -> Result<()> {
    let mut document = ThemeDocument::load(file)
        .with_context(|| format!("Failed to load theme from {}", file.display()))?;

    document
        .set_token(mode, token, color)
        .with_context(|| format!("Cannot set '{}'", token))?;
    document.save(file, config.output.pretty)?;

    info!("Set {} = {} in {}", token, color, file.display());
    Ok(())
}

/// Replace all colors of a saved document from a new seed
pub fn regenerate_theme(config: &Config, file: &Path, seed: &str) -> Result<()> {
    let mut document = ThemeDocument::load(file)
        .with_context(|| format!("Failed to load theme from {}", file.display()))?;

    document.regenerate(seed);
    document.save(file, config.output.pretty)?;
    Ok(())
}

/// Show the config path, reset it, or print its contents
pub fn handle_config_command(show_path: bool, reset: bool) -> Result<()> {
    if reset {
        if let Some(config_path) = get_config_path() {
            if config_path.exists() {
                fs::remove_file(&config_path)?;
                info!("Removed existing config file");
            }
        }
        let path = init_config()?;
        info!("Created fresh config file at: {}", path.display());
        return Ok(());
    }

    let path = Config::get_active_config_path();
    if show_path {
        println!("{}", path.display());
        return Ok(());
    }

    if path.exists() {
        info!("Config file: {}", path.display());
        print!("{}", fs::read_to_string(&path)?);
    } else {
        info!("No config file yet; it would be created at: {}", path.display());
        info!("Run 'theme-studio config --reset' to create one.");
    }

    Ok(())
}

/// Generate a configuration file at the specified or default location
pub fn generate_config_file(output: Option<PathBuf>) -> Result<()> {
    let output_path = match output {
        Some(path) => {
            fs::write(&path, Config::generate_default_config())?;
            path
        }
        None => init_config()?,
    };

    info!("Configuration file: {}", output_path.display());
    info!("Edit this file to customize theme generation.");
    Ok(())
}

/// Show the current configuration settings
pub fn show_config(config: &Config) {
    let config_path = Config::get_active_config_path();
    info!("Configuration file: {}", config_path.display());
    if !config_path.exists() {
        info!("(Using default settings - no config file found)");
    }

    let seed_note = match config.generator.seed() {
        Some(seed) => seed.to_lowercase().to_string(),
        None => "invalid, generation falls back to #6750a4".to_string(),
    };

    println!("[generator]");
    println!("  default_seed = \"{}\" ({})", config.generator.default_seed, seed_note);
    println!("  document_name = \"{}\"", config.generator.document_name);
    println!();
    println!("[output]");
    println!("  pretty = {}", config.output.pretty);
    println!("  directory = \"{}\"", config.output.directory.display());
    println!();
    println!("[logging]");
    println!("  level = \"{}\"", config.logging.level);
    println!("  log_to_file = {}", config.logging.log_to_file);
    println!("  log_file = \"{}\"", config.logging.log_file.display());
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_generate_writes_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("theme.json");
        let config = Config::default();

        generate_theme(&config, Some("#FF0000"), Some("Red"), Some(path.as_path()), true).unwrap();

        let document = ThemeDocument::load(&path).unwrap();
        assert_eq!(document.name, "Red");
        assert_eq!(document.seed.as_str(), "#ff0000");
        assert!(!fs::read_to_string(&path).unwrap().contains('\n'));
    }

    #[test]
    fn test_generate_uses_configured_seed_and_directory() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.generator.default_seed = "#00FF00".to_string();
        config.generator.document_name = "Greens".to_string();
        config.output.directory = dir.path().to_path_buf();

        generate_theme(&config, None, None, Some(Path::new("out.json")), false).unwrap();

        let document = ThemeDocument::load(dir.path().join("out.json")).unwrap();
        assert_eq!(document.name, "Greens");
        assert_eq!(document.light.primary.as_str(), "#00ff00");
    }

    #[test]
    fn test_generate_invalid_seed_falls_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fallback.json");
        let config = Config::default();

        generate_theme(&config, Some("not-a-color"), None, Some(path.as_path()), false).unwrap();

        let document = ThemeDocument::load(&path).unwrap();
        assert_eq!(document.seed.as_str(), "#6750a4");
        assert_eq!(document, ThemeDocument::from_seed("Custom Theme", "#6750A4"));
    }

    #[test]
    fn test_set_and_regenerate_edit_file_in_place() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("theme.json");
        let config = Config::default();
        ThemeDocument::from_seed("Brand", "#6750A4")
            .save(&path, true)
            .unwrap();

        set_token(&config, &path, "primaryContainer", "#010203", ThemeMode::Dark).unwrap();
        let edited = ThemeDocument::load(&path).unwrap();
        assert_eq!(edited.dark.primary_container.as_str(), "#010203");

        assert!(set_token(&config, &path, "nope", "#010203", ThemeMode::Light).is_err());

        regenerate_theme(&config, &path, "#6750A4").unwrap();
        let regenerated = ThemeDocument::load(&path).unwrap();
        assert_eq!(regenerated, ThemeDocument::from_seed("Brand", "#6750A4"));
    }

    #[test]
    fn test_convert_rejects_invalid() {
        assert!(convert_color("#ff0000").is_ok());
        assert!(convert_color("#f00").is_ok());
        assert!(convert_color("nope").is_err());
    }

    #[test]
    fn test_inspect_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        assert!(inspect_theme(&dir.path().join("missing.json"), ThemeMode::Light).is_err());
    }
}
