//! Configuration module for the theme toolkit
//!
//! Supports loading configuration from a TOML file.
//! Configuration is stored in a standard location:
//! - Windows: %APPDATA%\theme_studio\config.toml
//! - Linux/macOS: ~/.config/theme_studio/config.toml

use crate::color::{is_valid_hex, HexColor};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application name used for config directory
const APP_NAME: &str = "theme_studio";

/// Default config file name
const CONFIG_FILE_NAME: &str = "config.toml";

/// Config files checked in the current directory before the standard location
const LOCAL_CONFIG_PATHS: [&str; 2] = ["./theme_studio.toml", "./config.toml"];

/// Get the standard configuration directory for the application.
///
/// Returns:
/// - Windows: %APPDATA%\theme_studio
/// - Linux/macOS: ~/.config/theme_studio
pub fn get_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_NAME))
    }

    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".config").join(APP_NAME))
    }
}

/// Get the standard configuration file path.
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}

/// Ensure the configuration directory exists.
pub fn ensure_config_dir() -> Result<PathBuf, ConfigError> {
    let config_dir = get_config_dir().ok_or(ConfigError::ConfigDirNotFound)?;

    if !config_dir.exists() {
        fs::create_dir_all(&config_dir)
            .map_err(|e| ConfigError::WriteError(config_dir.clone(), e.to_string()))?;
    }

    Ok(config_dir)
}

/// Initialize the configuration file if it doesn't exist.
///
/// Creates the config directory and writes the default config template.
/// Returns the path to the config file.
pub fn init_config() -> Result<PathBuf, ConfigError> {
    let config_dir = ensure_config_dir()?;
    let config_path = config_dir.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        fs::write(&config_path, Config::generate_default_config())
            .map_err(|e| ConfigError::WriteError(config_path.clone(), e.to_string()))?;
    }

    Ok(config_path)
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Palette generation settings
    pub generator: GeneratorConfig,

    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Palette generation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Seed used when none is given on the command line
    pub default_seed: String,

    /// Name given to newly generated theme documents
    pub document_name: String,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON documents
    pub pretty: bool,

    /// Directory that relative output paths are resolved against
    /// (empty = current directory)
    pub directory: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log to file
    pub log_to_file: bool,

    /// Log file path
    pub log_file: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            default_seed: "#6750A4".to_string(),
            document_name: "Custom Theme".to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            directory: PathBuf::new(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_to_file: false,
            log_file: PathBuf::from("theme_studio.log"),
        }
    }
}

impl GeneratorConfig {
    /// The configured seed, if it is a valid color
    ///
    /// An invalid seed is still usable (generation falls back to the
    /// default purple), so this only warns.
    pub fn seed(&self) -> Option<HexColor> {
        if !is_valid_hex(&self.default_seed) {
            warn!(
                "Configured default_seed '{}' is not a valid hex color",
                self.default_seed
            );
        }
        HexColor::parse(&self.default_seed).ok()
    }
}

impl OutputConfig {
    /// Resolve an output path against the configured directory
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() || self.directory.as_os_str().is_empty() {
            path.to_path_buf()
        } else {
            self.directory.join(path)
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_path_buf(), e.to_string()))?;

        Self::from_toml(&content).map_err(|e| match e {
            ConfigError::ParseError(_, message) => ConfigError::ParseError(path.to_path_buf(), message),
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(PathBuf::new(), e.to_string()))
    }

    /// Load configuration from default locations
    ///
    /// Search order:
    /// 1. ./theme_studio.toml
    /// 2. ./config.toml
    /// 3. Standard config location
    ///
    /// If no config file is found, returns default configuration.
    pub fn load_default() -> Result<Self, ConfigError> {
        for path in LOCAL_CONFIG_PATHS.into_iter().map(PathBuf::from) {
            if path.exists() {
                return Self::load(&path);
            }
        }

        if let Some(config_path) = get_config_path() {
            if config_path.exists() {
                return Self::load(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Get the path where the config file is (or would be) located.
    pub fn get_active_config_path() -> PathBuf {
        for path in LOCAL_CONFIG_PATHS.into_iter().map(PathBuf::from) {
            if path.exists() {
                return path;
            }
        }

        get_config_path().unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_PATHS[0]))
    }

    /// Save configuration to a TOML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        fs::write(path.as_ref(), content)
            .map_err(|e| ConfigError::WriteError(path.as_ref().to_path_buf(), e.to_string()))?;

        Ok(())
    }

    /// Generate a default config file with comments
    pub fn generate_default_config() -> String {
        include_str!("../../config.example.toml").to_string()
    }
}

/// Configuration error types
#[derive(Debug)]
pub enum ConfigError {
    /// Configuration file was not found at the specified path
    FileNotFound(PathBuf),
    /// Failed to read the configuration file
    ReadError(PathBuf, String),
    /// Failed to parse the configuration file (invalid TOML)
    ParseError(PathBuf, String),
    /// Failed to serialize configuration to TOML
    SerializeError(String),
    /// Failed to write configuration file
    WriteError(PathBuf, String),
    /// Could not determine config directory
    ConfigDirNotFound,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => {
                write!(f, "Configuration file not found: {}", path.display())
            }
            ConfigError::ReadError(path, err) => {
                write!(f, "Failed to read config file '{}': {}", path.display(), err)
            }
            ConfigError::ParseError(path, err) => {
                write!(f, "Failed to parse config file '{}': {}", path.display(), err)
            }
            ConfigError::SerializeError(err) => {
                write!(f, "Failed to serialize configuration: {}", err)
            }
            ConfigError::WriteError(path, err) => {
                write!(f, "Failed to write config file '{}': {}", path.display(), err)
            }
            ConfigError::ConfigDirNotFound => {
                write!(f, "Could not determine configuration directory")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
