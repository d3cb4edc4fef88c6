//! Configuration file handling for ascii-image.
//!
//! Loads configuration from `~/.config/ascii-image/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::ascii::{LineEnding, Sampling, DEFAULT_CHAR_PIXEL_WIDTH};
use crate::session::SessionSettings;

/// Display width assumed when neither a column count nor a display width
/// is given: an 800px window minus a 10px margin on each side.
pub const DEFAULT_DISPLAY_WIDTH: u32 = 780;

/// Configuration file structure for ascii-image.
/// Loaded from ~/.config/ascii-image/config.toml (or custom path via --config).
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct RenderConfig {
    /// Fixed column count; wins over `display_width` when set
    #[serde(default)]
    pub columns: Option<u32>,
    #[serde(default = "default_display_width")]
    pub display_width: u32,
    #[serde(default = "default_char_pixel_width")]
    pub char_pixel_width: u32,
    #[serde(default)]
    pub sampling: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            columns: None,
            display_width: DEFAULT_DISPLAY_WIDTH,
            char_pixel_width: DEFAULT_CHAR_PIXEL_WIDTH,
            sampling: None,
        }
    }
}

#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub line_ending: Option<String>,
}

fn default_display_width() -> u32 {
    DEFAULT_DISPLAY_WIDTH
}

fn default_char_pixel_width() -> u32 {
    DEFAULT_CHAR_PIXEL_WIDTH
}

impl Config {
    /// Load configuration from a file path, or the default path if `None`.
    ///
    /// A missing default file gives the default config. A missing file that
    /// was asked for explicitly, or any file that cannot be parsed, is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let explicit = path.is_some();
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if !path.exists() {
            if explicit {
                return Err(ConfigError::NotFound { path });
            }
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
            path: path.clone(),
            source: e,
        })?;
        let config = Self::parse(&content).map_err(|e| ConfigError::ParseError {
            path: path.clone(),
            source: e,
        })?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// The configured sampling policy, defaulting to nearest.
    pub fn sampling(&self) -> Result<Sampling, ConfigError> {
        match self.render.sampling.as_deref() {
            None => Ok(Sampling::default()),
            Some(name) => Sampling::from_name(name).ok_or_else(|| ConfigError::InvalidValue {
                key: "render.sampling",
                value: name.to_string(),
            }),
        }
    }

    /// The configured line ending, defaulting to `\n`.
    pub fn line_ending(&self) -> Result<LineEnding, ConfigError> {
        match self.output.line_ending.as_deref() {
            None => Ok(LineEnding::default()),
            Some(name) => LineEnding::from_name(name).ok_or_else(|| ConfigError::InvalidValue {
                key: "output.line_ending",
                value: name.to_string(),
            }),
        }
    }

    /// Session settings derived from this config.
    pub fn session_settings(&self) -> Result<SessionSettings, ConfigError> {
        Ok(SessionSettings {
            sampling: self.sampling()?,
            line_ending: self.line_ending()?,
        })
    }
}

/// Default config file written by `config init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# ascii-image configuration

[render]
# Fixed number of output columns (overrides display_width)
# columns = 130
# Available display width in pixels
display_width = 780
# Assumed width of one character in pixels
char_pixel_width = 6
# Sampling: nearest, average
sampling = "nearest"

[output]
# Line ending for rendered text: lf, crlf, native
line_ending = "lf"
"#;

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    NotFound {
        path: PathBuf,
    },
    InvalidValue {
        key: &'static str,
        value: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::NotFound { path } => {
                write!(f, "Config file '{}' not found", path.display())
            }
            ConfigError::InvalidValue { key, value } => {
                write!(f, "Invalid value '{}' for {}", value, key)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("ascii-image").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/ascii-image/config.toml")
        })
}
