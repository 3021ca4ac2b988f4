//! Configuration file handling for asciify.
//!
//! Loads configuration from `~/.config/asciify/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration file structure for asciify.
/// Loaded from ~/.config/asciify/config.toml (or custom path via --config).
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub conversion: ConversionConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

#[derive(Debug, Deserialize)]
pub struct ConversionConfig {
    /// Block width in pixels (walks the image's vertical axis)
    #[serde(default = "default_block_dim")]
    pub block_width: u32,
    /// Block height in pixels (walks the image's horizontal axis)
    #[serde(default = "default_block_dim")]
    pub block_height: u32,
    /// Pre-scale for text output, post-scale for art output
    #[serde(default = "default_scale")]
    pub scale: f64,
    /// Palette name: complex, simple
    #[serde(default)]
    pub charset: Option<String>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        ConversionConfig {
            block_width: default_block_dim(),
            block_height: default_block_dim(),
            scale: default_scale(),
            charset: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RenderConfig {
    /// Font file (TTF/OTF) used when rendering art output
    #[serde(default)]
    pub font: Option<PathBuf>,
    /// Font size in pixels
    #[serde(default = "default_font_size")]
    pub font_size: f32,
    /// Foreground color as RRGGBB hex
    #[serde(default)]
    pub color: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            font: None,
            font_size: default_font_size(),
            color: None,
        }
    }
}

fn default_block_dim() -> u32 {
    8
}

fn default_scale() -> f64 {
    1.0
}

fn default_font_size() -> f32 {
    16.0
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
                path: path.clone(),
                source: e,
            })?;
            let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.clone(),
                source: e,
            })?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }
}

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
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("asciify").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/asciify/config.toml")
        })
}
