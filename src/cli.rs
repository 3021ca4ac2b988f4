//! Command-line interface definitions and helpers.
//!
//! This module contains all CLI argument parsing, enums, and subcommand handlers.

use clap::{Parser, Subcommand, ValueEnum};
use image::Rgba;
use std::path::PathBuf;

use crate::config::default_path as get_config_path;
use crate::palette::Palette;
use crate::region::BlockSize;

// ==================== CLI Enums ====================

/// Character palette for ASCII conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CharacterSet {
    #[default]
    Complex,
    Simple,
}

impl From<CharacterSet> for Palette {
    fn from(c: CharacterSet) -> Self {
        match c {
            CharacterSet::Complex => Palette::Complex,
            CharacterSet::Simple => Palette::Simple,
        }
    }
}

// ==================== Value Parsers ====================

/// Parse and validate a block size (WIDTHxHEIGHT format)
pub fn parse_block_size(s: &str) -> Result<BlockSize, String> {
    let parts: Vec<&str> = s.split('x').collect();
    if parts.len() != 2 {
        return Err(format!(
            "Invalid block size format '{}'. Use WIDTHxHEIGHT (e.g., 8x8)",
            s
        ));
    }
    let width: u32 = parts[0]
        .parse()
        .map_err(|_| format!("Invalid width '{}' in block size", parts[0]))?;
    let height: u32 = parts[1]
        .parse()
        .map_err(|_| format!("Invalid height '{}' in block size", parts[1]))?;
    BlockSize::new(width, height).map_err(|e| e.to_string())
}

/// Parse and validate a scale factor (positive, finite)
pub fn parse_scale_factor(s: &str) -> Result<f64, String> {
    let factor: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if !factor.is_finite() || factor <= 0.0 {
        return Err(format!(
            "Scale factor must be a positive finite number, got {}",
            factor
        ));
    }
    Ok(factor)
}

/// Parse and validate a font size in pixels (positive, finite)
pub fn parse_font_size(s: &str) -> Result<f32, String> {
    let px: f32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if !px.is_finite() || px <= 0.0 {
        return Err(format!("Font size must be positive, got {}", px));
    }
    Ok(px)
}

/// Parse a foreground color (RRGGBB or RRGGBBAA hex, optional leading '#')
pub fn parse_color(s: &str) -> Result<Rgba<u8>, String> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
        return Err(format!(
            "Invalid color '{}'. Use RRGGBB or RRGGBBAA hex",
            s
        ));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| format!("Invalid hex digits in color '{}'", s))
    };
    let r = channel(0..2)?;
    let g = channel(2..4)?;
    let b = channel(4..6)?;
    let a = if hex.len() == 8 { channel(6..8)? } else { 255 };
    Ok(Rgba([r, g, b, a]))
}

// ==================== CLI Arguments ====================

/// Convert images to ASCII art, as text or a re-rendered bitmap
#[derive(Parser, Debug)]
#[command(name = "asciify")]
#[command(version, about = "Image to ASCII art converter", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Input image path
    pub input: Option<PathBuf>,

    /// Save rendered ASCII art to this path instead of printing text
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print ASCII text even when --output is given
    #[arg(long)]
    pub text: bool,

    /// Block size as WIDTHxHEIGHT (default: 8x8, or config)
    #[arg(short, long, value_parser = parse_block_size)]
    pub block_size: Option<BlockSize>,

    /// Scale factor: pre-scale for text, post-scale for art (default: 1.0)
    #[arg(short, long, value_parser = parse_scale_factor)]
    pub scale: Option<f64>,

    /// Character palette
    #[arg(long)]
    pub charset: Option<CharacterSet>,

    /// Font file (TTF/OTF) for art rendering
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Font size in pixels (default: 16)
    #[arg(long, value_parser = parse_font_size)]
    pub font_size: Option<f32>,

    /// Foreground color as RRGGBB[AA] hex (default: FFFFFF)
    #[arg(long, value_parser = parse_color)]
    pub color: Option<Rgba<u8>>,

    /// Config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List available character palettes
    Palettes,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}

// ==================== Subcommand Handlers ====================

/// List available palettes and print them to stdout.
pub fn list_palettes() {
    println!("Available palettes:");
    for palette in [Palette::Complex, Palette::Simple] {
        let chars: String = palette.chars().iter().collect();
        println!("  {:<8} ({} glyphs): \"{}\"", palette.name(), palette.chars().len(), chars);
    }
    println!();
    println!("Use --charset <name> to select a palette.");
}

/// Handle config subcommand actions.
pub fn handle_config_action(action: ConfigAction) {
    match action {
        ConfigAction::Show => {
            println!("Current configuration:");
            println!("  Block size: 8x8");
            println!("  Scale: 1.0");
            println!("  Charset: complex");
            println!("  Font size: 16");
            println!("  Color: FFFFFF");
            println!();

            let config_path = get_config_path();
            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found)", config_path.display());
            }
        }
        ConfigAction::Init => {
            let config_path = get_config_path();

            if config_path.exists() {
                eprintln!("Config file already exists: {}", config_path.display());
                eprintln!("Use 'asciify config show' to view current settings.");
                std::process::exit(1);
            }

            // Create parent directories if needed
            if let Some(parent) = config_path.parent() {
                if let Err(e) = std::fs::create_dir_all(parent) {
                    eprintln!("Error creating config directory: {}", e);
                    std::process::exit(1);
                }
            }

            // Write default config
            let default_config = r#"# asciify configuration

[conversion]
# Block size in pixels; width walks the image's vertical axis,
# height its horizontal axis
block_width = 8
block_height = 8
# Scale factor: pre-scale for text output, post-scale for art output
scale = 1.0
# Palette: complex, simple
charset = "complex"

[render]
# Font file used for art output
# font = "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf"
# Font size in pixels
font_size = 16.0
# Foreground color as RRGGBB hex
color = "FFFFFF"
"#;

            if let Err(e) = std::fs::write(&config_path, default_config) {
                eprintln!("Error writing config file: {}", e);
                std::process::exit(1);
            }

            println!("Created config file: {}", config_path.display());
        }
    }
}
