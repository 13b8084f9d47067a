//! Configuration file support for rastersketch.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/rastersketch/config.toml`. Settings include drawing defaults,
//! transform amounts, selection appearance, and canvas size.
//!
//! If no config file exists, defaults are used automatically.

pub mod enums;
pub mod types;

/// Largest canvas width or height accepted from the config file or the CLI.
pub const MAX_CANVAS_DIMENSION: u32 = 8192;

// Re-export commonly used types at module level
pub use enums::{ColorSpec, FillStyle};
pub use types::{CanvasConfig, DrawingConfig, SelectionConfig, TransformConfig};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// Every field has a default that is used when it is not specified.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "#1e3a8a"
/// default_stroke_width = 2
/// default_fill = "solid"
///
/// [transform]
/// move_offset = 10.0
/// scale_factor = 1.2
/// rotate_degrees = 15.0
///
/// [selection]
/// margin = 4.0
/// color = "red"
/// dash = [5.0, 3.0]
///
/// [canvas]
/// width = 800
/// height = 600
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Defaults for newly drawn shapes
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Move/scale/rotate amounts
    #[serde(default)]
    pub transform: TransformConfig,

    /// Selection outline and hit testing
    #[serde(default)]
    pub selection: SelectionConfig,

    /// Canvas size and limits
    #[serde(default)]
    pub canvas: CanvasConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_stroke_width`: 1 - 50
    /// - `scale_factor`: 0.1 - 10.0
    /// - `rotate_degrees`: -360.0 - 360.0
    /// - `hit_padding`: 0.0 - 50.0
    /// - `margin`: 0.0 - 100.0
    /// - `ellipse_tolerance`: 0.0 - 1.0
    /// - canvas `width`/`height`: 1 - [`MAX_CANVAS_DIMENSION`]
    fn validate_and_clamp(&mut self) {
        if !(1..=50).contains(&self.drawing.default_stroke_width) {
            warn!(
                "Invalid default_stroke_width {}, clamping to 1-50 range",
                self.drawing.default_stroke_width
            );
            self.drawing.default_stroke_width = self.drawing.default_stroke_width.clamp(1, 50);
        }

        if !self.transform.move_offset.is_finite() {
            warn!("Invalid move_offset, falling back to 10.0");
            self.transform.move_offset = 10.0;
        }

        if !(0.1..=10.0).contains(&self.transform.scale_factor) {
            warn!(
                "Invalid scale_factor {:.2}, clamping to 0.1-10.0 range",
                self.transform.scale_factor
            );
            self.transform.scale_factor = if self.transform.scale_factor.is_nan() {
                1.2
            } else {
                self.transform.scale_factor.clamp(0.1, 10.0)
            };
        }

        if !(-360.0..=360.0).contains(&self.transform.rotate_degrees) {
            warn!(
                "Invalid rotate_degrees {:.1}°, clamping to -360-360° range",
                self.transform.rotate_degrees
            );
            self.transform.rotate_degrees = if self.transform.rotate_degrees.is_nan() {
                15.0
            } else {
                self.transform.rotate_degrees.clamp(-360.0, 360.0)
            };
        }

        if !(0.0..=50.0).contains(&self.selection.hit_padding) {
            warn!(
                "Invalid hit_padding {:.1}, clamping to 0-50 range",
                self.selection.hit_padding
            );
            self.selection.hit_padding = if self.selection.hit_padding.is_nan() {
                2.0
            } else {
                self.selection.hit_padding.clamp(0.0, 50.0)
            };
        }

        if !(0.0..=100.0).contains(&self.selection.margin) {
            warn!(
                "Invalid selection margin {:.1}, clamping to 0-100 range",
                self.selection.margin
            );
            self.selection.margin = if self.selection.margin.is_nan() {
                4.0
            } else {
                self.selection.margin.clamp(0.0, 100.0)
            };
        }

        if !(0.0..=1.0).contains(&self.selection.ellipse_tolerance) {
            warn!(
                "Invalid ellipse_tolerance {:.3}, clamping to 0.0-1.0 range",
                self.selection.ellipse_tolerance
            );
            self.selection.ellipse_tolerance = if self.selection.ellipse_tolerance.is_nan() {
                0.2
            } else {
                self.selection.ellipse_tolerance.clamp(0.0, 1.0)
            };
        }

        if self.selection.dash.iter().any(|d| !d.is_finite() || *d < 0.0) {
            warn!(
                "Invalid selection dash {:?}, falling back to a solid outline",
                self.selection.dash
            );
            self.selection.dash.clear();
        }

        for (name, value) in [
            ("width", &mut self.canvas.width),
            ("height", &mut self.canvas.height),
        ] {
            if !(1..=MAX_CANVAS_DIMENSION).contains(&*value) {
                warn!(
                    "Invalid canvas {name} {}, clamping to 1-{MAX_CANVAS_DIMENSION} range",
                    *value
                );
                *value = (*value).clamp(1, MAX_CANVAS_DIMENSION);
            }
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/rastersketch/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("rastersketch");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default path, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `path`, or returns defaults if the file does not exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or is not valid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config = Self::from_toml_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(source)?;
        config.validate_and_clamp();
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, Color, FillMode, RED};

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.drawing.color(), BLACK);
        assert_eq!(config.drawing.default_stroke_width, 1);
        assert_eq!(FillMode::from(config.drawing.default_fill), FillMode::None);
        let settings = config.transform.settings();
        assert_eq!(settings.move_offset, 10.0);
        assert_eq!(settings.scale_factor, 1.2);
        assert_eq!(settings.rotate_degrees, 15.0);
        assert_eq!(config.selection.margin, 4.0);
        assert_eq!(config.selection.stroke_style().color, RED);
        assert_eq!(config.selection.hit_tolerance().padding, 2.0);
        assert_eq!(config.selection.hit_tolerance().ellipse, 0.2);
        assert_eq!((config.canvas.width, config.canvas.height), (800, 600));
    }

    #[test]
    fn parses_partial_sections() {
        let config = Config::from_toml_str(
            r##"
            [drawing]
            default_color = "#336699"
            default_fill = "solid"

            [transform]
            rotate_degrees = 45.0
            "##,
        )
        .unwrap();
        assert_eq!(config.drawing.color(), Color::new(0x33, 0x66, 0x99));
        assert_eq!(FillMode::from(config.drawing.default_fill), FillMode::Solid);
        assert_eq!(config.transform.rotate_degrees, 45.0);
        assert_eq!(config.transform.scale_factor, 1.2);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config::from_toml_str(
            r#"
            [drawing]
            default_stroke_width = 0

            [transform]
            scale_factor = 50.0

            [selection]
            ellipse_tolerance = 3.0
            dash = [4.0, -1.0]

            [canvas]
            width = 100000
            "#,
        )
        .unwrap();
        assert_eq!(config.drawing.default_stroke_width, 1);
        assert_eq!(config.transform.scale_factor, 10.0);
        assert_eq!(config.selection.ellipse_tolerance, 1.0);
        assert!(config.selection.dash.is_empty());
        assert_eq!(config.canvas.width, 8192);
    }

    #[test]
    fn selection_margin_is_validated() {
        let config = Config::from_toml_str("[selection]\nmargin = -3.0\n").unwrap();
        assert_eq!(config.selection.margin, 0.0);

        let config = Config::from_toml_str("[selection]\nmargin = nan\n").unwrap();
        assert_eq!(config.selection.margin, 4.0);

        let config = Config::from_toml_str("[selection]\nmargin = 6.5\n").unwrap();
        assert_eq!(config.selection.margin, 6.5);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(Config::from_toml_str("[drawing\nfoo").is_err());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.canvas.width, 800);
    }

    #[test]
    fn load_from_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[canvas]\nheight = 240\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.canvas.height, 240);
    }
}
