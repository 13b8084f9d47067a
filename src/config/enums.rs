//! Configuration enum types.

use crate::draw::{Color, FillMode, color::*};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - a named color, a hex string, or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// default_color = "red"
///
/// # Hex color
/// default_color = "#3c6e91"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (red, green, blue, yellow, orange, pink, white, black) or `#rrggbb`/`#rgb`
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`].
    ///
    /// Names are tried first, then hex. Anything else falls back to `fallback`
    /// with a warning.
    pub fn to_color_or(&self, fallback: Color) -> Color {
        match self {
            ColorSpec::Name(name) => name_to_color(name)
                .or_else(|| Color::from_hex(name).ok())
                .unwrap_or_else(|| {
                    warn!("Unknown color '{}', using {}", name, fallback.to_hex());
                    fallback
                }),
            ColorSpec::Rgb([r, g, b]) => Color::new(*r, *g, *b),
        }
    }
}

/// Interior fill setting for new circles and ellipses.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum FillStyle {
    /// Outline only
    None,
    /// Solid interior
    Solid,
}

impl From<FillStyle> for FillMode {
    fn from(style: FillStyle) -> Self {
        match style {
            FillStyle::None => FillMode::None,
            FillStyle::Solid => FillMode::Solid,
        }
    }
}
