//! Configuration type definitions.

use super::enums::{ColorSpec, FillStyle};
use crate::draw::{Color, HitTolerance, RED, StrokeStyle, TransformSettings, WHITE};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the color, stroke, and fill of newly drawn shapes.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default shape color - a named color, a hex string like `"#ff8000"`,
    /// or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default outline thickness in pixels (valid range: 1 - 50)
    #[serde(default = "default_stroke_width")]
    pub default_stroke_width: u32,

    /// Fill for new circles and ellipses ("none" or "solid")
    #[serde(default = "default_fill")]
    pub default_fill: FillStyle,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_stroke_width: default_stroke_width(),
            default_fill: default_fill(),
        }
    }
}

impl DrawingConfig {
    /// Resolved default color (black when the spec is unrecognized).
    pub fn color(&self) -> Color {
        self.default_color.to_color_or(crate::draw::BLACK)
    }
}

/// Amounts applied by the move/scale/rotate tools.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct TransformConfig {
    /// Offset in pixels added to both axes per move click
    #[serde(default = "default_move_offset")]
    pub move_offset: f64,

    /// Factor applied per scale click (valid range: 0.1 - 10.0)
    #[serde(default = "default_scale_factor")]
    pub scale_factor: f64,

    /// Degrees rotated per rotate click (valid range: -360 - 360)
    #[serde(default = "default_rotate_degrees")]
    pub rotate_degrees: f64,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            move_offset: default_move_offset(),
            scale_factor: default_scale_factor(),
            rotate_degrees: default_rotate_degrees(),
        }
    }
}

impl TransformConfig {
    pub fn settings(&self) -> TransformSettings {
        TransformSettings {
            move_offset: self.move_offset,
            scale_factor: self.scale_factor,
            rotate_degrees: self.rotate_degrees,
        }
    }
}

/// Selection highlight and hit-testing settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SelectionConfig {
    /// Gap in pixels between a shape's extent and its selection outline
    #[serde(default = "default_selection_margin")]
    pub margin: f64,

    /// Outline color
    #[serde(default = "default_selection_color")]
    pub color: ColorSpec,

    /// Dash pattern as alternating on/off lengths in pixels (empty = solid)
    #[serde(default = "default_selection_dash")]
    pub dash: Vec<f64>,

    /// Pixels added to the stroke width when hit testing lines and circles (valid range: 0 - 50)
    #[serde(default = "default_hit_padding")]
    pub hit_padding: f64,

    /// Normalized hit tolerance for ellipses (valid range: 0.0 - 1.0)
    #[serde(default = "default_ellipse_tolerance")]
    pub ellipse_tolerance: f64,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            margin: default_selection_margin(),
            color: default_selection_color(),
            dash: default_selection_dash(),
            hit_padding: default_hit_padding(),
            ellipse_tolerance: default_ellipse_tolerance(),
        }
    }
}

impl SelectionConfig {
    pub fn stroke_style(&self) -> StrokeStyle {
        StrokeStyle {
            color: self.color.to_color_or(RED),
            width: 1,
            dash: self.dash.clone(),
        }
    }

    pub fn hit_tolerance(&self) -> HitTolerance {
        HitTolerance {
            padding: self.hit_padding,
            ellipse: self.ellipse_tolerance,
        }
    }
}

/// Canvas dimensions and limits.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas width in pixels (valid range: 1 - 8192)
    #[serde(default = "default_canvas_width")]
    pub width: u32,

    /// Canvas height in pixels (valid range: 1 - 8192)
    #[serde(default = "default_canvas_height")]
    pub height: u32,

    /// Background color painted by a clear
    #[serde(default = "default_background")]
    pub background: ColorSpec,

    /// Maximum number of shapes on the canvas (0 = unlimited)
    #[serde(default)]
    pub max_shapes: usize,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
            background: default_background(),
            max_shapes: 0,
        }
    }
}

impl CanvasConfig {
    pub fn background_color(&self) -> Color {
        self.background.to_color_or(WHITE)
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_stroke_width() -> u32 {
    1
}

fn default_fill() -> FillStyle {
    FillStyle::None
}

fn default_move_offset() -> f64 {
    10.0
}

fn default_scale_factor() -> f64 {
    1.2
}

fn default_rotate_degrees() -> f64 {
    15.0
}

fn default_selection_margin() -> f64 {
    4.0
}

fn default_selection_color() -> ColorSpec {
    ColorSpec::Name("red".to_string())
}

fn default_selection_dash() -> Vec<f64> {
    vec![5.0, 3.0]
}

fn default_hit_padding() -> f64 {
    crate::draw::hit_test::DEFAULT_HIT_PADDING
}

fn default_ellipse_tolerance() -> f64 {
    crate::draw::hit_test::DEFAULT_ELLIPSE_TOLERANCE
}

fn default_canvas_width() -> u32 {
    800
}

fn default_canvas_height() -> u32 {
    600
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}
