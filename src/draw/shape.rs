//! Shape definitions for the editable canvas.

use super::color::Color;
use crate::util::Bounds;

/// How a closed shape's interior is painted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FillMode {
    /// Outline only
    #[default]
    None,
    /// Interior filled with the shape color
    Solid,
}

/// Geometric parameters of a primitive, in canvas coordinates.
///
/// Coordinates stay floating-point so that repeated transforms accumulate
/// without rounding; rasterization snaps to pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Geometry {
    /// Straight segment between two points
    Line {
        /// Starting X coordinate
        x1: f64,
        /// Starting Y coordinate
        y1: f64,
        /// Ending X coordinate
        x2: f64,
        /// Ending Y coordinate
        y2: f64,
    },
    /// Circle around a center point
    Circle {
        /// Center X coordinate
        cx: f64,
        /// Center Y coordinate
        cy: f64,
        /// Radius (negative values rasterize as zero)
        radius: f64,
    },
    /// Axis-aligned ellipse around a center point
    Ellipse {
        /// Center X coordinate
        cx: f64,
        /// Center Y coordinate
        cy: f64,
        /// Horizontal radius
        rx: f64,
        /// Vertical radius
        ry: f64,
    },
}

impl Geometry {
    /// Whether this geometry encloses an area that can be filled.
    pub fn is_closed(&self) -> bool {
        !matches!(self, Geometry::Line { .. })
    }

    /// Short lowercase name, used in log messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Geometry::Line { .. } => "line",
            Geometry::Circle { .. } => "circle",
            Geometry::Ellipse { .. } => "ellipse",
        }
    }
}

/// A drawable primitive: geometry plus the paint it is rendered with.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    /// Position and size
    pub geometry: Geometry,
    /// Displayed color (after lightness/brightness adjustment)
    pub color: Color,
    /// Last explicitly chosen color, before any adjustment
    pub base_color: Option<Color>,
    /// Outline thickness in pixels, always at least 1
    pub stroke_width: u32,
    /// Interior fill; ignored for lines
    pub fill: FillMode,
}

impl Shape {
    /// Creates a shape whose base color equals its displayed color.
    ///
    /// A stroke width of zero is raised to 1.
    pub fn new(geometry: Geometry, color: Color, stroke_width: u32, fill: FillMode) -> Self {
        Self {
            geometry,
            color,
            base_color: Some(color),
            stroke_width: stroke_width.max(1),
            fill: if geometry.is_closed() {
                fill
            } else {
                FillMode::None
            },
        }
    }

    /// Convenience constructor for a line.
    pub fn line(x1: f64, y1: f64, x2: f64, y2: f64, color: Color, stroke_width: u32) -> Self {
        Self::new(
            Geometry::Line { x1, y1, x2, y2 },
            color,
            stroke_width,
            FillMode::None,
        )
    }

    /// Convenience constructor for a circle.
    pub fn circle(
        cx: f64,
        cy: f64,
        radius: f64,
        color: Color,
        stroke_width: u32,
        fill: FillMode,
    ) -> Self {
        Self::new(Geometry::Circle { cx, cy, radius }, color, stroke_width, fill)
    }

    /// Convenience constructor for an ellipse.
    pub fn ellipse(
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        color: Color,
        stroke_width: u32,
        fill: FillMode,
    ) -> Self {
        Self::new(
            Geometry::Ellipse { cx, cy, rx, ry },
            color,
            stroke_width,
            fill,
        )
    }

    /// Returns the base color, falling back to the displayed color when unset.
    pub fn effective_base_color(&self) -> Color {
        self.base_color.unwrap_or(self.color)
    }

    /// Returns the axis-aligned extent of the geometry, without stroke padding.
    ///
    /// Radii are clamped to zero so degenerate shapes collapse to their center.
    pub fn bounding_box(&self) -> Bounds {
        match self.geometry {
            Geometry::Line { x1, y1, x2, y2 } => Bounds::from_min_max(x1, y1, x2, y2),
            Geometry::Circle { cx, cy, radius } => {
                let r = radius.max(0.0);
                Bounds::from_min_max(cx - r, cy - r, cx + r, cy + r)
            }
            Geometry::Ellipse { cx, cy, rx, ry } => {
                let (rx, ry) = (rx.max(0.0), ry.max(0.0));
                Bounds::from_min_max(cx - rx, cy - ry, cx + rx, cy + ry)
            }
        }
    }
}
