//! Affine transforms on shape geometry.
//!
//! Transforms never mutate: they return the new geometry and leave committing
//! it to the caller.

use super::shape::Geometry;
use crate::util;

/// Which transform a pointer press applies to the selected shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AffineMode {
    /// Translate by a fixed offset
    Move,
    /// Scale about the shape's own center
    Scale,
    /// Rotate about the pointer position
    Rotate,
}

/// Fixed amounts applied by each transform mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformSettings {
    /// Offset added to both axes by [`AffineMode::Move`]
    pub move_offset: f64,
    /// Factor applied by [`AffineMode::Scale`]
    pub scale_factor: f64,
    /// Angle in degrees applied by [`AffineMode::Rotate`]
    pub rotate_degrees: f64,
}

impl Default for TransformSettings {
    fn default() -> Self {
        Self {
            move_offset: 10.0,
            scale_factor: 1.2,
            rotate_degrees: 15.0,
        }
    }
}

/// Translates every position-defining coordinate by `(dx, dy)`.
pub fn translate(geometry: Geometry, dx: f64, dy: f64) -> Geometry {
    match geometry {
        Geometry::Line { x1, y1, x2, y2 } => Geometry::Line {
            x1: x1 + dx,
            y1: y1 + dy,
            x2: x2 + dx,
            y2: y2 + dy,
        },
        Geometry::Circle { cx, cy, radius } => Geometry::Circle {
            cx: cx + dx,
            cy: cy + dy,
            radius,
        },
        Geometry::Ellipse { cx, cy, rx, ry } => Geometry::Ellipse {
            cx: cx + dx,
            cy: cy + dy,
            rx,
            ry,
        },
    }
}

/// Scales about the shape's centroid: a line about its midpoint, circles and
/// ellipses by their radii.
pub fn scale(geometry: Geometry, factor: f64) -> Geometry {
    match geometry {
        Geometry::Line { x1, y1, x2, y2 } => {
            let mx = (x1 + x2) / 2.0;
            let my = (y1 + y2) / 2.0;
            Geometry::Line {
                x1: mx + (x1 - mx) * factor,
                y1: my + (y1 - my) * factor,
                x2: mx + (x2 - mx) * factor,
                y2: my + (y2 - my) * factor,
            }
        }
        Geometry::Circle { cx, cy, radius } => Geometry::Circle {
            cx,
            cy,
            radius: radius * factor,
        },
        Geometry::Ellipse { cx, cy, rx, ry } => Geometry::Ellipse {
            cx,
            cy,
            rx: rx * factor,
            ry: ry * factor,
        },
    }
}

/// Rotates about `pivot`. Circles and ellipses only move their center; their
/// radii stay axis-aligned.
pub fn rotate(geometry: Geometry, pivot: (f64, f64), degrees: f64) -> Geometry {
    match geometry {
        Geometry::Line { x1, y1, x2, y2 } => {
            let (x1, y1) = util::rotate_point(x1, y1, pivot, degrees);
            let (x2, y2) = util::rotate_point(x2, y2, pivot, degrees);
            Geometry::Line { x1, y1, x2, y2 }
        }
        Geometry::Circle { cx, cy, radius } => {
            let (cx, cy) = util::rotate_point(cx, cy, pivot, degrees);
            Geometry::Circle { cx, cy, radius }
        }
        Geometry::Ellipse { cx, cy, rx, ry } => {
            let (cx, cy) = util::rotate_point(cx, cy, pivot, degrees);
            Geometry::Ellipse { cx, cy, rx, ry }
        }
    }
}

/// Applies `mode` with the configured amounts. `pivot` is only used by rotation.
pub fn apply(
    geometry: Geometry,
    mode: AffineMode,
    pivot: (f64, f64),
    settings: &TransformSettings,
) -> Geometry {
    match mode {
        AffineMode::Move => translate(geometry, settings.move_offset, settings.move_offset),
        AffineMode::Scale => scale(geometry, settings.scale_factor),
        AffineMode::Rotate => rotate(geometry, pivot, settings.rotate_degrees),
    }
}
