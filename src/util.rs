//! Geometry helpers shared by hit testing, transforms, and selection outlines.
//!
//! This module provides:
//! - Axis-aligned bounds in canvas coordinates
//! - Point rotation about a pivot
//! - Point-to-segment distance

// ============================================================================
// Bounds
// ============================================================================

/// Axis-aligned rectangle in floating-point canvas coordinates.
///
/// Used for selection outlines, where shapes are not yet snapped to pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Builds bounds from min/max corners. Swapped corners are normalized.
    pub fn from_min_max(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        let (min_x, max_x) = (min_x.min(max_x), min_x.max(max_x));
        let (min_y, max_y) = (min_y.min(max_y), min_y.max(max_y));
        Self {
            x: min_x,
            y: min_y,
            width: max_x - min_x,
            height: max_y - min_y,
        }
    }

    /// Expands the bounds evenly in all directions by `amount`.
    pub fn inflate(self, amount: f64) -> Self {
        Self {
            x: self.x - amount,
            y: self.y - amount,
            width: self.width + amount * 2.0,
            height: self.height + amount * 2.0,
        }
    }
}

// ============================================================================
// Point Geometry
// ============================================================================

/// Rotates `(x, y)` about `pivot` by `degrees` (clockwise on a y-down canvas).
pub fn rotate_point(x: f64, y: f64, pivot: (f64, f64), degrees: f64) -> (f64, f64) {
    let (px, py) = pivot;
    let angle = degrees.to_radians();
    let (sin_a, cos_a) = angle.sin_cos();
    let dx = x - px;
    let dy = y - py;
    (px + dx * cos_a - dy * sin_a, py + dx * sin_a + dy * cos_a)
}

/// Distance from `(px, py)` to the segment `(x1, y1)-(x2, y2)`.
///
/// A zero-length segment degrades to the distance to its single point.
pub fn distance_to_segment(px: f64, py: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    let length_sq = dx * dx + dy * dy;

    if length_sq == 0.0 {
        return (px - x1).hypot(py - y1);
    }

    let t = (((px - x1) * dx + (py - y1) * dy) / length_sq).clamp(0.0, 1.0);
    let proj_x = x1 + t * dx;
    let proj_y = y1 + t * dy;
    (px - proj_x).hypot(py - proj_y)
}
