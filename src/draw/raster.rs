//! Scan conversion of shapes into pixel blocks.
//!
//! Every function here is pure: it maps geometry to the list of square
//! blocks a surface should paint. Outlines paint `stroke_width`-sized blocks
//! anchored at each traced point; solid fills always use 1x1 pixels.
//!
//! Output is limited to a [`ClipRect`]. Blocks that cannot touch it are never
//! produced, so the cost of a shape is bounded by the visible area rather than
//! by its size.

use std::ops::RangeInclusive;

use super::shape::{FillMode, Geometry, Shape};

/// A filled square of `size x size` pixels with its top-left corner at `(x, y)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub size: u32,
}

impl PixelRect {
    /// Creates a block; a size of zero is treated as 1.
    pub fn new(x: i32, y: i32, size: u32) -> Self {
        Self {
            x,
            y,
            size: size.max(1),
        }
    }

    /// Iterates over every pixel covered by this block.
    pub fn pixels(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let size = self.size as i32;
        (0..size).flat_map(move |dy| (0..size).map(move |dx| (self.x + dx, self.y + dy)))
    }
}

/// Pixel area that rasterization is limited to, usually the target surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClipRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl ClipRect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The whole of a `width x height` surface.
    pub fn surface(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    /// Whether a `size x size` block at `(x, y)` covers any pixel of the area.
    pub fn touches(&self, x: i64, y: i64, size: u32) -> bool {
        let size = size.max(1) as i64;
        x.saturating_add(size) > self.x as i64
            && y.saturating_add(size) > self.y as i64
            && x < self.right()
            && y < self.bottom()
    }

    /// Whether the box `[x0, x1] x [y0, y1]` overlaps the area. NaN never does.
    fn overlaps(&self, x0: f64, y0: f64, x1: f64, y1: f64) -> bool {
        x1 >= self.x as f64
            && y1 >= self.y as f64
            && x0 < self.right() as f64
            && y0 < self.bottom() as f64
    }

    fn corners(&self) -> [(f64, f64); 4] {
        let (left, top) = (self.x as f64, self.y as f64);
        let (right, bottom) = (self.right() as f64, self.bottom() as f64);
        [(left, top), (right, top), (left, bottom), (right, bottom)]
    }

    /// Appends a block when it touches the area.
    fn emit(&self, blocks: &mut Vec<PixelRect>, x: i64, y: i64, size: u32) {
        if self.touches(x, y, size) {
            blocks.push(PixelRect::new(x as i32, y as i32, size));
        }
    }
}

fn snap(v: f64) -> i64 {
    v.round() as i64
}

/// Integer offsets `k` in `-limit..=limit` for which `round(center + k)` can
/// fall inside `[lo, hi)`.
fn span(center: f64, lo: i64, hi: i64, limit: f64) -> RangeInclusive<i64> {
    let start = (lo as f64 - center - 1.0).floor().max(-limit);
    let end = (hi as f64 - center).ceil().min(limit);
    (start as i64)..=(end as i64)
}

/// Rasterizes a shape: solid fill first (when enabled), then the outline.
pub fn rasterize(shape: &Shape, clip: ClipRect) -> Vec<PixelRect> {
    let width = shape.stroke_width;
    let solid = shape.fill == FillMode::Solid;

    match shape.geometry {
        Geometry::Line { x1, y1, x2, y2 } => rasterize_line(x1, y1, x2, y2, width, clip),
        Geometry::Circle { cx, cy, radius } => {
            let mut blocks = if solid {
                fill_circle(cx, cy, radius, clip)
            } else {
                Vec::new()
            };
            blocks.extend(outline_circle(cx, cy, radius, width, clip));
            blocks
        }
        Geometry::Ellipse { cx, cy, rx, ry } => {
            let mut blocks = if solid {
                fill_ellipse(cx, cy, rx, ry, clip)
            } else {
                Vec::new()
            };
            blocks.extend(outline_ellipse(cx, cy, rx, ry, width, clip));
            blocks
        }
    }
}

// ============================================================================
// Lines
// ============================================================================

/// Liang-Barsky clip of a segment to `[left, right] x [top, bottom]`.
///
/// Endpoints already inside are returned untouched.
fn clip_segment(
    (x1, y1, x2, y2): (f64, f64, f64, f64),
    (left, top, right, bottom): (f64, f64, f64, f64),
) -> Option<(f64, f64, f64, f64)> {
    let dx = x2 - x1;
    let dy = y2 - y1;
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;

    for (p, q) in [
        (-dx, x1 - left),
        (dx, right - x1),
        (-dy, y1 - top),
        (dy, bottom - y1),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            if t > t1 {
                return None;
            }
            t0 = t0.max(t);
        } else {
            if t < t0 {
                return None;
            }
            t1 = t1.min(t);
        }
    }

    let (sx, sy) = if t0 > 0.0 {
        (x1 + t0 * dx, y1 + t0 * dy)
    } else {
        (x1, y1)
    };
    let (ex, ey) = if t1 < 1.0 {
        (x1 + t1 * dx, y1 + t1 * dy)
    } else {
        (x2, y2)
    };
    Some((sx, sy, ex, ey))
}

/// Bresenham line between the rounded endpoints, both inclusive.
///
/// A segment reaching past the clip area is first cut to the area plus a
/// stroke-sized border, so only the visible stretch is walked.
pub fn rasterize_line(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    stroke_width: u32,
    clip: ClipRect,
) -> Vec<PixelRect> {
    let border = stroke_width as f64 + 2.0;
    let window = (
        clip.x as f64 - border,
        clip.y as f64 - border,
        clip.right() as f64 + border,
        clip.bottom() as f64 + border,
    );
    let Some((x1, y1, x2, y2)) = clip_segment((x1, y1, x2, y2), window) else {
        return Vec::new();
    };

    let (mut x, mut y) = (snap(x1), snap(y1));
    let (x_end, y_end) = (snap(x2), snap(y2));

    let dx = (x_end - x).abs();
    let dy = (y_end - y).abs();
    let sx = if x < x_end { 1 } else { -1 };
    let sy = if y < y_end { 1 } else { -1 };
    let mut err = dx - dy;

    let mut blocks = Vec::new();
    loop {
        clip.emit(&mut blocks, x, y, stroke_width);

        if x == x_end && y == y_end {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }

    blocks
}

// ============================================================================
// Circles
// ============================================================================

/// Whether any outline block of the ellipse `(cx, cy, rx, ry)` can land in `clip`.
///
/// False when the clip misses the outline's extent, or when the clip sits
/// wholly inside the shape with more than a stroke block of clearance from
/// the curve. Traced points stay within a pixel of the curve and blocks reach
/// at most `stroke_width` pixels further.
fn outline_visible(cx: f64, cy: f64, rx: f64, ry: f64, stroke_width: u32, clip: ClipRect) -> bool {
    let reach = stroke_width as f64 + 1.0;
    if !clip.overlaps(cx - rx - 1.0, cy - ry - 1.0, cx + rx + reach, cy + ry + reach) {
        return false;
    }

    let margin = 3.0 + 1.5 * stroke_width as f64;
    let inner = rx.min(ry);
    if inner <= margin {
        return true;
    }
    // Scaling by rx/ry moves points by at least min(rx, ry) per unit of
    // normalized radius, so this keeps every corner `margin` inside the curve
    let limit = 1.0 - margin / inner;
    !clip
        .corners()
        .iter()
        .all(|&(x, y)| ((x - cx) / rx).hypot((y - cy) / ry) < limit)
}

/// Scanline fill of a circle with the radius rounded to whole pixels.
///
/// Returns nothing for a radius that rounds to zero or below.
pub fn fill_circle(cx: f64, cy: f64, radius: f64, clip: ClipRect) -> Vec<PixelRect> {
    let r = radius.max(0.0).round();
    let mut pixels = Vec::new();
    if r <= 0.0 || !cx.is_finite() || !cy.is_finite() {
        return pixels;
    }

    for yy in span(cy, clip.y as i64, clip.bottom(), r) {
        let yf = yy as f64;
        let half = (r * r - yf * yf).sqrt().floor();
        for xx in span(cx, clip.x as i64, clip.right(), half) {
            clip.emit(&mut pixels, snap(cx + xx as f64), snap(cy + yf), 1);
        }
    }
    pixels
}

/// Midpoint circle outline, one block per traced octant point.
pub fn outline_circle(
    cx: f64,
    cy: f64,
    radius: f64,
    stroke_width: u32,
    clip: ClipRect,
) -> Vec<PixelRect> {
    let r = radius.max(0.0);
    let mut blocks = Vec::new();
    if !outline_visible(cx, cy, r, r, stroke_width, clip) {
        return blocks;
    }

    let mut d = 1.0 - r;
    let mut xi = 0.0;
    let mut yi = r;

    while xi <= yi {
        for (px, py) in [
            (cx + xi, cy + yi),
            (cx + yi, cy + xi),
            (cx - yi, cy + xi),
            (cx - xi, cy + yi),
            (cx - xi, cy - yi),
            (cx - yi, cy - xi),
            (cx + yi, cy - xi),
            (cx + xi, cy - yi),
        ] {
            clip.emit(&mut blocks, snap(px), snap(py), stroke_width);
        }

        if d < 0.0 {
            d += 2.0 * xi + 3.0;
        } else {
            d += 2.0 * (xi - yi) + 5.0;
            yi -= 1.0;
        }
        xi += 1.0;
    }

    blocks
}

// ============================================================================
// Ellipses
// ============================================================================

/// Scanline fill of an ellipse with both radii rounded to whole pixels.
///
/// Returns nothing unless both rounded radii are positive.
pub fn fill_ellipse(cx: f64, cy: f64, rx: f64, ry: f64, clip: ClipRect) -> Vec<PixelRect> {
    let rx = rx.max(0.0).round();
    let ry = ry.max(0.0).round();
    let mut pixels = Vec::new();
    if rx <= 0.0 || ry <= 0.0 || !cx.is_finite() || !cy.is_finite() {
        return pixels;
    }

    let ry_sq = ry * ry;
    for yy in span(cy, clip.y as i64, clip.bottom(), ry) {
        let yf = yy as f64;
        let t = 1.0 - yf * yf / ry_sq;
        if t < 0.0 {
            continue;
        }
        let half = (rx * t.sqrt()).floor();
        for xx in span(cx, clip.x as i64, clip.right(), half) {
            clip.emit(&mut pixels, snap(cx + xx as f64), snap(cy + yf), 1);
        }
    }
    pixels
}

/// Two-region midpoint ellipse outline with 4-way symmetry.
///
/// A flat ellipse (either radius zero) collapses to a single block at its
/// center, like a zero-radius circle. Such an ellipse is never hit by
/// [`hit_test`](super::hit_test::hit_test).
pub fn outline_ellipse(
    cx: f64,
    cy: f64,
    rx: f64,
    ry: f64,
    stroke_width: u32,
    clip: ClipRect,
) -> Vec<PixelRect> {
    let rx = rx.max(0.0);
    let ry = ry.max(0.0);
    let mut blocks = Vec::new();

    if rx == 0.0 || ry == 0.0 {
        clip.emit(&mut blocks, snap(cx), snap(cy), stroke_width);
        return blocks;
    }
    if !outline_visible(cx, cy, rx, ry, stroke_width, clip) {
        return blocks;
    }

    let mut plot = |xi: f64, yi: f64| {
        for (px, py) in [
            (cx + xi, cy + yi),
            (cx - xi, cy + yi),
            (cx + xi, cy - yi),
            (cx - xi, cy - yi),
        ] {
            clip.emit(&mut blocks, snap(px), snap(py), stroke_width);
        }
    };

    let rx_sq = rx * rx;
    let ry_sq = ry * ry;
    let mut xi = 0.0;
    let mut yi = ry;

    // Region 1: slope magnitude below 1, step x every iteration
    let mut p1 = ry_sq - rx_sq * ry + 0.25 * rx_sq;
    while 2.0 * ry_sq * xi <= 2.0 * rx_sq * yi {
        plot(xi, yi);
        xi += 1.0;
        if p1 < 0.0 {
            p1 += 2.0 * ry_sq * xi + ry_sq;
        } else {
            yi -= 1.0;
            p1 += 2.0 * ry_sq * xi - 2.0 * rx_sq * yi + ry_sq;
        }
    }

    // Region 2: step y down to the major axis
    let mut p2 = ry_sq * (xi + 0.5) * (xi + 0.5) + rx_sq * (yi - 1.0) * (yi - 1.0) - rx_sq * ry_sq;
    while yi >= 0.0 {
        plot(xi, yi);
        yi -= 1.0;
        if p2 > 0.0 {
            p2 += rx_sq - 2.0 * rx_sq * yi;
        } else {
            xi += 1.0;
            p2 += 2.0 * ry_sq * xi - 2.0 * rx_sq * yi + rx_sq;
        }
    }

    blocks
}
