//! Pixel surfaces that render commands are executed against.
//!
//! [`Surface`] is the seam to the host: a windowing backend implements it over
//! its own framebuffer. [`PixelBuffer`] is the in-memory implementation used
//! by the CLI and the tests.

use super::color::Color;
use crate::util::Bounds;
use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};
use std::path::Path;

/// Line style for outlined rectangles.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    /// Outline color
    pub color: Color,
    /// Outline thickness in pixels
    pub width: u32,
    /// Alternating on/off run lengths in pixels; empty means solid
    pub dash: Vec<f64>,
}

/// Minimal drawing API the editor needs from a host surface.
pub trait Surface {
    /// Surface width in pixels
    fn width(&self) -> u32;

    /// Surface height in pixels
    fn height(&self) -> u32;

    /// Resets every pixel to the background.
    fn clear(&mut self);

    /// Paints a solid axis-aligned rectangle. Parts outside the surface are clipped.
    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color);

    /// Outlines `bounds` with the given style.
    fn stroke_rect(&mut self, bounds: Bounds, style: &StrokeStyle);

    /// Replaces the surface contents with `image`, anchored at the origin.
    fn put_image(&mut self, image: &RgbaImage);
}

/// In-memory RGBA surface backed by an [`RgbaImage`].
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    image: RgbaImage,
    background: Color,
}

impl PixelBuffer {
    /// Creates a buffer filled with `background`.
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, background.to_rgba()),
            background,
        }
    }

    /// Returns the color at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 {
            return None;
        }
        self.image
            .get_pixel_checked(x as u32, y as u32)
            .map(|p| Color::new(p[0], p[1], p[2]))
    }

    /// Counts pixels that differ from the background.
    pub fn painted_pixel_count(&self) -> usize {
        let background = self.background.to_rgba();
        self.image.pixels().filter(|p| **p != background).count()
    }

    /// Borrows the underlying image.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Writes the buffer to `path` as PNG.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.image
            .save_with_format(path, image::ImageFormat::Png)
            .with_context(|| format!("Failed to write PNG to {}", path.display()))?;
        log::info!(
            "Saved {}x{} image to {}",
            self.image.width(),
            self.image.height(),
            path.display()
        );
        Ok(())
    }

    fn put(&mut self, x: i64, y: i64, pixel: Rgba<u8>) {
        if x < 0 || y < 0 || x >= self.image.width() as i64 || y >= self.image.height() as i64 {
            return;
        }
        self.image.put_pixel(x as u32, y as u32, pixel);
    }
}

impl Surface for PixelBuffer {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn clear(&mut self) {
        let background = self.background.to_rgba();
        for pixel in self.image.pixels_mut() {
            *pixel = background;
        }
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) {
        let pixel = color.to_rgba();
        let left = (x as i64).max(0);
        let top = (y as i64).max(0);
        let right = (x as i64 + width as i64).min(self.image.width() as i64);
        let bottom = (y as i64 + height as i64).min(self.image.height() as i64);
        for py in top..bottom {
            for px in left..right {
                self.image.put_pixel(px as u32, py as u32, pixel);
            }
        }
    }

    fn stroke_rect(&mut self, bounds: Bounds, style: &StrokeStyle) {
        let pixel = style.color.to_rgba();
        let size = style.width.max(1) as i64;

        // Edges beyond the surface are pulled in to just outside it, so the
        // walk is bounded by the surface perimeter
        let fit = |a: f64, b: f64, extent: u32| {
            let (a, b) = (a.round() as i64, b.round() as i64);
            let (lo, hi) = (-size - 1, extent as i64 + 1);
            (a.min(b).clamp(lo, hi), a.max(b).clamp(lo, hi))
        };
        let (x0, x1) = fit(bounds.x, bounds.x + bounds.width, self.image.width());
        let (y0, y1) = fit(bounds.y, bounds.y + bounds.height, self.image.height());

        for (step, (x, y)) in perimeter(x0, y0, x1, y1).into_iter().enumerate() {
            if !dash_is_on(step, &style.dash) {
                continue;
            }
            for dy in 0..size {
                for dx in 0..size {
                    self.put(x + dx, y + dy, pixel);
                }
            }
        }
    }

    fn put_image(&mut self, image: &RgbaImage) {
        let width = image.width().min(self.image.width());
        let height = image.height().min(self.image.height());
        for y in 0..height {
            for x in 0..width {
                self.image.put_pixel(x, y, *image.get_pixel(x, y));
            }
        }
    }
}

/// Walks the rectangle outline clockwise from the top-left corner.
fn perimeter(x0: i64, y0: i64, x1: i64, y1: i64) -> Vec<(i64, i64)> {
    if x0 == x1 && y0 == y1 {
        return vec![(x0, y0)];
    }

    let mut points = Vec::new();
    points.extend((x0..x1).map(|x| (x, y0)));
    points.extend((y0..y1).map(|y| (x1, y)));
    points.extend((x0 + 1..=x1).rev().map(|x| (x, y1)));
    points.extend((y0 + 1..=y1).rev().map(|y| (x0, y)));
    points
}

/// Whether the pixel `step` along a dashed path falls on an "on" run.
///
/// Odd-length patterns repeat twice so on/off alternate consistently.
fn dash_is_on(step: usize, dash: &[f64]) -> bool {
    let pattern: Vec<f64> = if dash.len() % 2 == 1 {
        dash.iter().chain(dash).copied().collect()
    } else {
        dash.to_vec()
    };
    let total: f64 = pattern.iter().sum();
    if pattern.is_empty() || total <= 0.0 {
        return true;
    }

    let mut pos = step as f64 % total;
    for (i, run) in pattern.iter().enumerate() {
        if pos < *run {
            return i % 2 == 0;
        }
        pos -= run;
    }
    true
}
