//! Mandelbrot set renderer with a split color/grayscale layout.
//!
//! Independent of the shape editor; it only shares the output surface.

use image::{Rgba, RgbaImage};

const MAX_ITERATIONS: u32 = 100;
const X_RANGE: (f64, f64) = (-2.5, 1.0);
const Y_RANGE: (f64, f64) = (-1.2, 1.2);

/// Number of `z <- z² + c` iterations before `|z|² >= 4`, capped at the maximum.
pub fn escape_iterations(x0: f64, y0: f64) -> u32 {
    let (mut zx, mut zy) = (0.0_f64, 0.0_f64);
    let mut iter = 0;
    while zx * zx + zy * zy < 4.0 && iter < MAX_ITERATIONS {
        let next_x = zx * zx - zy * zy + x0;
        zy = 2.0 * zx * zy + y0;
        zx = next_x;
        iter += 1;
    }
    iter
}

fn clamp_channel(v: f64) -> u8 {
    v.clamp(0.0, 255.0) as u8
}

/// Renders the Mandelbrot set at half width on the left and its luminance
/// grayscale at the mirrored column on the right.
///
/// Points inside the set are black. An odd final column is left transparent.
pub fn render_mandelbrot_split(width: u32, height: u32) -> RgbaImage {
    let mut image = RgbaImage::new(width, height);
    let half = width / 2;
    if half == 0 || height == 0 {
        return image;
    }

    for py in 0..height {
        let y0 = Y_RANGE.0 + (py as f64 / height as f64) * (Y_RANGE.1 - Y_RANGE.0);
        for px in 0..half {
            let x0 = X_RANGE.0 + (px as f64 / half as f64) * (X_RANGE.1 - X_RANGE.0);
            let iter = escape_iterations(x0, y0);

            let c = if iter == MAX_ITERATIONS {
                0.0
            } else {
                iter as f64 * 10.0
            };
            let (r, g, b) = (c, c * 2.0, c * 4.0);
            image.put_pixel(
                px,
                py,
                Rgba([clamp_channel(r), clamp_channel(g), clamp_channel(b), 255]),
            );

            let gray = clamp_channel((0.299 * r + 0.587 * g + 0.114 * b).round());
            image.put_pixel(px + half, py, Rgba([gray, gray, gray, 255]));
        }
    }

    log::debug!("Rendered {width}x{height} Mandelbrot split");
    image
}
