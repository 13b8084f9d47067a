//! Shape model, rasterization, and pixel surfaces.
//!
//! This module defines the core drawing types of the editor:
//! - [`Color`]: RGB color with hex encoding and lightness/brightness adjustment
//! - [`Shape`]: line, circle, and ellipse primitives
//! - [`Frame`]: the ordered shape collection
//! - [`raster`]: Bresenham and midpoint scan conversion
//! - [`hit_test`] and [`transform`]: selection geometry and affine edits
//! - [`Surface`]: the host drawing seam, with [`PixelBuffer`] as an in-memory implementation

pub mod color;
pub mod fractal;
pub mod frame;
pub mod raster;
pub mod render;
pub mod shape;
pub mod surface;
pub mod transform;

// Re-export commonly used types at module level
pub use color::{Color, ColorError, apply_lightness_brightness};
pub use frame::Frame;
pub use hit_test::HitTolerance;
pub use raster::{ClipRect, PixelRect, rasterize};
pub use render::RenderCommand;
pub use shape::{FillMode, Geometry, Shape};
pub use surface::{PixelBuffer, StrokeStyle, Surface};
pub use transform::{AffineMode, TransformSettings};

// Re-export color constants for public API
pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
