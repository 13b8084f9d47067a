//! Library exports for the rastersketch shape engine.
//!
//! The `draw` module holds the pure pieces (color math, geometry,
//! rasterization, hit-testing, transforms, fractal rendering) and `input`
//! wraps them in an editing session driven by pointer gestures.

pub mod config;
pub mod draw;
pub mod input;
pub mod util;

pub use config::Config;
