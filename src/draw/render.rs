//! Render command lists and their execution on a [`Surface`].

use super::color::Color;
use super::raster::{self, ClipRect};
use super::shape::Shape;
use super::surface::{StrokeStyle, Surface};
use crate::util::Bounds;

/// One drawing instruction for a host surface.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Reset the whole surface to its background
    Clear,
    /// Paint a solid square block
    FillRect {
        x: i32,
        y: i32,
        size: u32,
        color: Color,
    },
    /// Outline a rectangle (selection highlight)
    StrokeRect { bounds: Bounds, style: StrokeStyle },
}

impl RenderCommand {
    /// Executes this command against `surface`.
    pub fn apply<S: Surface + ?Sized>(&self, surface: &mut S) {
        match self {
            RenderCommand::Clear => surface.clear(),
            RenderCommand::FillRect { x, y, size, color } => {
                surface.fill_rect(*x, *y, *size, *size, *color)
            }
            RenderCommand::StrokeRect { bounds, style } => surface.stroke_rect(*bounds, style),
        }
    }
}

/// Appends the fill commands for the part of `shape` inside `clip`, in
/// rasterization order.
pub fn push_shape_commands(commands: &mut Vec<RenderCommand>, shape: &Shape, clip: ClipRect) {
    commands.extend(raster::rasterize(shape, clip).into_iter().map(|block| {
        RenderCommand::FillRect {
            x: block.x,
            y: block.y,
            size: block.size,
            color: shape.color,
        }
    }));
}

/// Builds the command for a dashed outline around `shape`, `margin` pixels out.
pub fn selection_outline(shape: &Shape, margin: f64, style: &StrokeStyle) -> RenderCommand {
    RenderCommand::StrokeRect {
        bounds: shape.bounding_box().inflate(margin),
        style: style.clone(),
    }
}

/// Executes every command in order.
pub fn execute<S: Surface + ?Sized>(commands: &[RenderCommand], surface: &mut S) {
    for command in commands {
        command.apply(surface);
    }
}
