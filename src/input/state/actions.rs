use crate::draw::{AffineMode, Color, FillMode, Shape, transform};
use log::{debug, info};

use super::EditorState;

impl EditorState {
    /// Replaces the selected shape with `edit(shape)`.
    ///
    /// Returns false (and changes nothing) when no shape is selected.
    fn commit_selected(&mut self, edit: impl FnOnce(&Shape) -> Shape) -> bool {
        let Some(shape) = self.selected.and_then(|index| self.frame.get_mut(index)) else {
            return false;
        };
        *shape = edit(shape);
        self.needs_redraw = true;
        true
    }

    /// Sets the color for new shapes and recolors the selection, like a color
    /// picker bound to both.
    pub fn set_current_color(&mut self, color: Color) {
        self.current_color = color;
        self.recolor_selected(color);
    }

    /// Sets the displayed and base color of the selected shape.
    pub fn recolor_selected(&mut self, color: Color) {
        if self.commit_selected(|shape| Shape {
            color,
            base_color: Some(color),
            ..shape.clone()
        }) {
            debug!("Recolored selection to {}", color.to_hex());
        }
    }

    /// Sets the fill for new shapes and for the selection.
    pub fn set_current_fill(&mut self, fill: FillMode) {
        self.current_fill = fill;
        self.set_fill_selected(fill);
    }

    /// Changes the fill of a selected circle or ellipse. Lines are left alone.
    pub fn set_fill_selected(&mut self, fill: FillMode) {
        let closed = self
            .selected_shape()
            .is_some_and(|shape| shape.geometry.is_closed());
        if closed {
            self.commit_selected(|shape| Shape {
                fill,
                ..shape.clone()
            });
        }
    }

    /// Updates the lightness/brightness controls and recomputes the selected
    /// shape's displayed color from its base color.
    ///
    /// Both values are clamped to -100..=100.
    pub fn set_lightness_brightness(&mut self, lightness: i32, brightness: i32) {
        self.lightness = lightness.clamp(-100, 100);
        self.brightness = brightness.clamp(-100, 100);
        let (lightness, brightness) = (self.lightness, self.brightness);

        self.commit_selected(|shape| {
            let base = shape.effective_base_color();
            Shape {
                color: base.adjusted(lightness, brightness),
                base_color: Some(base),
                ..shape.clone()
            }
        });
    }

    /// Zeroes the lightness/brightness controls and restores the selected
    /// shape's base color.
    pub fn reset_lightness_brightness(&mut self) {
        self.lightness = 0;
        self.brightness = 0;
        self.commit_selected(|shape| Shape {
            color: shape.effective_base_color(),
            ..shape.clone()
        });
    }

    /// Applies `mode` to the selected shape. `pivot` is the rotation center.
    pub fn apply_affine(&mut self, mode: AffineMode, pivot: (f64, f64)) {
        let settings = self.transform;
        if self.commit_selected(|shape| Shape {
            geometry: transform::apply(shape.geometry, mode, pivot, &settings),
            ..shape.clone()
        }) {
            debug!("Applied {mode:?} to selection (pivot {pivot:?})");
        }
    }

    /// Removes the selected shape and clears the selection.
    pub fn delete_selected(&mut self) {
        let Some(index) = self.selected.take() else {
            return;
        };
        if let Some(shape) = self.frame.remove(index) {
            info!("Deleted {} at index {index}", shape.geometry.kind_name());
        }
        self.needs_redraw = true;
    }
}
