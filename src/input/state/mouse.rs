use crate::draw::Shape;
use crate::input::{events::MouseButton, tool::Tool};

use super::{DrawingState, EditorState};

impl EditorState {
    /// Processes a mouse button press event.
    ///
    /// # Behavior
    /// - Left click with the Select tool: selects the topmost shape under the pointer
    /// - Left click with an affine mode and a selection: applies the transform,
    ///   rotating about the pointer position
    /// - Left click otherwise: records the drag start for the next release
    pub fn on_mouse_press(&mut self, button: MouseButton, x: f64, y: f64) {
        if button != MouseButton::Left {
            return;
        }

        self.state = DrawingState::Pressed {
            start_x: x,
            start_y: y,
        };

        if self.tool == Some(Tool::Select) {
            self.select_at(x, y);
            return;
        }

        if let Some(mode) = self.affine_mode {
            self.apply_affine(mode, (x, y));
        }
    }

    /// Processes a mouse button release event.
    ///
    /// When a drawing tool is active, builds a shape from the press point and
    /// `(x, y)`, adds it on top, and selects it:
    /// - Line: press point to release point
    /// - Circle: centered at the press point, radius = drag distance
    /// - Ellipse: centered at the press point, radii = drag extent per axis
    pub fn on_mouse_release(&mut self, button: MouseButton, x: f64, y: f64) {
        if button != MouseButton::Left {
            return;
        }

        let DrawingState::Pressed { start_x, start_y } = self.state else {
            return;
        };
        self.state = DrawingState::Idle;

        let Some(tool) = self.tool.filter(|tool| tool.draws()) else {
            return;
        };

        let color = self.current_color;
        let width = self.current_stroke_width;
        let shape = match tool {
            Tool::Line => Shape::line(start_x, start_y, x, y, color, width),
            Tool::Circle => {
                let radius = (x - start_x).hypot(y - start_y);
                Shape::circle(start_x, start_y, radius, color, width, self.current_fill)
            }
            Tool::Ellipse => Shape::ellipse(
                start_x,
                start_y,
                (x - start_x).abs(),
                (y - start_y).abs(),
                color,
                width,
                self.current_fill,
            ),
            Tool::Select => return,
        };

        self.add_shape(shape);
    }
}
