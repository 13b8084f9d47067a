use crate::draw::{ClipRect, RenderCommand, Surface, render};

use super::EditorState;

impl EditorState {
    /// Builds the full command list for the current canvas.
    ///
    /// Always starts with a clear, paints every shape in insertion order, and
    /// ends with the dashed outline of the selected shape when there is one.
    /// Shape pixels outside [`canvas_size`](EditorState::canvas_size) are left out.
    pub fn redraw(&self) -> Vec<RenderCommand> {
        let (width, height) = self.canvas_size;
        self.commands_within(ClipRect::surface(width, height))
    }

    /// Redraws onto `surface` and clears the redraw flag.
    pub fn render<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let clip = ClipRect::surface(surface.width(), surface.height());
        render::execute(&self.commands_within(clip), surface);
        self.needs_redraw = false;
    }

    fn commands_within(&self, clip: ClipRect) -> Vec<RenderCommand> {
        let mut commands = vec![RenderCommand::Clear];
        for shape in self.frame.shapes() {
            render::push_shape_commands(&mut commands, shape, clip);
        }
        if let Some(shape) = self.selected_shape() {
            commands.push(render::selection_outline(
                shape,
                self.selection_margin,
                &self.selection_style,
            ));
        }
        commands
    }
}
