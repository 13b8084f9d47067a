//! Drawing tool selection.

/// Drawing tool selection.
///
/// The active tool decides what a pointer press/release pair does on the
/// canvas. Having no tool active leaves the pointer free for affine edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Straight line from press point to release point
    Line,
    /// Circle centered at the press point, radius reaching the release point
    Circle,
    /// Axis-aligned ellipse centered at the press point
    Ellipse,
    /// Pick the topmost shape under the pointer
    Select,
}

impl Tool {
    /// Whether this tool creates a new shape when a drag completes.
    pub fn draws(self) -> bool {
        !matches!(self, Tool::Select)
    }
}
