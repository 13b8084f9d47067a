//! Input handling and the editor session.
//!
//! This module translates pointer events into editing operations. It owns the
//! shape collection, the selection, the active tool and affine mode, and the
//! current drawing parameters (color, stroke width, fill).

pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::MouseButton;
pub use state::{DrawingState, EditorState, SelectionSync};
pub use tool::Tool;
