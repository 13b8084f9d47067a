//! Editor session state and selection handling.

use crate::config::Config;
use crate::draw::{
    AffineMode, Color, FillMode, Frame, HitTolerance, RED, Shape, StrokeStyle, TransformSettings,
    hit_test,
};
use crate::input::tool::Tool;
use log::{debug, info, warn};

/// Pointer gesture state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawingState {
    /// No button held
    Idle,
    /// Left button held since `(start_x, start_y)`
    Pressed {
        /// X coordinate where the button went down
        start_x: f64,
        /// Y coordinate where the button went down
        start_y: f64,
    },
}

/// Snapshot sent to the UI layer when a shape becomes selected, so that the
/// color, fill, and adjustment controls can mirror it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionSync {
    /// Index of the newly selected shape
    pub index: usize,
    /// The shape's displayed color
    pub color: Color,
    /// The shape's fill (always `None` for lines)
    pub fill: FillMode,
    /// Lightness control value, reset on every selection
    pub lightness: i32,
    /// Brightness control value, reset on every selection
    pub brightness: i32,
}

/// A single editing session: the canvas contents plus everything the
/// pointer and UI controls act on.
///
/// All operations are synchronous. Each mutation sets [`needs_redraw`]; the
/// host then calls [`EditorState::redraw`] or [`EditorState::render`].
///
/// [`needs_redraw`]: EditorState::needs_redraw
#[derive(Debug)]
pub struct EditorState {
    /// Shapes in paint order
    pub(super) frame: Frame,
    /// Index of the selected shape, if any
    pub(super) selected: Option<usize>,
    /// Active drawing tool (mutually exclusive with `affine_mode`)
    pub(super) tool: Option<Tool>,
    /// Active affine mode (mutually exclusive with `tool`)
    pub(super) affine_mode: Option<AffineMode>,
    /// Color used for new shapes
    pub current_color: Color,
    /// Stroke width used for new shapes
    pub current_stroke_width: u32,
    /// Fill used for new circles and ellipses
    pub current_fill: FillMode,
    /// Lightness control value (-100..=100)
    pub(super) lightness: i32,
    /// Brightness control value (-100..=100)
    pub(super) brightness: i32,
    /// Current gesture state
    pub state: DrawingState,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    /// Selection notification waiting to be drained by the UI
    pending_selection_sync: Option<SelectionSync>,
    /// Amounts for move/scale/rotate
    pub transform: TransformSettings,
    /// Hit-test slack
    pub hit_tolerance: HitTolerance,
    /// Style of the selection outline
    pub selection_style: StrokeStyle,
    /// Gap between a shape's extent and its selection outline
    pub selection_margin: f64,
    /// Maximum number of shapes allowed (0 = unlimited)
    pub max_shapes: usize,
    /// Canvas width and height that [`EditorState::redraw`] clips shapes to
    pub canvas_size: (u32, u32),
}

impl EditorState {
    /// Creates an empty session with the given drawing defaults and the
    /// standard transform, hit-test, and selection settings.
    pub fn new(color: Color, stroke_width: u32, fill: FillMode) -> Self {
        Self {
            frame: Frame::new(),
            selected: None,
            tool: None,
            affine_mode: None,
            current_color: color,
            current_stroke_width: stroke_width.max(1),
            current_fill: fill,
            lightness: 0,
            brightness: 0,
            state: DrawingState::Idle,
            needs_redraw: true,
            pending_selection_sync: None,
            transform: TransformSettings::default(),
            hit_tolerance: HitTolerance::default(),
            selection_style: StrokeStyle {
                color: RED,
                width: 1,
                dash: vec![5.0, 3.0],
            },
            selection_margin: 4.0,
            max_shapes: 0,
            canvas_size: (800, 600),
        }
    }

    /// Creates an empty session configured from `config`.
    pub fn from_config(config: &Config) -> Self {
        let mut state = Self::new(
            config.drawing.color(),
            config.drawing.default_stroke_width,
            config.drawing.default_fill.into(),
        );
        state.transform = config.transform.settings();
        state.hit_tolerance = config.selection.hit_tolerance();
        state.selection_style = config.selection.stroke_style();
        state.selection_margin = config.selection.margin;
        state.max_shapes = config.canvas.max_shapes;
        state.canvas_size = (config.canvas.width, config.canvas.height);
        state
    }

    /// Shapes in paint order.
    pub fn shapes(&self) -> &[Shape] {
        self.frame.shapes()
    }

    /// Index of the selected shape.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The selected shape, if any.
    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selected.and_then(|index| self.frame.get(index))
    }

    pub fn tool(&self) -> Option<Tool> {
        self.tool
    }

    pub fn affine_mode(&self) -> Option<AffineMode> {
        self.affine_mode
    }

    /// Current lightness and brightness control values.
    pub fn lightness_brightness(&self) -> (i32, i32) {
        (self.lightness, self.brightness)
    }

    /// Activates a drawing tool (or none), clearing any affine mode.
    pub fn set_tool(&mut self, tool: Option<Tool>) {
        self.tool = tool;
        self.affine_mode = None;
        self.state = DrawingState::Idle;
        self.needs_redraw = true;
        debug!("Tool set to {:?}", tool);
    }

    /// Activates an affine mode (or none), clearing any drawing tool.
    pub fn set_affine_mode(&mut self, mode: Option<AffineMode>) {
        self.affine_mode = mode;
        self.tool = None;
        self.state = DrawingState::Idle;
        self.needs_redraw = true;
        debug!("Affine mode set to {:?}", mode);
    }

    /// Appends a shape on top of the canvas and selects it.
    ///
    /// Returns the new index, or `None` when the shape limit is reached.
    pub fn add_shape(&mut self, shape: Shape) -> Option<usize> {
        let kind = shape.geometry.kind_name();
        match self.frame.try_add_shape(shape, self.max_shapes) {
            Some(index) => {
                self.selected = Some(index);
                self.needs_redraw = true;
                debug!("Added {kind} at index {index}");
                Some(index)
            }
            None => {
                warn!(
                    "Shape limit ({}) reached; discarding new {kind}",
                    self.max_shapes
                );
                None
            }
        }
    }

    /// Selects the topmost shape under `(x, y)`, or clears the selection on a miss.
    ///
    /// A hit queues a [`SelectionSync`] and resets the lightness/brightness
    /// controls to neutral. A miss drops any sync still waiting to be taken.
    pub fn select_at(&mut self, x: f64, y: f64) -> Option<usize> {
        self.selected = hit_test::find_topmost(self.frame.shapes(), x, y, self.hit_tolerance);
        self.needs_redraw = true;

        let Some(index) = self.selected else {
            self.pending_selection_sync = None;
            return None;
        };
        let shape = self.frame.get_mut(index)?;
        if shape.base_color.is_none() {
            shape.base_color = Some(shape.color);
        }

        self.lightness = 0;
        self.brightness = 0;
        self.pending_selection_sync = Some(SelectionSync {
            index,
            color: shape.color,
            fill: shape.fill,
            lightness: 0,
            brightness: 0,
        });
        info!(
            "Selected {} at index {index}",
            shape.geometry.kind_name()
        );
        Some(index)
    }

    /// Takes the pending selection notification, if any.
    pub fn take_selection_sync(&mut self) -> Option<SelectionSync> {
        self.pending_selection_sync.take()
    }
}
