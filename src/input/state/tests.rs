use super::*;
use crate::config::Config;
use crate::draw::{
    AffineMode, BLACK, BLUE, Color, FillMode, Geometry, PixelBuffer, RED, RenderCommand, Shape,
    WHITE,
};
use crate::input::{MouseButton, Tool};

fn create_test_editor_state() -> EditorState {
    EditorState::new(RED, 1, FillMode::None)
}

fn drag(state: &mut EditorState, from: (f64, f64), to: (f64, f64)) {
    state.on_mouse_press(MouseButton::Left, from.0, from.1);
    state.on_mouse_release(MouseButton::Left, to.0, to.1);
}

fn click(state: &mut EditorState, x: f64, y: f64) {
    state.on_mouse_press(MouseButton::Left, x, y);
    state.on_mouse_release(MouseButton::Left, x, y);
}

#[test]
fn test_line_gesture_creates_and_selects_line() {
    let mut state = create_test_editor_state();
    state.set_tool(Some(Tool::Line));
    drag(&mut state, (10.0, 20.0), (30.0, 40.0));

    assert_eq!(state.shapes().len(), 1);
    assert_eq!(
        state.shapes()[0].geometry,
        Geometry::Line {
            x1: 10.0,
            y1: 20.0,
            x2: 30.0,
            y2: 40.0
        }
    );
    assert_eq!(state.selected_index(), Some(0));
    assert_eq!(state.state, DrawingState::Idle);
    assert!(state.needs_redraw);
}

#[test]
fn test_circle_gesture_uses_drag_distance_as_radius() {
    let mut state = create_test_editor_state();
    state.current_fill = FillMode::Solid;
    state.set_tool(Some(Tool::Circle));
    drag(&mut state, (50.0, 50.0), (53.0, 54.0));

    let shape = &state.shapes()[0];
    assert_eq!(
        shape.geometry,
        Geometry::Circle {
            cx: 50.0,
            cy: 50.0,
            radius: 5.0
        }
    );
    assert_eq!(shape.fill, FillMode::Solid);
    assert_eq!(shape.base_color, Some(RED));
}

#[test]
fn test_ellipse_gesture_uses_axis_extents() {
    let mut state = create_test_editor_state();
    state.current_stroke_width = 3;
    state.set_tool(Some(Tool::Ellipse));
    drag(&mut state, (100.0, 100.0), (70.0, 112.0));

    let shape = &state.shapes()[0];
    assert_eq!(
        shape.geometry,
        Geometry::Ellipse {
            cx: 100.0,
            cy: 100.0,
            rx: 30.0,
            ry: 12.0
        }
    );
    assert_eq!(shape.stroke_width, 3);
}

#[test]
fn test_line_gesture_ignores_current_fill() {
    let mut state = create_test_editor_state();
    state.current_fill = FillMode::Solid;
    state.set_tool(Some(Tool::Line));
    drag(&mut state, (0.0, 0.0), (5.0, 5.0));
    assert_eq!(state.shapes()[0].fill, FillMode::None);
}

#[test]
fn test_release_without_press_or_tool_does_nothing() {
    let mut state = create_test_editor_state();
    state.on_mouse_release(MouseButton::Left, 5.0, 5.0);
    drag(&mut state, (0.0, 0.0), (5.0, 5.0));
    assert!(state.shapes().is_empty());

    state.set_tool(Some(Tool::Line));
    state.on_mouse_press(MouseButton::Right, 0.0, 0.0);
    state.on_mouse_release(MouseButton::Right, 9.0, 9.0);
    assert!(state.shapes().is_empty());
}

#[test]
fn test_select_overlapping_circles_returns_topmost() {
    let mut state = create_test_editor_state();
    state.add_shape(Shape::circle(100.0, 90.0, 10.0, RED, 2, FillMode::None));
    state.add_shape(Shape::circle(100.0, 110.0, 10.0, BLUE, 2, FillMode::None));

    assert_eq!(state.select_at(100.0, 100.0), Some(1));
    assert_eq!(state.selected_index(), Some(1));
}

#[test]
fn test_select_tool_click_selects_and_miss_clears() {
    let mut state = create_test_editor_state();
    state.add_shape(Shape::line(0.0, 0.0, 100.0, 0.0, RED, 1));
    state.set_tool(Some(Tool::Select));

    click(&mut state, 300.0, 300.0);
    assert_eq!(state.selected_index(), None);
    assert_eq!(state.shapes().len(), 1);

    click(&mut state, 50.0, 1.0);
    assert_eq!(state.selected_index(), Some(0));
    assert!(state.take_selection_sync().is_some());
    assert!(state.take_selection_sync().is_none());

    click(&mut state, 50.0, 50.0);
    assert_eq!(state.selected_index(), None);
}

#[test]
fn test_select_miss_drops_untaken_sync() {
    let mut state = create_test_editor_state();
    state.add_shape(Shape::line(0.0, 0.0, 100.0, 0.0, RED, 1));

    assert_eq!(state.select_at(50.0, 1.0), Some(0));
    assert_eq!(state.select_at(50.0, 50.0), None);
    assert_eq!(state.selected_index(), None);
    assert!(state.take_selection_sync().is_none());
}

#[test]
fn test_scaled_solid_circle_redraw_is_bounded_by_canvas() {
    let mut state = create_test_editor_state();
    state.canvas_size = (800, 600);
    state.add_shape(Shape::circle(400.0, 300.0, 1000.0, RED, 1, FillMode::Solid));
    state.set_affine_mode(Some(AffineMode::Scale));
    for _ in 0..8 {
        click(&mut state, 400.0, 300.0);
    }

    let commands = state.redraw();
    // Clear, one block per canvas pixel, selection outline
    assert_eq!(commands.len(), 1 + 800 * 600 + 1);

    let mut surface = PixelBuffer::new(80, 60, WHITE);
    state.render(&mut surface);
    assert_eq!(surface.pixel(0, 0), Some(RED));
    assert_eq!(surface.pixel(79, 59), Some(RED));
}

#[test]
fn test_selection_sync_resets_adjustments_and_fills_base_color() {
    let mut state = create_test_editor_state();
    state.set_lightness_brightness(40, 20);
    let mut shape = Shape::ellipse(50.0, 50.0, 20.0, 10.0, BLUE, 1, FillMode::Solid);
    shape.base_color = None;
    state.add_shape(shape);

    assert_eq!(state.select_at(70.0, 50.0), Some(0));
    assert_eq!(state.lightness_brightness(), (0, 0));
    let sync = state.take_selection_sync().unwrap();
    assert_eq!(sync.index, 0);
    assert_eq!(sync.fill, FillMode::Solid);
    assert_eq!((sync.lightness, sync.brightness), (0, 0));
    assert_eq!(sync.color, BLUE);
    assert_eq!(state.selected_shape().unwrap().base_color, Some(BLUE));
}

#[test]
fn test_recolor_sets_display_and_base_color() {
    let mut state = create_test_editor_state();
    state.add_shape(Shape::line(0.0, 0.0, 10.0, 10.0, RED, 1));
    state.set_lightness_brightness(50, 0);
    state.recolor_selected(BLUE);

    let shape = state.selected_shape().unwrap();
    assert_eq!(shape.color, BLUE);
    assert_eq!(shape.base_color, Some(BLUE));
}

#[test]
fn test_set_current_color_updates_tool_color_and_selection() {
    let mut state = create_test_editor_state();
    state.add_shape(Shape::line(0.0, 0.0, 10.0, 10.0, RED, 1));
    state.set_current_color(WHITE);
    assert_eq!(state.current_color, WHITE);
    assert_eq!(state.selected_shape().unwrap().color, WHITE);
}

#[test]
fn test_fill_change_skips_lines() {
    let mut state = create_test_editor_state();
    state.add_shape(Shape::line(0.0, 0.0, 10.0, 10.0, RED, 1));
    state.set_fill_selected(FillMode::Solid);
    assert_eq!(state.selected_shape().unwrap().fill, FillMode::None);

    state.add_shape(Shape::circle(0.0, 0.0, 10.0, RED, 1, FillMode::None));
    state.set_current_fill(FillMode::Solid);
    assert_eq!(state.selected_shape().unwrap().fill, FillMode::Solid);
    assert_eq!(state.current_fill, FillMode::Solid);
}

#[test]
fn test_lightness_brightness_is_computed_from_base() {
    let mut state = create_test_editor_state();
    let base = Color::new(100, 100, 100);
    state.add_shape(Shape::circle(0.0, 0.0, 5.0, base, 1, FillMode::None));

    state.set_lightness_brightness(50, 50);
    let first = state.selected_shape().unwrap().color;
    assert_eq!(first, Color::new(203, 203, 203));

    state.set_lightness_brightness(50, 50);
    state.set_lightness_brightness(50, 50);
    assert_eq!(state.selected_shape().unwrap().color, first);
    assert_eq!(state.selected_shape().unwrap().base_color, Some(base));

    state.reset_lightness_brightness();
    assert_eq!(state.selected_shape().unwrap().color, base);
    assert_eq!(state.lightness_brightness(), (0, 0));
}

#[test]
fn test_lightness_brightness_are_clamped() {
    let mut state = create_test_editor_state();
    state.add_shape(Shape::line(0.0, 0.0, 1.0, 1.0, Color::new(10, 20, 30), 1));
    state.set_lightness_brightness(-500, 900);
    assert_eq!(state.lightness_brightness(), (-100, 100));
    assert_eq!(state.selected_shape().unwrap().color, BLACK);
}

#[test]
fn test_affine_press_moves_selected_shape() {
    let mut state = create_test_editor_state();
    state.add_shape(Shape::circle(20.0, 20.0, 5.0, RED, 1, FillMode::None));
    state.set_affine_mode(Some(AffineMode::Move));
    assert_eq!(state.tool(), None);

    state.on_mouse_press(MouseButton::Left, 400.0, 400.0);
    assert_eq!(
        state.shapes()[0].geometry,
        Geometry::Circle {
            cx: 30.0,
            cy: 30.0,
            radius: 5.0
        }
    );
}

#[test]
fn test_affine_rotate_uses_pointer_as_pivot() {
    let mut state = create_test_editor_state();
    state.add_shape(Shape::line(10.0, 0.0, 20.0, 0.0, RED, 1));
    state.set_affine_mode(Some(AffineMode::Rotate));
    for _ in 0..6 {
        state.on_mouse_press(MouseButton::Left, 0.0, 0.0);
        state.on_mouse_release(MouseButton::Left, 0.0, 0.0);
    }

    let Geometry::Line { x1, y1, x2, y2 } = state.shapes()[0].geometry else {
        panic!("line changed kind");
    };
    // Six 15° steps make a quarter turn
    assert!(x1.abs() < 1e-9 && (y1 - 10.0).abs() < 1e-9);
    assert!(x2.abs() < 1e-9 && (y2 - 20.0).abs() < 1e-9);
    assert_eq!(state.shapes().len(), 1);
}

#[test]
fn test_affine_scale_uses_configured_factor() {
    let mut state = create_test_editor_state();
    state.transform.scale_factor = 2.0;
    state.add_shape(Shape::ellipse(0.0, 0.0, 4.0, 3.0, RED, 1, FillMode::None));
    state.apply_affine(AffineMode::Scale, (999.0, 999.0));
    assert_eq!(
        state.shapes()[0].geometry,
        Geometry::Ellipse {
            cx: 0.0,
            cy: 0.0,
            rx: 8.0,
            ry: 6.0
        }
    );
}

#[test]
fn test_operations_without_selection_are_noops() {
    let mut state = create_test_editor_state();
    state.add_shape(Shape::line(0.0, 0.0, 10.0, 0.0, RED, 1));
    state.select_at(500.0, 500.0);
    let before = state.shapes().to_vec();

    state.recolor_selected(BLUE);
    state.set_fill_selected(FillMode::Solid);
    state.apply_affine(AffineMode::Move, (0.0, 0.0));
    state.set_lightness_brightness(30, 30);
    state.delete_selected();

    assert_eq!(state.shapes(), before.as_slice());
}

#[test]
fn test_delete_removes_selection() {
    let mut state = create_test_editor_state();
    state.add_shape(Shape::line(0.0, 0.0, 10.0, 0.0, RED, 1));
    state.add_shape(Shape::line(0.0, 50.0, 10.0, 50.0, BLUE, 1));
    state.select_at(5.0, 0.0);

    state.delete_selected();
    assert_eq!(state.shapes().len(), 1);
    assert_eq!(state.shapes()[0].color, BLUE);
    assert_eq!(state.selected_index(), None);

    state.delete_selected();
    assert_eq!(state.shapes().len(), 1);
}

#[test]
fn test_tool_and_affine_mode_are_exclusive() {
    let mut state = create_test_editor_state();
    state.set_tool(Some(Tool::Circle));
    state.set_affine_mode(Some(AffineMode::Scale));
    assert_eq!(state.tool(), None);
    assert_eq!(state.affine_mode(), Some(AffineMode::Scale));

    state.set_tool(Some(Tool::Select));
    assert_eq!(state.affine_mode(), None);
    assert_eq!(state.tool(), Some(Tool::Select));
}

#[test]
fn test_shape_limit_rejects_extra_shapes() {
    let mut state = create_test_editor_state();
    state.max_shapes = 1;
    assert_eq!(state.add_shape(Shape::line(0.0, 0.0, 1.0, 1.0, RED, 1)), Some(0));
    assert_eq!(state.add_shape(Shape::line(0.0, 0.0, 2.0, 2.0, RED, 1)), None);
    assert_eq!(state.shapes().len(), 1);
}

#[test]
fn test_redraw_paints_in_order_then_outline() {
    let mut state = create_test_editor_state();
    state.add_shape(Shape::line(0.0, 0.0, 3.0, 0.0, RED, 1));
    state.add_shape(Shape::line(0.0, 1.0, 3.0, 1.0, BLUE, 1));

    let commands = state.redraw();
    assert_eq!(commands.first(), Some(&RenderCommand::Clear));
    assert_eq!(commands.len(), 1 + 4 + 4 + 1);
    assert!(matches!(
        commands[1],
        RenderCommand::FillRect { color, .. } if color == RED
    ));
    assert!(matches!(
        commands[5],
        RenderCommand::FillRect { color, .. } if color == BLUE
    ));
    let Some(RenderCommand::StrokeRect { bounds, style }) = commands.last() else {
        panic!("selection outline should be last");
    };
    assert_eq!((bounds.x, bounds.y, bounds.width, bounds.height), (-4.0, -3.0, 11.0, 8.0));
    assert_eq!(style.color, RED);
    assert_eq!(style.dash, vec![5.0, 3.0]);
}

#[test]
fn test_redraw_without_selection_has_no_outline() {
    let mut state = create_test_editor_state();
    state.add_shape(Shape::line(0.0, 0.0, 3.0, 0.0, RED, 1));
    state.select_at(90.0, 90.0);
    assert!(
        !state
            .redraw()
            .iter()
            .any(|c| matches!(c, RenderCommand::StrokeRect { .. }))
    );
}

#[test]
fn test_render_paints_surface_and_clears_flag() {
    let mut state = create_test_editor_state();
    state.set_tool(Some(Tool::Circle));
    drag(&mut state, (50.0, 50.0), (60.0, 50.0));

    let mut surface = PixelBuffer::new(120, 120, WHITE);
    state.render(&mut surface);
    assert!(!state.needs_redraw);
    assert_eq!(surface.pixel(60, 50), Some(RED));
    assert_eq!(surface.pixel(50, 50), Some(WHITE));
}

#[test]
fn test_from_config_applies_settings() {
    let config = Config::from_toml_str(
        r##"
        [drawing]
        default_color = "#00ff00"
        default_stroke_width = 4
        default_fill = "solid"

        [transform]
        move_offset = 25.0

        [selection]
        margin = 6.0
        color = "blue"

        [canvas]
        max_shapes = 3
        "##,
    )
    .unwrap();
    let mut state = EditorState::from_config(&config);
    assert_eq!(state.current_color, Color::new(0, 255, 0));
    assert_eq!(state.current_stroke_width, 4);
    assert_eq!(state.current_fill, FillMode::Solid);
    assert_eq!(state.selection_margin, 6.0);
    assert_eq!(state.selection_style.color, BLUE);
    assert_eq!(state.max_shapes, 3);
    assert_eq!(state.canvas_size, (800, 600));

    state.add_shape(Shape::line(0.0, 0.0, 1.0, 1.0, RED, 1));
    state.apply_affine(AffineMode::Move, (0.0, 0.0));
    assert_eq!(
        state.shapes()[0].geometry,
        Geometry::Line {
            x1: 25.0,
            y1: 25.0,
            x2: 26.0,
            y2: 26.0
        }
    );
}
