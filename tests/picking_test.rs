//! Tests for pointer picking: screen-space events through the camera
//! to board cells.

use tictactoe3d::{
    pick_cell, GameEngine, HeadlessBackend, Player, Position, Square, Viewport,
};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;

fn engine() -> GameEngine<HeadlessBackend> {
    let mut engine = GameEngine::new(HeadlessBackend::new());
    engine.handle_resize(WIDTH, HEIGHT);
    engine
}

/// Screen coordinates of a cell center under the engine's camera.
fn screen_coords(engine: &GameEngine<HeadlessBackend>, pos: Position) -> (f32, f32) {
    let center = engine.scene().layout().cell_center(pos).extend(0.0);
    let ndc = engine.camera().world_to_ndc(center);
    (
        (ndc.x + 1.0) / 2.0 * WIDTH as f32,
        (1.0 - ndc.y) / 2.0 * HEIGHT as f32,
    )
}

#[test]
fn test_every_cell_is_pickable_at_its_center() {
    for pos in Position::ALL {
        let mut engine = engine();
        let (x, y) = screen_coords(&engine, pos);

        assert_eq!(engine.pointer_down(x, y), Some(pos), "cell {pos}");
        assert_eq!(engine.history(), &[pos]);
        assert_eq!(engine.board().get(pos), Square::Occupied(Player::X));
    }
}

#[test]
fn test_pointer_miss_is_a_no_op() {
    let mut engine = engine();

    // Top-left corner of the viewport is well off the board.
    assert_eq!(engine.pointer_down(1.0, 1.0), None);
    assert_eq!(engine.board().occupied_count(), 0);
    assert_eq!(engine.to_move(), Player::X);
}

#[test]
fn test_piece_geometry_never_steals_the_pick() {
    let mut engine = engine();
    engine.make_move(Position::Center).expect("legal move");

    // The X piece sits in front of the center cell, so the ray hits it
    // first; the pick must still resolve to the cell behind it.
    let cells = engine.scene().grid_cells();
    let camera = *engine.camera();
    let (x, y) = screen_coords(&engine, Position::Center);
    let picked = pick_cell(
        engine.scene().backend(),
        &camera,
        Viewport::new(WIDTH, HEIGHT),
        &cells,
        x,
        y,
    );
    assert_eq!(picked, Some(Position::Center));

    // Applying the pick is then rejected as occupied, changing nothing.
    assert_eq!(engine.pointer_down(x, y), None);
    assert_eq!(engine.board().occupied_count(), 1);
    assert_eq!(engine.to_move(), Player::O);
}

#[test]
fn test_pointer_before_first_resize_is_dropped() {
    let mut engine = GameEngine::new(HeadlessBackend::new());
    assert_eq!(engine.pointer_down(400.0, 300.0), None);
    assert_eq!(engine.board().occupied_count(), 0);
}

#[test]
fn test_pointer_ignored_after_terminal_result() {
    let mut engine = engine();
    for index in [0, 3, 1, 4, 2] {
        let pos = Position::from_index(index).expect("valid index");
        engine.make_move(pos).expect("legal move");
    }

    let (x, y) = screen_coords(&engine, Position::BottomRight);
    assert_eq!(engine.pointer_down(x, y), None);
    assert_eq!(engine.board().occupied_count(), 5);
}
