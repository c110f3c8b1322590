//! Tests for scene-object lifecycle: live-count invariants across
//! moves, rounds, and theme toggles, and the no-leak guarantee.

use tictactoe3d::{
    GameEngine, HeadlessBackend, Position, SceneHandle, SceneRole, Theme,
};

fn engine() -> GameEngine<HeadlessBackend> {
    let mut engine = GameEngine::new(HeadlessBackend::new());
    engine.handle_resize(800, 600);
    engine
}

fn position(index: usize) -> Position {
    Position::from_index(index).expect("valid index")
}

/// Counts tagged live objects and checks them against logical state.
fn assert_scene_consistent(engine: &GameEngine<HeadlessBackend>) {
    let scene = engine.scene();
    assert_eq!(scene.grid_cell_count(), 9);
    assert_eq!(scene.piece_count(), engine.board().occupied_count());
    assert!(scene.winning_line_count() <= 1);

    let backend = scene.backend();
    assert_eq!(backend.live_count(), scene.objects().len());
    assert_eq!(
        backend.created_total(),
        backend.live_count() + backend.disposed_total(),
        "every created object must be live or disposed exactly once"
    );
}

fn grid_and_piece_handles(engine: &GameEngine<HeadlessBackend>) -> Vec<SceneHandle> {
    engine
        .scene()
        .objects()
        .iter()
        .filter(|obj| {
            matches!(obj.role(), SceneRole::GridCell(_) | SceneRole::Piece(_))
        })
        .map(|obj| obj.handle())
        .collect()
}

#[test]
fn test_scene_tracks_every_move() {
    let mut engine = engine();
    assert_scene_consistent(&engine);

    for index in [0, 3, 1, 4] {
        engine.make_move(position(index)).expect("legal move");
        assert_scene_consistent(&engine);
        assert_eq!(engine.scene().winning_line_count(), 0);
    }

    engine.make_move(position(2)).expect("winning move");
    assert_scene_consistent(&engine);
    assert_eq!(engine.scene().winning_line_count(), 1);
}

#[test]
fn test_draw_has_no_winning_line() {
    let mut engine = engine();
    for index in [0, 1, 2, 3, 4, 6, 5, 8, 7] {
        engine.make_move(position(index)).expect("legal move");
    }
    assert_scene_consistent(&engine);
    assert_eq!(engine.scene().piece_count(), 9);
    assert_eq!(engine.scene().winning_line_count(), 0);
}

#[test]
fn test_new_round_clears_pieces_and_line() {
    let mut engine = engine();
    for index in [0, 3, 1, 4, 2] {
        engine.make_move(position(index)).expect("legal move");
    }
    assert_eq!(engine.scene().winning_line_count(), 1);

    engine.new_round();

    assert_scene_consistent(&engine);
    assert_eq!(engine.scene().piece_count(), 0);
    assert_eq!(engine.scene().winning_line_count(), 0);
}

#[test]
fn test_theme_toggle_replaces_object_identities() {
    let mut engine = engine();
    engine.make_move(Position::Center).expect("legal move");
    engine.make_move(Position::TopLeft).expect("legal move");

    let before = grid_and_piece_handles(&engine);
    engine.toggle_theme();
    let after = grid_and_piece_handles(&engine);

    assert_eq!(before.len(), after.len());
    for handle in &after {
        assert!(
            !before.contains(handle),
            "theme toggle must rebuild objects, not reuse {handle:?}"
        );
    }
    assert_scene_consistent(&engine);
}

#[test]
fn test_no_leaks_across_a_full_match() {
    let mut engine = engine();

    // Round 1: X wins.
    for index in [0, 3, 1, 4, 2] {
        engine.make_move(position(index)).expect("legal move");
    }
    engine.toggle_theme();
    engine.new_round();

    // Round 2: draw, with a theme flip mid-round.
    for index in [0, 1, 2, 3] {
        engine.make_move(position(index)).expect("legal move");
    }
    engine.toggle_theme();
    for index in [4, 6, 5, 8, 7] {
        engine.make_move(position(index)).expect("legal move");
    }
    engine.reset_all();

    assert_scene_consistent(&engine);
    assert_eq!(engine.scene().piece_count(), 0);
    assert_eq!(engine.theme(), Theme::Dark);
}
