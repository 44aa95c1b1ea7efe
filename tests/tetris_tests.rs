//! Tetris engine tests through the public API

use led_gamer::core::{MatrixGame, Phase, TetrisGame};
use led_gamer::types::{GameAction, PieceKind, FULL_ROW, SPAWN_X, SPAWN_Y};

fn started(seed: u32) -> TetrisGame {
    let mut game = TetrisGame::new(seed);
    game.init(0);
    game
}

/// Spawn an O, shift it by `dx`, drop it and let it lock at `now`.
fn place_o(game: &mut TetrisGame, dx: i8, now: u64) {
    assert!(game.spawn_piece(PieceKind::O));
    assert!(game.move_piece(dx, 0));
    assert!(game.drop_piece());
    assert!(game.run(now));
}

fn lit(rows: &[u8]) -> u32 {
    rows.iter().map(|r| r.count_ones()).sum()
}

#[test]
fn test_o_piece_scenario() {
    let mut game = started(1);
    assert!(game.spawn_piece(PieceKind::O));
    let piece = game.current_piece().unwrap();
    assert_eq!((piece.x, piece.y), (SPAWN_X, SPAWN_Y));
    assert_eq!(piece.shape.rows(), [0, 0, 0b0001_1000, 0b0001_1000]);

    assert!(game.move_piece(0, 1));
    assert!(game.move_piece(0, 1));

    loop {
        let y = game.current_piece().unwrap().y;
        assert_eq!(game.check_if_landed(), y == 12, "y = {}", y);
        if y == 12 {
            break;
        }
        assert!(game.move_piece(0, 1));
    }
    assert_eq!(game.board().active()[14], 0b0001_1000);
    assert_eq!(game.board().active()[15], 0b0001_1000);
}

#[test]
fn test_rotation_against_wall_is_reverted() {
    let mut game = started(1);
    assert!(game.spawn_piece(PieceKind::I));
    assert!(game.rotate_piece());
    while game.move_piece(1, 0) {}

    let piece = game.current_piece();
    let active = *game.board().active();
    assert!(!game.rotate_piece());
    assert_eq!(game.current_piece(), piece);
    assert_eq!(*game.board().active(), active);
}

#[test]
fn test_two_line_clear() {
    let mut game = started(5);
    place_o(&mut game, -3, 10);
    place_o(&mut game, -1, 20);
    place_o(&mut game, 1, 30);
    assert_eq!(game.total_lines_cleared(), 0);

    place_o(&mut game, 3, 40);
    assert!(matches!(game.phase(), Phase::Clearing { .. }));
    assert_eq!(game.board().dead()[14], FULL_ROW);
    assert_eq!(game.board().dead()[15], FULL_ROW);

    // Flash: dark now, lit after 100ms.
    assert_eq!(game.active_board()[15], 0);
    game.run(140);
    assert_eq!(game.active_board()[15], FULL_ROW);
    assert_eq!(game.active_board(), game.active_board());

    game.run(240);
    game.run(340);
    game.run(440);
    assert_eq!(game.total_lines_cleared(), 2);
    assert_eq!(*game.phase(), Phase::Falling);
    assert_eq!(lit(&game.board().dead()[..]), 0);
    assert_eq!(game.time_interval_ms(), 770);
}

#[test]
fn test_grace_period_allows_sliding() {
    let mut game = started(5);
    assert!(game.spawn_piece(PieceKind::O));
    while game.move_piece(0, 1) {}

    game.run(100);
    assert_eq!(*game.phase(), Phase::Landed { lock_at_ms: 500 });
    assert!(game.move_piece(-1, 0));
    assert!(game.rotate_piece());
    assert_eq!(lit(&game.board().dead()[..]), 0);

    assert!(game.run(500));
    assert_eq!(lit(&game.board().dead()[..]), 4);
    assert_eq!(game.board().dead()[15], 0b0011_0000);
}

#[test]
fn test_stacking_to_the_top_ends_game() {
    let mut game = started(5);
    let mut now = 0;
    for _ in 0..8 {
        if !game.spawn_piece(PieceKind::O) {
            break;
        }
        game.drop_piece();
        now += 10;
        game.run(now);
    }

    assert!(game.is_over());
    assert_eq!(*game.phase(), Phase::GameOver);
    assert!(game.current_piece().is_none());
    let frozen = *game.board().active();
    assert!(!game.apply_action(GameAction::Left));
    assert!(!game.run(now + 60_000));
    assert_eq!(*game.board().active(), frozen);

    game.init(now);
    assert!(!game.is_over());
    assert_eq!(game.total_lines_cleared(), 0);
}

#[test]
fn test_actions() {
    let mut game = started(5);
    assert!(game.spawn_piece(PieceKind::T));
    assert!(game.apply_action(GameAction::Left));
    assert_eq!(game.current_piece().unwrap().x, -1);
    assert!(game.apply_action(GameAction::Down));
    assert_eq!(game.current_piece().unwrap().y, SPAWN_Y + 1);
    assert!(game.apply_action(GameAction::Up));
    assert!(game.apply_action(GameAction::Primary));
    assert!(matches!(game.phase(), Phase::Landed { .. }));
    assert!(!game.apply_action(GameAction::Pause));
}

#[test]
fn test_render_matches_active_board_while_falling() {
    let mut game = started(8);
    game.run(800);
    assert_eq!(game.render(), *game.board().active());
    assert_eq!(game.render(), game.active_board());
}
