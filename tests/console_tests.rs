//! Console tests - game selection, routing and pause

use led_gamer::core::{GameConsole, Phase};
use led_gamer::types::{GameAction, GameKind};

#[test]
fn test_switching_games_starts_a_fresh_round() {
    let mut console = GameConsole::new(77);
    console.select(GameKind::Paint, 0);
    console.apply_action(GameAction::Primary, 0);
    assert_eq!(console.score(), 1);

    console.select(GameKind::Tetris, 10);
    assert_eq!(console.selected(), GameKind::Tetris);
    assert_eq!(*console.tetris().phase(), Phase::Falling);
    assert_eq!(console.score(), 0);

    console.select(GameKind::Paint, 20);
    assert_eq!(console.score(), 0);
}

#[test]
fn test_render_follows_selection() {
    let mut console = GameConsole::new(77);
    console.select(GameKind::Snake, 0);
    assert_eq!(console.render(), console.snake().active_canvas());

    console.select(GameKind::Tetris, 0);
    assert_eq!(console.render(), console.tetris().active_board());

    console.select(GameKind::Paint, 0);
    assert_eq!(console.render(), console.paint().active_canvas());
}

#[test]
fn test_pause_blocks_moves_and_ticks() {
    let mut console = GameConsole::new(77);
    console.select(GameKind::Tetris, 0);
    let before = console.tetris().current_piece();

    console.apply_action(GameAction::Pause, 0);
    assert!(!console.apply_action(GameAction::Left, 5));
    assert!(!console.run(5_000));
    assert_eq!(console.tetris().current_piece(), before);
    assert_eq!(console.render(), console.tetris().active_board());

    console.apply_action(GameAction::Pause, 5_000);
    // The piece has not fallen during the pause.
    assert!(!console.run(5_799));
    assert!(console.run(5_800));
}

#[test]
fn test_restart_after_game_over() {
    let mut console = GameConsole::new(3);
    console.select(GameKind::Tetris, 0);
    let mut now = 0;
    while !console.is_over() && now < 100_000 {
        console.apply_action(GameAction::Primary, now);
        now += 10;
        console.run(now);
    }
    assert!(console.is_over());

    assert!(console.apply_action(GameAction::Restart, now));
    assert!(!console.is_over());
    assert_eq!(console.selected(), GameKind::Tetris);
}
