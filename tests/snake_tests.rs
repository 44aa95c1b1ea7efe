//! Snake engine tests through the public API

use led_gamer::core::{MatrixGame, SnakeGame};
use led_gamer::types::{Direction, GameAction, BOARD_HEIGHT, BOARD_WIDTH};

/// A game with the head at `head`, whose food is not on `avoid`.
fn game_at(head: (u8, u8), direction: Direction, avoid: &[(u8, u8)]) -> SnakeGame {
    for seed in 1..1000 {
        let mut game = SnakeGame::new(seed);
        game.init_at(head, direction, 0);
        match game.food() {
            Some(food) if avoid.contains(&food) => continue,
            _ => return game,
        }
    }
    panic!("no seed keeps the food off the path");
}

fn food_cells(game: &SnakeGame) -> usize {
    game.cells().iter().filter(|&&c| c == game.food_marker()).count()
}

#[test]
fn test_scenario_first_move_right() {
    let mut game = game_at((4, 6), Direction::Right, &[(5, 6)]);
    assert_eq!(game.cell(2, 6), Some(1));
    assert_eq!(game.cell(3, 6), Some(2));
    assert_eq!(game.cell(4, 6), Some(3));

    // 296ms delay for length 3; the move needs strictly more.
    assert!(!game.run(296));
    assert!(game.run(297));

    assert_eq!(game.head(), (5, 6));
    assert_eq!(game.cell(5, 6), Some(3));
    assert_eq!(game.cell(4, 6), Some(2));
    assert_eq!(game.cell(3, 6), Some(1));
    assert_eq!(game.cell(2, 6), Some(0));
}

#[test]
fn test_one_food_and_aging_invariant() {
    let mut game = SnakeGame::new(2024);
    game.init(0);
    let mut now = 0;
    let turns = [Direction::Up, Direction::Left, Direction::Down, Direction::Right];

    for i in 0..500usize {
        if !game.is_running() {
            break;
        }
        let before: Vec<u8> = game.cells().to_vec();
        let length_before = game.len();
        if i % 7 == 0 {
            game.change_direction(turns[(i / 7) % 4]);
        }
        now += 1000;
        assert!(game.run(now));

        assert!(food_cells(&game) <= 1);
        if game.is_running() && game.len() == length_before {
            // Every body cell aged by exactly one; the new head holds the length.
            for (idx, (&old, &new)) in before.iter().zip(game.cells()).enumerate() {
                let (x, y) = ((idx % 8) as u8, (idx / 8) as u8);
                if (x, y) == game.head() {
                    assert_eq!(new, game.len());
                } else if old >= 1 && old <= length_before {
                    assert_eq!(new, old - 1);
                }
            }
        }
    }
}

#[test]
fn test_head_stays_in_bounds() {
    let mut game = SnakeGame::new(9);
    game.init(0);
    let mut now = 0;
    for _ in 0..300 {
        now += 1000;
        game.run(now);
        let (x, y) = game.head();
        assert!(x < BOARD_WIDTH && y < BOARD_HEIGHT);
    }
}

#[test]
fn test_wrap_all_edges() {
    let cases = [
        ((7, 5), Direction::Right, (0, 5)),
        ((0, 5), Direction::Left, (7, 5)),
        ((3, 0), Direction::Up, (3, 15)),
        ((3, 15), Direction::Down, (3, 0)),
    ];
    for (head, direction, expected) in cases {
        let mut game = game_at(head, direction, &[expected]);
        assert!(game.run(1000));
        assert_eq!(game.head(), expected);
        assert!(game.is_running());
    }
}

#[test]
fn test_reverse_is_ignored_and_latch_holds() {
    let mut game = game_at((4, 6), Direction::Right, &[(5, 6), (4, 5), (4, 7)]);
    assert!(!game.change_direction(Direction::Left));
    assert!(game.change_direction(Direction::Up));
    assert!(!game.change_direction(Direction::Left));
    assert_eq!(game.direction(), Direction::Up);

    assert!(game.run(1000));
    assert_eq!(game.head(), (4, 5));
    assert!(game.change_direction(Direction::Left));
}

#[test]
fn test_canvas_is_idempotent() {
    let mut game = SnakeGame::new(3);
    game.init(0);
    assert_eq!(game.active_canvas(), game.active_canvas());
    let lit: u32 = game.active_canvas().iter().map(|r| r.count_ones()).sum();
    assert_eq!(lit, 4);
}

#[test]
fn test_actions_map_to_turns() {
    let mut game = game_at((4, 6), Direction::Right, &[]);
    assert!(game.apply_action(GameAction::Down));
    assert_eq!(game.direction(), Direction::Down);
    assert!(!game.apply_action(GameAction::Primary));
}
