//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game engines that drive an 8x16 LED matrix. It
//! has no dependencies on the terminal or any other I/O, making it:
//!
//! - **Deterministic**: Same seed and same `now_ms` sequence produce identical games
//! - **Testable**: Engines take time as an argument instead of reading a clock
//! - **Portable**: Every engine renders to a plain [`RowBitmap`](types::RowBitmap)
//!
//! # Module Structure
//!
//! - [`snake`]: Age-encoded snake on a wrapping board
//! - [`pieces`]: Tetromino orientation catalog and rotation table
//! - [`board`]: Tetris bitboard; the single collision authority
//! - [`tetris`]: Tetris phase machine (falling, landed, clearing, game over)
//! - [`paint`]: Cursor-driven pixel painting
//! - [`game`]: The [`MatrixGame`] trait all engines implement
//! - [`console`]: Selects one engine and routes input and ticks to it
//! - [`rng`]: Small LCG used for spawns and food placement
//! - [`clock`]: Millisecond time source for the polling loop
//!
//! # Example
//!
//! ```
//! use led_gamer_core::GameConsole;
//! use led_gamer_types::{GameAction, GameKind};
//!
//! let mut console = GameConsole::new(12345);
//! console.select(GameKind::Tetris, 0);
//!
//! console.apply_action(GameAction::Left, 0);
//! console.apply_action(GameAction::Primary, 0);
//! console.run(16);
//!
//! let picture = console.render();
//! assert!(picture.iter().any(|&row| row != 0));
//! ```
//!
//! # Timing
//!
//! Nothing here sleeps. The front end polls at its frame rate and calls
//! `run(now_ms)`; each engine decides whether enough time has passed for its
//! next step.

pub mod board;
pub mod clock;
pub mod console;
pub mod game;
pub mod paint;
pub mod pieces;
pub mod rng;
pub mod snake;
pub mod tetris;

pub use led_gamer_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use clock::{Clock, MonotonicClock};
pub use console::GameConsole;
pub use game::MatrixGame;
pub use paint::PaintGame;
pub use pieces::ShapeId;
pub use rng::SimpleRng;
pub use snake::{SnakeGame, SnakeStatus};
pub use tetris::{Phase, Piece, TetrisGame};
