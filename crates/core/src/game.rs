//! The shape every matrix game shares.
//!
//! A game owns a fixed-size board, advances on `run(now_ms)` and exposes its
//! current picture as a [`RowBitmap`]. Front ends (the terminal runner, the
//! console) only talk to games through this trait.

use crate::types::{GameAction, GameKind, RowBitmap};

pub trait MatrixGame {
    /// Which game this is
    fn kind(&self) -> GameKind;

    /// Reset the board and start a fresh round at `now_ms`
    fn init(&mut self, now_ms: u64);

    /// Advance timers; returns true if the picture may have changed
    fn run(&mut self, now_ms: u64) -> bool;

    /// Apply a button press; returns true if it changed the game
    fn apply_action(&mut self, action: GameAction) -> bool;

    /// Current picture, one mask per row, MSB = leftmost column
    fn render(&self) -> RowBitmap;

    /// True once the round has ended and only `init` can continue it
    fn is_over(&self) -> bool;

    /// Game-specific score shown by front ends
    fn score(&self) -> u32;
}
