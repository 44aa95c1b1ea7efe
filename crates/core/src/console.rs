//! Console module - the game selector in front of the three engines
//!
//! The console owns one engine of each kind and forwards the tick and the
//! buttons to whichever is selected. It also owns pause: while paused the
//! engines see a frozen clock, so timers resume where they stopped instead
//! of firing a burst of catch-up moves.

use log::info;

use crate::game::MatrixGame;
use crate::paint::PaintGame;
use crate::snake::SnakeGame;
use crate::tetris::TetrisGame;
use crate::types::{GameAction, GameKind, RowBitmap};

pub struct GameConsole {
    snake: SnakeGame,
    tetris: TetrisGame,
    paint: PaintGame,
    selected: GameKind,
    /// Wall time at which the current pause began
    paused_at_ms: Option<u64>,
    /// Total wall time spent paused; subtracted before engines see the clock
    paused_total_ms: u64,
}

impl GameConsole {
    /// Create a console with every engine seeded from `seed`.
    ///
    /// Nothing is started until [`GameConsole::select`] is called.
    pub fn new(seed: u32) -> Self {
        Self {
            snake: SnakeGame::new(seed),
            tetris: TetrisGame::new(seed.rotate_left(16) ^ 0x9E37_79B9),
            paint: PaintGame::new(),
            selected: GameKind::Tetris,
            paused_at_ms: None,
            paused_total_ms: 0,
        }
    }

    fn game_time(&self, now_ms: u64) -> u64 {
        let frozen = self.paused_at_ms.unwrap_or(now_ms).min(now_ms);
        frozen.saturating_sub(self.paused_total_ms)
    }

    fn game_mut(&mut self) -> &mut dyn MatrixGame {
        match self.selected {
            GameKind::Snake => &mut self.snake,
            GameKind::Tetris => &mut self.tetris,
            GameKind::Paint => &mut self.paint,
        }
    }

    /// The selected engine
    pub fn game(&self) -> &dyn MatrixGame {
        match self.selected {
            GameKind::Snake => &self.snake,
            GameKind::Tetris => &self.tetris,
            GameKind::Paint => &self.paint,
        }
    }

    /// Switch to `kind` and start a fresh round of it.
    pub fn select(&mut self, kind: GameKind, now_ms: u64) {
        self.selected = kind;
        self.paused_at_ms = None;
        let t = self.game_time(now_ms);
        self.game_mut().init(t);
        info!("console: selected {}", kind.as_str());
    }

    /// Handle one button press.
    ///
    /// Returns true if the picture or the console state changed.
    pub fn apply_action(&mut self, action: GameAction, now_ms: u64) -> bool {
        match action {
            GameAction::Restart => {
                self.select(self.selected, now_ms);
                true
            }
            GameAction::Pause => {
                self.toggle_pause(now_ms);
                true
            }
            _ if self.is_paused() => false,
            _ => self.game_mut().apply_action(action),
        }
    }

    fn toggle_pause(&mut self, now_ms: u64) {
        match self.paused_at_ms.take() {
            Some(started) => {
                self.paused_total_ms += now_ms.saturating_sub(started);
                info!("console: resumed");
            }
            None => {
                self.paused_at_ms = Some(now_ms);
                info!("console: paused");
            }
        }
    }

    /// Tick the selected engine. Does nothing while paused.
    pub fn run(&mut self, now_ms: u64) -> bool {
        if self.is_paused() {
            return false;
        }
        let t = self.game_time(now_ms);
        self.game_mut().run(t)
    }

    pub fn render(&self) -> RowBitmap {
        self.game().render()
    }

    pub fn selected(&self) -> GameKind {
        self.selected
    }

    pub fn is_paused(&self) -> bool {
        self.paused_at_ms.is_some()
    }

    pub fn is_over(&self) -> bool {
        self.game().is_over()
    }

    pub fn score(&self) -> u32 {
        self.game().score()
    }

    pub fn snake(&self) -> &SnakeGame {
        &self.snake
    }

    pub fn tetris(&self) -> &TetrisGame {
        &self.tetris
    }

    pub fn paint(&self) -> &PaintGame {
        &self.paint
    }
}
