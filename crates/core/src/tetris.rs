//! Tetris module - falling-piece state machine over the bitboard
//!
//! The game is a timed state machine polled by [`TetrisGame::run`]:
//!
//! ```text
//! Falling ──landed──▶ Landed ──deadline, still landed──▶ commit ─┬─ full rows ─▶ Clearing ─┐
//!    ▲                  │                                         └─ none ──────▶ spawn ◀───┘
//!    └── moved off ─────┘                                                           │
//!                                                                  spawn blocked ──▶ GameOver
//! ```
//!
//! Waiting never blocks: the landing grace period and the line-clear flash
//! are phases with a deadline, so input and rendering keep running while
//! they elapse.

use log::{debug, info};

use crate::board::{Board, FullRows};
use crate::game::MatrixGame;
use crate::pieces::ShapeId;
use crate::rng::SimpleRng;
use crate::types::{
    GameAction, GameKind, PieceKind, RowBitmap, LANDING_GRACE_MS, LINE_FLASH_CYCLES,
    LINE_FLASH_MS, SPAWN_X, SPAWN_Y, TETRIS_BASE_INTERVAL_MS, TETRIS_INTERVAL_STEP_MS,
    TETRIS_MIN_INTERVAL_MS,
};

/// Fall interval after `lines` cleared lines
///
/// # Examples
///
/// ```
/// use led_gamer_core::tetris::fall_interval_ms;
///
/// assert_eq!(fall_interval_ms(0), 800);
/// assert_eq!(fall_interval_ms(10), 650);
/// assert_eq!(fall_interval_ms(1000), 100);
/// ```
pub fn fall_interval_ms(lines: u32) -> u32 {
    TETRIS_BASE_INTERVAL_MS
        .saturating_sub(lines.saturating_mul(TETRIS_INTERVAL_STEP_MS))
        .max(TETRIS_MIN_INTERVAL_MS)
}

/// The falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub shape: ShapeId,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// A new piece of `kind` at the spawn offset
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            shape: ShapeId::spawn(kind),
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.shape.kind()
    }
}

/// Where the game loop stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Created but `init` not called yet
    Idle,
    /// The piece drops one row every fall interval
    Falling,
    /// The piece rests on something; input is still accepted until `lock_at_ms`
    Landed { lock_at_ms: u64 },
    /// Full rows flash before they are removed
    Clearing {
        rows: FullRows,
        /// Flash half-cycles completed so far
        step: u8,
        next_step_ms: u64,
    },
    GameOver,
}

/// Complete Tetris state
#[derive(Debug, Clone)]
pub struct TetrisGame {
    board: Board,
    piece: Option<Piece>,
    phase: Phase,
    total_lines_cleared: u32,
    pieces_spawned: u32,
    last_fall_ms: u64,
    /// Latest time seen by `init`/`run`; commands have no clock of their own.
    now_ms: u64,
    move_disabled: bool,
    rng: SimpleRng,
}

impl TetrisGame {
    /// Create an idle game; call [`TetrisGame::init`] to start playing.
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            piece: None,
            phase: Phase::Idle,
            total_lines_cleared: 0,
            pieces_spawned: 0,
            last_fall_ms: 0,
            now_ms: 0,
            move_disabled: true,
            rng: SimpleRng::new(seed),
        }
    }

    /// Clear the board and spawn the first piece.
    pub fn init(&mut self, now_ms: u64) {
        self.board.clear();
        self.piece = None;
        self.total_lines_cleared = 0;
        self.pieces_spawned = 0;
        self.now_ms = now_ms;
        self.last_fall_ms = now_ms;
        self.move_disabled = false;
        self.phase = Phase::Falling;
        info!("tetris: new round");
        self.spawn_random();
    }

    fn spawn_random(&mut self) -> bool {
        let kind = self.rng.pick(&PieceKind::ALL).unwrap_or(PieceKind::O);
        self.spawn_piece(kind)
    }

    /// Put a new piece of `kind` at the spawn offset.
    ///
    /// Any current piece is dropped from the picture first. If the new piece
    /// collides with settled blocks the game is over. Refused while rows are
    /// clearing or after game over.
    pub fn spawn_piece(&mut self, kind: PieceKind) -> bool {
        if !matches!(
            self.phase,
            Phase::Idle | Phase::Falling | Phase::Landed { .. }
        ) {
            return false;
        }

        let piece = Piece::spawn(kind);
        if !self.board.merge(piece.shape.rows(), piece.x, piece.y) {
            self.piece = None;
            self.phase = Phase::GameOver;
            self.move_disabled = true;
            info!(
                "tetris: game over after {} pieces, {} lines",
                self.pieces_spawned, self.total_lines_cleared
            );
            return false;
        }

        self.piece = Some(piece);
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
        self.phase = Phase::Falling;
        self.move_disabled = false;
        self.last_fall_ms = self.now_ms;
        debug!("tetris: spawned {:?}", kind);
        true
    }

    /// Advance timers and the phase machine.
    ///
    /// Returns true if the picture may have changed.
    pub fn run(&mut self, now_ms: u64) -> bool {
        self.now_ms = self.now_ms.max(now_ms);
        let now_ms = self.now_ms;

        match self.phase.clone() {
            Phase::Idle | Phase::GameOver => false,
            Phase::Falling => {
                if self.check_if_landed() {
                    self.phase = Phase::Landed {
                        lock_at_ms: now_ms + LANDING_GRACE_MS as u64,
                    };
                    return false;
                }
                if now_ms.saturating_sub(self.last_fall_ms) >= self.time_interval_ms() as u64 {
                    self.last_fall_ms = now_ms;
                    return self.move_piece(0, 1);
                }
                false
            }
            Phase::Landed { lock_at_ms } => {
                if now_ms < lock_at_ms {
                    return false;
                }
                if self.check_if_landed() {
                    self.lock_piece(now_ms);
                } else {
                    // The player slid the piece off its ledge.
                    self.phase = Phase::Falling;
                    self.last_fall_ms = now_ms;
                }
                true
            }
            Phase::Clearing {
                rows,
                step,
                next_step_ms,
            } => {
                if now_ms < next_step_ms {
                    return false;
                }
                let step = step + 1;
                if step >= LINE_FLASH_CYCLES * 2 {
                    self.finish_clearing(rows.len() as u32);
                } else {
                    self.phase = Phase::Clearing {
                        rows,
                        step,
                        next_step_ms: now_ms + LINE_FLASH_MS as u64,
                    };
                }
                true
            }
        }
    }

    /// Settle the current piece and either start clearing or spawn the next.
    fn lock_piece(&mut self, now_ms: u64) {
        let Some(piece) = self.piece.take() else {
            return;
        };
        self.board.merge(piece.shape.rows(), piece.x, piece.y);
        self.board.commit();
        debug!("tetris: locked {:?} at ({}, {})", piece.kind(), piece.x, piece.y);

        let rows = self.board.full_rows();
        if rows.is_empty() {
            self.spawn_random();
            return;
        }

        debug!("tetris: {} full rows {:?}", rows.len(), rows.as_slice());
        self.move_disabled = true;
        self.phase = Phase::Clearing {
            rows,
            step: 0,
            next_step_ms: now_ms + LINE_FLASH_MS as u64,
        };
    }

    fn finish_clearing(&mut self, expected: u32) {
        let cleared = self.board.clear_lines().len() as u32;
        debug_assert_eq!(cleared, expected);
        self.total_lines_cleared += cleared;
        debug!(
            "tetris: cleared {} rows, total {}, interval {}ms",
            cleared,
            self.total_lines_cleared,
            self.time_interval_ms()
        );
        self.phase = Phase::Falling;
        self.spawn_random();
    }

    /// Shift the piece by `(dx, dy)`.
    ///
    /// Rejected moves leave the piece and the picture exactly as they were.
    pub fn move_piece(&mut self, dx: i8, dy: i8) -> bool {
        if self.move_disabled {
            return false;
        }
        let Some(piece) = self.piece else {
            return false;
        };

        let moved = Piece {
            x: piece.x + dx,
            y: piece.y + dy,
            ..piece
        };
        self.place_or_restore(piece, moved)
    }

    /// Turn the piece a quarter clockwise in place. No wall kicks.
    pub fn rotate_piece(&mut self) -> bool {
        if self.move_disabled {
            return false;
        }
        let Some(piece) = self.piece else {
            return false;
        };

        let turned = Piece {
            shape: piece.shape.rotated(),
            ..piece
        };
        self.place_or_restore(piece, turned)
    }

    /// Move the piece down as far as it goes; the next `run` commits it
    /// without waiting for the landing grace period.
    pub fn drop_piece(&mut self) -> bool {
        if self.move_disabled || self.piece.is_none() {
            return false;
        }
        while self.move_piece(0, 1) {}
        self.phase = Phase::Landed {
            lock_at_ms: self.now_ms,
        };
        true
    }

    fn place_or_restore(&mut self, current: Piece, next: Piece) -> bool {
        if self.board.merge(next.shape.rows(), next.x, next.y) {
            self.piece = Some(next);
            return true;
        }
        self.board.merge(current.shape.rows(), current.x, current.y);
        false
    }

    /// True if the piece could not move one row further down
    pub fn check_if_landed(&self) -> bool {
        match self.piece {
            Some(piece) => !self.board.fits(piece.shape.rows(), piece.x, piece.y + 1),
            None => false,
        }
    }

    /// Current fall interval
    pub fn time_interval_ms(&self) -> u32 {
        fall_interval_ms(self.total_lines_cleared)
    }

    /// The picture for the display driver.
    ///
    /// While rows are clearing they are blanked on the off half of each flash.
    pub fn active_board(&self) -> RowBitmap {
        let mut out = *self.board.active();
        if let Phase::Clearing { rows, step, .. } = &self.phase {
            // Even steps are the dark half of a flash cycle.
            if step % 2 == 0 {
                for &y in rows.iter() {
                    out[y as usize] = 0;
                }
            }
        }
        out
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_piece(&self) -> Option<Piece> {
        self.piece
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn total_lines_cleared(&self) -> u32 {
        self.total_lines_cleared
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn move_disabled(&self) -> bool {
        self.move_disabled
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
}

impl Default for TetrisGame {
    fn default() -> Self {
        Self::new(1)
    }
}

impl MatrixGame for TetrisGame {
    fn kind(&self) -> GameKind {
        GameKind::Tetris
    }

    fn init(&mut self, now_ms: u64) {
        TetrisGame::init(self, now_ms);
    }

    fn run(&mut self, now_ms: u64) -> bool {
        TetrisGame::run(self, now_ms)
    }

    fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Left => self.move_piece(-1, 0),
            GameAction::Right => self.move_piece(1, 0),
            GameAction::Down => self.move_piece(0, 1),
            GameAction::Up | GameAction::Secondary => self.rotate_piece(),
            GameAction::Primary => self.drop_piece(),
            GameAction::Restart | GameAction::Pause => false,
        }
    }

    fn render(&self) -> RowBitmap {
        self.active_board()
    }

    fn is_over(&self) -> bool {
        TetrisGame::is_over(self)
    }

    fn score(&self) -> u32 {
        self.total_lines_cleared
    }
}
