//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used by every game engine and by
//! the terminal front end. All types are plain data with no dependencies.
//!
//! # Board Dimensions
//!
//! The LED matrix is 8 columns wide and 16 rows tall:
//!
//! - **Width**: 8 columns (indexed 0-7, left to right)
//! - **Height**: 16 rows (indexed 0-15, top to bottom)
//!
//! A rendered board is a [`RowBitmap`]: one byte per row where bit 7 is the
//! leftmost column.
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TETRIS_BASE_INTERVAL_MS` | 800 | Fall interval with no lines cleared |
//! | `TETRIS_INTERVAL_STEP_MS` | 15 | Speed-up per cleared line |
//! | `TETRIS_MIN_INTERVAL_MS` | 100 | Fall interval floor |
//! | `LANDING_GRACE_MS` | 400 | Input window after a piece lands |
//! | `LINE_FLASH_MS` | 100 | Duration of one flash half-cycle |
//! | `CURSOR_BLINK_MS` | 250 | Paint cursor blink half-period |
//!
//! # Snake Speed
//!
//! The snake moves once every `(80 - length)^2 / 20` milliseconds, so it gets
//! faster as it grows. Length is capped at `SNAKE_SPEED_LENGTH_CAP` inside the
//! formula:
//!
//! | Length | Delay |
//! |--------|-------|
//! | 3 | 296ms |
//! | 20 | 180ms |
//! | 40 | 80ms |
//! | 70+ | 5ms |
//!
//! # Examples
//!
//! ```
//! use led_gamer_types::{Direction, GameAction, GameKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(Direction::Up.opposite(), Direction::Down);
//! assert_eq!(Direction::from_delta(1, 0), Some(Direction::Right));
//!
//! assert_eq!(GameKind::from_str("Snake"), Some(GameKind::Snake));
//! assert_eq!(GameAction::from_str("primary"), Some(GameAction::Primary));
//!
//! assert_eq!(BOARD_WIDTH, 8);
//! assert_eq!(BOARD_HEIGHT, 16);
//! ```

/// Board width in cells (8 columns)
pub const BOARD_WIDTH: u8 = 8;

/// Board height in cells (16 rows)
pub const BOARD_HEIGHT: u8 = 16;

/// Row mask with every column lit.
///
/// Computed from the width rather than hard-coded so the board can be narrowed.
pub const FULL_ROW: u8 = ((1u16 << BOARD_WIDTH) - 1) as u8;

/// One bitmask per board row, MSB = leftmost column.
///
/// This is what a display driver consumes.
pub type RowBitmap = [u8; BOARD_HEIGHT as usize];

/// Bit for column `x` inside a row mask.
#[inline(always)]
pub const fn column_bit(x: u8) -> u8 {
    1 << (BOARD_WIDTH - 1 - x)
}

/// Snake length when a game starts
pub const INITIAL_SNAKE_LENGTH: u8 = 3;

/// Base term of the snake delay formula
pub const SNAKE_SPEED_BASE: u32 = 80;

/// Divisor of the snake delay formula
pub const SNAKE_SPEED_DIVISOR: u32 = 20;

/// Longest length that still speeds the snake up (5ms per move at the cap).
pub const SNAKE_SPEED_LENGTH_CAP: u32 = 70;

/// Tetris fall interval before any line is cleared
pub const TETRIS_BASE_INTERVAL_MS: u32 = 800;

/// Fall interval reduction per cleared line
pub const TETRIS_INTERVAL_STEP_MS: u32 = 15;

/// Fall interval floor
pub const TETRIS_MIN_INTERVAL_MS: u32 = 100;

/// Input window granted after a piece lands, before it is committed
pub const LANDING_GRACE_MS: u32 = 400;

/// Duration of each on or off half of a line-clear flash
pub const LINE_FLASH_MS: u32 = 100;

/// Number of on/off flash cycles before full rows are removed
pub const LINE_FLASH_CYCLES: u8 = 2;

/// Spawn column offset for new pieces
pub const SPAWN_X: i8 = 0;

/// Spawn row offset for new pieces (the piece box starts above the board)
pub const SPAWN_Y: i8 = -2;

/// Paint cursor blink half-period
pub const CURSOR_BLINK_MS: u32 = 250;

/// Axis-aligned heading on the board.
///
/// `Up` decreases `y` (row 0 is the top of the matrix).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a fixed order usable for random picks.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step `(dx, dy)` for this direction
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Build from a unit step; anything that is not axis-aligned is rejected.
    pub fn from_delta(dx: i8, dy: i8) -> Option<Self> {
        match (dx, dy) {
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }

    /// The reverse heading
    ///
    /// # Examples
    ///
    /// ```
    /// use led_gamer_types::Direction;
    ///
    /// assert_eq!(Direction::Left.opposite(), Direction::Right);
    /// assert_eq!(Direction::Down.opposite(), Direction::Up);
    /// ```
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// The games available on the matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKind {
    Snake,
    Tetris,
    Paint,
}

impl GameKind {
    pub const ALL: [GameKind; 3] = [GameKind::Snake, GameKind::Tetris, GameKind::Paint];

    /// Parse game kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use led_gamer_types::GameKind;
    ///
    /// assert_eq!(GameKind::from_str("tetris"), Some(GameKind::Tetris));
    /// assert_eq!(GameKind::from_str("PAINT"), Some(GameKind::Paint));
    /// assert_eq!(GameKind::from_str("pong"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "snake" => Some(GameKind::Snake),
            "tetris" => Some(GameKind::Tetris),
            "paint" => Some(GameKind::Paint),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameKind::Snake => "snake",
            GameKind::Tetris => "tetris",
            GameKind::Paint => "paint",
        }
    }

    /// Title shown by front ends
    pub fn title(&self) -> &'static str {
        match self {
            GameKind::Snake => "SNAKE",
            GameKind::Tetris => "TETRIS",
            GameKind::Paint => "PAINT",
        }
    }
}

/// Button presses delivered to the selected game
///
/// The gamer has a four-way pad and two face buttons. Each engine decides
/// what a button means; see `GameConsole` in the core crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Up,
    Down,
    Left,
    Right,
    /// Face button A: drop (Tetris), toggle pixel (Paint)
    Primary,
    /// Face button B: rotate (Tetris), clear canvas (Paint)
    Secondary,
    /// Re-run `init` on the selected game
    Restart,
    /// Toggle pause on the console
    Pause,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use led_gamer_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("up"), Some(GameAction::Up));
    /// assert_eq!(GameAction::from_str("Secondary"), Some(GameAction::Secondary));
    /// assert_eq!(GameAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(GameAction::Up),
            "down" => Some(GameAction::Down),
            "left" => Some(GameAction::Left),
            "right" => Some(GameAction::Right),
            "primary" => Some(GameAction::Primary),
            "secondary" => Some(GameAction::Secondary),
            "restart" => Some(GameAction::Restart),
            "pause" => Some(GameAction::Pause),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Up => "up",
            GameAction::Down => "down",
            GameAction::Left => "left",
            GameAction::Right => "right",
            GameAction::Primary => "primary",
            GameAction::Secondary => "secondary",
            GameAction::Restart => "restart",
            GameAction::Pause => "pause",
        }
    }

    /// Direction carried by a pad press, if any
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameAction::Up => Some(Direction::Up),
            GameAction::Down => Some(Direction::Down),
            GameAction::Left => Some(Direction::Left),
            GameAction::Right => Some(Direction::Right),
            _ => None,
        }
    }
}

/// The seven tetromino piece kinds
///
/// - **I**: straight bar
/// - **O**: 2x2 square
/// - **T**: T-shaped
/// - **S**: S-shaped
/// - **Z**: Z-shaped (mirror of S)
/// - **J**: J-shaped
/// - **L**: L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds; spawning picks uniformly from this list.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use led_gamer_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}
