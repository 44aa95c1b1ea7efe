//! Snake module - age-encoded grid snake with toroidal wrap
//!
//! The board is a flat 8x16 array of small integers. A cell holds:
//!
//! - `0`: empty
//! - `1..=length`: snake body, counting up from the tail to the head
//! - `length + 1`: the food cell
//!
//! Every non-growing move ages the body by one, so the tail cell drops to 0
//! and disappears without the engine tracking a segment list. There are no
//! walls; the head wraps around all four edges and only self-collision ends
//! the game.

use log::{debug, info};

use crate::game::MatrixGame;
use crate::rng::SimpleRng;
use crate::types::{
    column_bit, Direction, GameAction, GameKind, RowBitmap, BOARD_HEIGHT, BOARD_WIDTH,
    INITIAL_SNAKE_LENGTH, SNAKE_SPEED_BASE, SNAKE_SPEED_DIVISOR, SNAKE_SPEED_LENGTH_CAP,
};

/// Total number of cells on the board
const CELL_COUNT: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Where a round of snake stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeStatus {
    /// Created but `init` not called yet
    Idle,
    Running,
    /// The head ran into the body
    Crashed,
    /// The snake covers every cell, no room left for food
    Filled,
}

/// Milliseconds between moves for a snake of `length` cells
///
/// `(80 - length)^2 / 20`, with length capped so the delay bottoms out at 5ms.
///
/// # Examples
///
/// ```
/// use led_gamer_core::snake::move_delay_ms;
///
/// assert_eq!(move_delay_ms(3), 296);
/// assert_eq!(move_delay_ms(70), 5);
/// assert_eq!(move_delay_ms(128), 5);
/// ```
pub fn move_delay_ms(length: u8) -> u32 {
    let length = (length as u32).min(SNAKE_SPEED_LENGTH_CAP);
    let gap = SNAKE_SPEED_BASE - length;
    gap * gap / SNAKE_SPEED_DIVISOR
}

/// Step one cell from `(x, y)`, wrapping at every edge.
pub fn wrap_step(x: u8, y: u8, direction: Direction) -> (u8, u8) {
    let (dx, dy) = direction.delta();
    (wrap(x, dx, BOARD_WIDTH), wrap(y, dy, BOARD_HEIGHT))
}

#[inline(always)]
fn wrap(pos: u8, delta: i8, size: u8) -> u8 {
    ((pos as i16 + delta as i16 + size as i16) % size as i16) as u8
}

/// Snake game state
#[derive(Debug, Clone)]
pub struct SnakeGame {
    /// Flat array of cell ages, row-major order (y * WIDTH + x)
    cells: [u8; CELL_COUNT],
    head: (u8, u8),
    direction: Direction,
    length: u8,
    food: Option<(u8, u8)>,
    status: SnakeStatus,
    /// Cleared by the first accepted turn, re-armed by every move.
    allow_direction_change: bool,
    last_move_ms: u64,
    rng: SimpleRng,
}

impl SnakeGame {
    /// Create an idle game; call [`SnakeGame::init`] to start playing.
    pub fn new(seed: u32) -> Self {
        Self {
            cells: [0; CELL_COUNT],
            head: (0, 0),
            direction: Direction::Right,
            length: INITIAL_SNAKE_LENGTH,
            food: None,
            status: SnakeStatus::Idle,
            allow_direction_change: true,
            last_move_ms: 0,
            rng: SimpleRng::new(seed),
        }
    }

    #[inline(always)]
    fn index(x: u8, y: u8) -> Option<usize> {
        if x >= BOARD_WIDTH || y >= BOARD_HEIGHT {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    /// Start a round with a random interior head position and heading.
    pub fn init(&mut self, now_ms: u64) {
        let x = self.rng.next_between(2, BOARD_WIDTH - 2);
        let y = self.rng.next_between(2, BOARD_HEIGHT - 2);
        let direction = self.rng.pick(&Direction::ALL).unwrap_or(Direction::Right);
        self.init_at((x, y), direction, now_ms);
    }

    /// Start a round with the head at `head` moving in `direction`.
    ///
    /// The two trailing cells are laid out behind the head. Food still lands
    /// on a random empty cell.
    pub fn init_at(&mut self, head: (u8, u8), direction: Direction, now_ms: u64) {
        self.cells = [0; CELL_COUNT];
        self.length = INITIAL_SNAKE_LENGTH;
        self.direction = direction;
        self.head = (head.0 % BOARD_WIDTH, head.1 % BOARD_HEIGHT);

        let back = direction.opposite();
        let (mut x, mut y) = self.head;
        for age in (1..=self.length).rev() {
            self.set(x, y, age);
            (x, y) = wrap_step(x, y, back);
        }

        self.food = None;
        self.place_food();
        self.status = SnakeStatus::Running;
        self.allow_direction_change = true;
        self.last_move_ms = now_ms;

        info!(
            "snake: new round, head ({}, {}) heading {:?}",
            self.head.0, self.head.1, self.direction
        );
    }

    /// Advance the snake if its move delay has elapsed.
    ///
    /// Returns true if the snake moved (or the move ended the round).
    pub fn run(&mut self, now_ms: u64) -> bool {
        if self.status != SnakeStatus::Running {
            return false;
        }
        let elapsed = now_ms.saturating_sub(self.last_move_ms);
        if elapsed <= self.move_delay_ms() as u64 {
            return false;
        }

        self.last_move_ms = now_ms;
        self.allow_direction_change = true;
        self.step();
        true
    }

    /// Move the head one cell and apply the collision and growth rules.
    fn step(&mut self) {
        let (tx, ty) = wrap_step(self.head.0, self.head.1, self.direction);
        let target = self.cell(tx, ty).unwrap_or(0);

        // The tail (age 1) vacates this tick, so only older cells block.
        if target > 1 && target <= self.length {
            self.status = SnakeStatus::Crashed;
            info!("snake: crashed at ({}, {}), length {}", tx, ty, self.length);
            return;
        }

        if target == self.food_marker() {
            self.length += 1;
            self.set(tx, ty, self.length);
            self.head = (tx, ty);
            self.food = None;
            debug!("snake: ate food, length {}", self.length);
            if !self.place_food() {
                self.status = SnakeStatus::Filled;
                info!("snake: board filled, length {}", self.length);
            }
            return;
        }

        let length = self.length;
        for cell in self.cells.iter_mut() {
            if *cell >= 1 && *cell <= length {
                *cell -= 1;
            }
        }
        self.set(tx, ty, self.length);
        self.head = (tx, ty);
    }

    /// Put food on a uniformly random empty cell.
    ///
    /// Returns false when there is no empty cell left.
    fn place_food(&mut self) -> bool {
        let empty = self.cells.iter().filter(|&&c| c == 0).count();
        if empty == 0 {
            self.food = None;
            return false;
        }

        let pick = self.rng.next_range(empty as u32) as usize;
        let Some(idx) = self
            .cells
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == 0)
            .nth(pick)
            .map(|(i, _)| i)
        else {
            return false;
        };

        let marker = self.food_marker();
        self.cells[idx] = marker;
        let width = BOARD_WIDTH as usize;
        self.food = Some(((idx % width) as u8, (idx / width) as u8));
        true
    }

    /// Request a new heading for the next move.
    ///
    /// Only one turn is accepted per move, and reversing onto the body is
    /// refused. Asking for the current heading is not a turn and leaves the
    /// latch armed.
    pub fn change_direction(&mut self, direction: Direction) -> bool {
        if self.status != SnakeStatus::Running || !self.allow_direction_change {
            return false;
        }
        if direction == self.direction || direction == self.direction.opposite() {
            return false;
        }
        self.direction = direction;
        self.allow_direction_change = false;
        true
    }

    /// Pack the board into row masks: every nonzero cell is lit.
    pub fn active_canvas(&self) -> RowBitmap {
        let mut out = [0u8; BOARD_HEIGHT as usize];
        let width = BOARD_WIDTH as usize;
        for (y, row) in out.iter_mut().enumerate() {
            for x in 0..width {
                if self.cells[y * width + x] != 0 {
                    *row |= column_bit(x as u8);
                }
            }
        }
        out
    }

    fn set(&mut self, x: u8, y: u8, value: u8) {
        if let Some(idx) = Self::index(x, y) {
            self.cells[idx] = value;
        }
    }

    /// Cell value at `(x, y)`, `None` if out of bounds
    pub fn cell(&self, x: u8, y: u8) -> Option<u8> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Value marking the food cell
    pub fn food_marker(&self) -> u8 {
        self.length + 1
    }

    /// Current delay between moves
    pub fn move_delay_ms(&self) -> u32 {
        move_delay_ms(self.length)
    }

    pub fn head(&self) -> (u8, u8) {
        self.head
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn len(&self) -> u8 {
        self.length
    }

    pub fn food(&self) -> Option<(u8, u8)> {
        self.food
    }

    pub fn status(&self) -> SnakeStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == SnakeStatus::Running
    }

    /// Food eaten this round
    pub fn score(&self) -> u32 {
        self.length.saturating_sub(INITIAL_SNAKE_LENGTH) as u32
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }
}

impl Default for SnakeGame {
    fn default() -> Self {
        Self::new(1)
    }
}

impl MatrixGame for SnakeGame {
    fn kind(&self) -> GameKind {
        GameKind::Snake
    }

    fn init(&mut self, now_ms: u64) {
        SnakeGame::init(self, now_ms);
    }

    fn run(&mut self, now_ms: u64) -> bool {
        SnakeGame::run(self, now_ms)
    }

    fn apply_action(&mut self, action: GameAction) -> bool {
        match action.direction() {
            Some(direction) => self.change_direction(direction),
            None => false,
        }
    }

    fn render(&self) -> RowBitmap {
        self.active_canvas()
    }

    fn is_over(&self) -> bool {
        matches!(self.status, SnakeStatus::Crashed | SnakeStatus::Filled)
    }

    fn score(&self) -> u32 {
        SnakeGame::score(self)
    }
}
