//! Paint module - free drawing on the LED matrix
//!
//! A cursor walks the board (wrapping like the snake head) and toggles
//! pixels. The cursor blinks so it stays visible over both lit and dark
//! pixels.

use log::info;

use crate::game::MatrixGame;
use crate::snake::wrap_step;
use crate::types::{
    column_bit, Direction, GameAction, GameKind, RowBitmap, BOARD_HEIGHT, BOARD_WIDTH,
    CURSOR_BLINK_MS,
};

#[derive(Debug, Clone)]
pub struct PaintGame {
    canvas: RowBitmap,
    cursor: (u8, u8),
    cursor_on: bool,
    last_blink_ms: u64,
}

impl PaintGame {
    pub fn new() -> Self {
        Self {
            canvas: [0; BOARD_HEIGHT as usize],
            cursor: (BOARD_WIDTH / 2, BOARD_HEIGHT / 2),
            cursor_on: true,
            last_blink_ms: 0,
        }
    }

    /// Blank canvas, cursor in the middle.
    pub fn init(&mut self, now_ms: u64) {
        *self = Self::new();
        self.last_blink_ms = now_ms;
        info!("paint: new canvas");
    }

    /// Toggle the cursor blink every 250ms.
    pub fn run(&mut self, now_ms: u64) -> bool {
        if now_ms.saturating_sub(self.last_blink_ms) < CURSOR_BLINK_MS as u64 {
            return false;
        }
        self.last_blink_ms = now_ms;
        self.cursor_on = !self.cursor_on;
        true
    }

    pub fn move_cursor(&mut self, direction: Direction) -> bool {
        self.cursor = wrap_step(self.cursor.0, self.cursor.1, direction);
        // Show the cursor right away after a move.
        self.cursor_on = true;
        true
    }

    pub fn toggle_pixel(&mut self) -> bool {
        let (x, y) = self.cursor;
        self.canvas[y as usize] ^= column_bit(x);
        true
    }

    pub fn clear(&mut self) -> bool {
        let changed = self.canvas.iter().any(|&row| row != 0);
        self.canvas = [0; BOARD_HEIGHT as usize];
        changed
    }

    /// Painted pixels with the cursor XORed in while the blink is on
    pub fn active_canvas(&self) -> RowBitmap {
        let mut out = self.canvas;
        if self.cursor_on {
            let (x, y) = self.cursor;
            out[y as usize] ^= column_bit(x);
        }
        out
    }

    pub fn canvas(&self) -> &RowBitmap {
        &self.canvas
    }

    pub fn cursor(&self) -> (u8, u8) {
        self.cursor
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_on
    }

    /// Number of lit pixels
    pub fn painted(&self) -> u32 {
        self.canvas.iter().map(|row| row.count_ones()).sum()
    }
}

impl Default for PaintGame {
    fn default() -> Self {
        Self::new()
    }
}

impl MatrixGame for PaintGame {
    fn kind(&self) -> GameKind {
        GameKind::Paint
    }

    fn init(&mut self, now_ms: u64) {
        PaintGame::init(self, now_ms);
    }

    fn run(&mut self, now_ms: u64) -> bool {
        PaintGame::run(self, now_ms)
    }

    fn apply_action(&mut self, action: GameAction) -> bool {
        if let Some(direction) = action.direction() {
            return self.move_cursor(direction);
        }
        match action {
            GameAction::Primary => self.toggle_pixel(),
            GameAction::Secondary => self.clear(),
            _ => false,
        }
    }

    fn render(&self) -> RowBitmap {
        self.active_canvas()
    }

    fn is_over(&self) -> bool {
        false
    }

    fn score(&self) -> u32 {
        self.painted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_centers_cursor() {
        let mut paint = PaintGame::new();
        paint.cursor = (0, 0);
        paint.canvas[3] = 0xFF;
        paint.init(1000);
        assert_eq!(paint.cursor, (4, 8));
        assert_eq!(paint.painted(), 0);
        assert!(paint.cursor_on);
        assert_eq!(paint.last_blink_ms, 1000);
    }

    #[test]
    fn test_cursor_wraps() {
        let mut paint = PaintGame::new();
        paint.cursor = (0, 0);
        paint.move_cursor(Direction::Left);
        assert_eq!(paint.cursor, (7, 0));
        paint.move_cursor(Direction::Up);
        assert_eq!(paint.cursor, (7, 15));
        paint.move_cursor(Direction::Right);
        assert_eq!(paint.cursor, (0, 15));
        paint.move_cursor(Direction::Down);
        assert_eq!(paint.cursor, (0, 0));
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut paint = PaintGame::new();
        paint.toggle_pixel();
        assert_eq!(paint.canvas[8], 0b0000_1000);
        paint.toggle_pixel();
        assert_eq!(paint.canvas, [0; 16]);
    }

    #[test]
    fn test_blink() {
        let mut paint = PaintGame::new();
        paint.init(0);
        assert_eq!(paint.active_canvas()[8], 0b0000_1000);
        assert!(!paint.run(249));
        assert!(paint.run(250));
        assert!(!paint.cursor_on);
        assert_eq!(paint.active_canvas(), [0; 16]);
        assert!(paint.run(500));
        assert!(paint.cursor_on);
    }

    #[test]
    fn test_cursor_inverts_lit_pixel() {
        let mut paint = PaintGame::new();
        paint.toggle_pixel();
        assert!(paint.cursor_on);
        assert_eq!(paint.active_canvas()[8], 0);
        paint.cursor_on = false;
        assert_eq!(paint.active_canvas()[8], 0b0000_1000);
    }

    #[test]
    fn test_actions() {
        let mut paint = PaintGame::new();
        assert!(paint.apply_action(GameAction::Right));
        assert!(paint.apply_action(GameAction::Primary));
        assert_eq!(paint.canvas[8], 0b0000_0100);
        assert!(paint.apply_action(GameAction::Secondary));
        assert!(!paint.apply_action(GameAction::Secondary));
        assert!(!paint.apply_action(GameAction::Pause));
        assert!(!MatrixGame::is_over(&paint));
    }
}
