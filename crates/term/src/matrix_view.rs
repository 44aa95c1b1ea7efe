//! MatrixView: draws the console's LED picture into a framebuffer.
//!
//! This module is pure (no I/O) and unit-tested.

use crate::core::GameConsole;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{column_bit, GameKind, RowBitmap, BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Everything the view needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixFrame {
    pub kind: GameKind,
    pub rows: RowBitmap,
    pub score: u32,
    /// Current step interval of the running game, if it has one
    pub speed_ms: Option<u32>,
    pub paused: bool,
    pub game_over: bool,
}

impl MatrixFrame {
    pub fn from_console(console: &GameConsole) -> Self {
        let kind = console.selected();
        let speed_ms = match kind {
            GameKind::Snake => Some(console.snake().move_delay_ms()),
            GameKind::Tetris => Some(console.tetris().time_interval_ms()),
            GameKind::Paint => None,
        };
        Self {
            kind,
            rows: console.render(),
            score: console.score(),
            speed_ms,
            paused: console.is_paused(),
            game_over: console.is_over(),
        }
    }
}

const BG: Rgb = Rgb::new(12, 12, 16);
const LED_ON: CellStyle = CellStyle::new(Rgb::new(255, 60, 40), BG);
const LED_OFF: CellStyle = CellStyle::new(Rgb::new(60, 30, 30), BG);
const LED_GAP: Cell = CellStyle::new(BG, BG).cell(' ');
const BORDER: CellStyle = CellStyle::new(Rgb::new(160, 160, 170), Rgb::new(0, 0, 0));
const LABEL: CellStyle = CellStyle::new(Rgb::new(230, 230, 230), Rgb::new(0, 0, 0)).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(190, 190, 190), Rgb::new(0, 0, 0));
const HELP: CellStyle = CellStyle::new(Rgb::new(120, 120, 130), Rgb::new(0, 0, 0));
const OVERLAY: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();

/// Renders an 8x16 LED grid with a side panel.
pub struct MatrixView {
    /// LED width in terminal columns.
    led_w: u16,
}

impl Default for MatrixView {
    fn default() -> Self {
        // Two columns per LED keeps the grid roughly square.
        Self { led_w: 2 }
    }
}

impl MatrixView {
    pub fn new(led_w: u16) -> Self {
        Self { led_w: led_w.max(1) }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, frame: &MatrixFrame, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let grid_w = BOARD_WIDTH as u16 * self.led_w;
        let grid_h = BOARD_HEIGHT as u16;
        let frame_w = grid_w + 2;
        let frame_h = grid_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        draw_border(fb, start_x, start_y, frame_w, frame_h);

        for y in 0..BOARD_HEIGHT {
            let row = frame.rows[y as usize];
            for x in 0..BOARD_WIDTH {
                let (ch, style) = if row & column_bit(x) != 0 {
                    ('●', LED_ON)
                } else {
                    ('·', LED_OFF)
                };
                let px = start_x + 1 + x as u16 * self.led_w;
                let py = start_y + 1 + y as u16;
                fb.fill_rect(px, py, self.led_w, 1, LED_GAP);
                fb.set(px, py, style.cell(ch));
            }
        }

        self.draw_side_panel(fb, frame, viewport, start_x + frame_w + 2, start_y);

        if frame.paused {
            draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PAUSED");
        } else if frame.game_over {
            draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, frame: &MatrixFrame, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(frame, viewport, &mut fb);
        fb
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        frame: &MatrixFrame,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x.saturating_add(12) > viewport.width {
            return;
        }

        let mut y = start_y;
        fb.put_str(panel_x, y, frame.kind.title(), LABEL);
        y += 2;

        fb.put_str(panel_x, y, score_label(frame.kind), LABEL);
        y += 1;
        fb.put_u32(panel_x, y, frame.score, VALUE);
        y += 2;

        if let Some(ms) = frame.speed_ms {
            fb.put_str(panel_x, y, "SPEED", LABEL);
            y += 1;
            fb.put_u32(panel_x, y, ms, VALUE);
            fb.put_str(panel_x + digits(ms), y, "ms", VALUE);
            y += 2;
        }

        for line in help_lines(frame.kind) {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, HELP);
            y += 1;
        }
    }
}

fn score_label(kind: GameKind) -> &'static str {
    match kind {
        GameKind::Snake => "EATEN",
        GameKind::Tetris => "LINES",
        GameKind::Paint => "PIXELS",
    }
}

fn help_lines(kind: GameKind) -> &'static [&'static str] {
    match kind {
        GameKind::Snake => &["arrows turn", "1/2/3 game", "r restart", "p pause", "q quit"],
        GameKind::Tetris => &[
            "←→ move  ↓ down",
            "↑/x rotate",
            "space drop",
            "1/2/3 game",
            "r restart",
            "p pause",
            "q quit",
        ],
        GameKind::Paint => &[
            "arrows move",
            "space toggle",
            "x clear",
            "1/2/3 game",
            "q quit",
        ],
    }
}

fn digits(value: u32) -> u16 {
    value.checked_ilog10().map_or(1, |d| d as u16 + 1)
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }

    fb.set(x, y, BORDER.cell('┌'));
    fb.set(x + w - 1, y, BORDER.cell('┐'));
    fb.set(x, y + h - 1, BORDER.cell('└'));
    fb.set(x + w - 1, y + h - 1, BORDER.cell('┘'));

    for dx in 1..w - 1 {
        fb.set(x + dx, y, BORDER.cell('─'));
        fb.set(x + dx, y + h - 1, BORDER.cell('─'));
    }
    for dy in 1..h - 1 {
        fb.set(x, y + dy, BORDER.cell('│'));
        fb.set(x + w - 1, y + dy, BORDER.cell('│'));
    }
}

fn draw_overlay_text(
    fb: &mut FrameBuffer,
    start_x: u16,
    start_y: u16,
    frame_w: u16,
    frame_h: u16,
    text: &str,
) {
    let mid_y = start_y.saturating_add(frame_h / 2);
    let text_w = text.chars().count() as u16;
    let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
    fb.put_str(x, mid_y, text, OVERLAY);
}
