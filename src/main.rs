//! Terminal LED matrix runner (default binary).
//!
//! The terminal stands in for the LED panel. The loop polls input with a
//! timeout of one frame, ticks the selected game with the monotonic clock and
//! redraws only what changed.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use led_gamer::config::Config;
use led_gamer::core::{Clock, GameConsole, MonotonicClock};
use led_gamer::input::{game_switch_key, handle_key_event, should_quit};
use led_gamer::logging;
use led_gamer::term::{FrameBuffer, MatrixFrame, MatrixView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = Config::from_env()?;
    logging::init(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let clock = MonotonicClock::new();
    let seed = config.seed_or_clock();
    info!("starting {} with seed {}", config.game.as_str(), seed);

    let mut console = GameConsole::new(seed);
    console.select(config.game, clock.now_ms());

    let view = MatrixView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let frame = Duration::from_millis(config.frame_ms);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&MatrixFrame::from_console(&console), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        if event::poll(frame)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        info!("quit");
                        return Ok(());
                    }
                    let now = clock.now_ms();
                    if let Some(kind) = game_switch_key(key) {
                        console.select(kind, now);
                    } else if let Some(action) = handle_key_event(key) {
                        console.apply_action(action, now);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        console.run(clock.now_ms());
    }
}
