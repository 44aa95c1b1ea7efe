//! Terminal front end for the LED matrix.
//!
//! The terminal plays the part of the LED panel: [`MatrixView`] turns the
//! selected game's row bitmap into a framebuffer of character cells, and
//! [`TerminalRenderer`] sends only the cells that changed since the previous
//! frame.
//!
//! Goals:
//! - Keep `core` deterministic and free of I/O
//! - Keep drawing pure so it can be unit-tested without a terminal
//! - Two terminal columns per LED so the 8x16 grid keeps its proportions

pub mod fb;
pub mod matrix_view;
pub mod renderer;

pub use led_gamer_core as core;
pub use led_gamer_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use matrix_view::{MatrixFrame, MatrixView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
