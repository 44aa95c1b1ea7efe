//! LED Gamer (workspace facade crate).
//!
//! Snake, Tetris and Paint for an 8x16 LED matrix. The engines live in
//! dedicated crates under `crates/`; this package re-exports them as
//! `led_gamer::{core,input,term,types}` and adds the pieces only the binary
//! needs: environment configuration and file logging.

pub mod config;
pub mod logging;

pub use led_gamer_core as core;
pub use led_gamer_input as input;
pub use led_gamer_term as term;
pub use led_gamer_types as types;
