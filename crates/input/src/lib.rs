//! Terminal input module.
//!
//! Maps `crossterm` key events onto the console's buttons
//! ([`crate::types::GameAction`]), the game-switch keys and the quit keys.
//! Nothing here knows which game is running.

pub mod map;

pub use led_gamer_types as types;

pub use map::{game_switch_key, handle_key_event, should_quit};
