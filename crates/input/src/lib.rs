//! Terminal input module (engine-facing).
//!
//! This crate is independent of any UI framework beyond `crossterm` events.
//! It maps key presses into [`crate::types::GameAction`] intents and decides
//! which keys quit the program. Repeat timing is left to the terminal.

pub mod map;

pub use blocktris_types as types;

pub use map::{handle_key_event, is_press, should_quit};
