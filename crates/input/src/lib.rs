//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]s and
//! recognises the quit keys. Keys that map to nothing get a printable label
//! so the caller can tell the player what was wrong.

pub mod map;

pub use tui_connect_four_types as types;

pub use map::{handle_key_event, key_label, should_quit, wrong_input_message};
