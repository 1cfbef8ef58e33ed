//! Keyboard input for the terminal front end.
//!
//! Maps `crossterm` key events to the engine-independent [`types::Input`]
//! set. Nothing here knows about phases; the driver decides what an input
//! means.

pub mod map;

pub use retro_tetris_types as types;

pub use map::{map_key, should_quit};
