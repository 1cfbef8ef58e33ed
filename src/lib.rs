//! Retro Tetris (workspace facade crate).
//!
//! Re-exports the member crates under one name so the binary, tests and
//! benches can write `retro_tetris::engine::Engine` and friends.

pub use retro_tetris_adapter as adapter;
pub use retro_tetris_core as core;
pub use retro_tetris_engine as engine;
pub use retro_tetris_input as input;
pub use retro_tetris_term as term;
pub use retro_tetris_types as types;
