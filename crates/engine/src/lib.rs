//! Game engine - moves, locks, line clears and the phase machine
//!
//! [`Engine`] owns the board, the active piece, the next piece and the line
//! counter. It performs no I/O and never blocks; every operation either
//! succeeds, reports `false`, or is ignored because the current phase does not
//! accept it (see [`machine`]).
//!
//! # Example
//!
//! ```
//! use retro_tetris_engine::{Command, Engine};
//! use retro_tetris_engine::core::ScriptedPieces;
//! use retro_tetris_engine::types::{Cell, Phase};
//!
//! let mut engine = Engine::new(ScriptedPieces::parse("o").unwrap());
//! assert_eq!(engine.phase(), Phase::GameOver);
//!
//! assert!(engine.spawn());
//! assert!(engine.left());
//! assert_eq!(engine.dispatch(Command::Tick), Phase::Playing);
//! assert_eq!(engine.board().count(Cell::Falling), 4);
//! ```

pub mod engine;
pub mod machine;

pub use retro_tetris_core as core;
pub use retro_tetris_types as types;

pub use engine::{ActivePiece, Engine};
pub use machine::{accepts, Command};
