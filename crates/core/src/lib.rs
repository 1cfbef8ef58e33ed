//! Core game data - pure, deterministic, and testable
//!
//! This crate holds the passive pieces of the game: the grid, the shape
//! catalog, the random source and the snapshot handed to presentation code.
//! It has **zero dependencies** on UI or I/O; the rules that move pieces
//! around live in the engine crate.
//!
//! # Module Structure
//!
//! - [`board`]: `W × H` grid of cell tags with collision test and line clearing
//! - [`pieces`]: the seven shapes, four frames each, offsets from a pivot
//! - [`rng`]: seeded uniform piece sampler and a scripted replacement
//! - [`snapshot`]: read-only view of a game for differential rendering
//!
//! # Example
//!
//! ```
//! use retro_tetris_core::{get_shape, Board};
//! use retro_tetris_core::types::{Cell, PieceKind, Rotation};
//!
//! let mut board = Board::new();
//! for x in 0..10 {
//!     board.set(x, 15, Cell::Locked);
//! }
//! assert_eq!(board.clear_full_rows(), 1);
//!
//! let shape = get_shape(PieceKind::I, Rotation::North);
//! assert_eq!(shape, [(0, -1), (0, 0), (0, 1), (0, 2)]);
//! ```

pub mod board;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use retro_tetris_types as types;

pub use board::Board;
pub use pieces::{frame, get_shape, get_spawn_shape, MinoOffset, PieceShape};
pub use rng::{PieceSource, ScriptedPieces, SimpleRng};
pub use snapshot::Snapshot;
