//! Adapter - everything between the engine and the outside world
//!
//! - [`presenter`]: the drawing capability set a front end implements
//! - [`reconcile`]: shadow-snapshot diffing so only changed cells are redrawn
//! - [`driver`]: runs ticks and inputs through the engine, then reconciles
//! - [`config`]: environment-driven settings
//! - [`journal`]: optional JSONL session log written off the game thread
//!
//! # Example
//!
//! ```
//! use retro_tetris_adapter::{Driver, Flow, Recorder};
//! use retro_tetris_adapter::core::ScriptedPieces;
//! use retro_tetris_adapter::engine::Engine;
//! use retro_tetris_adapter::types::{Input, Phase};
//!
//! let engine = Engine::new(ScriptedPieces::parse("tj").unwrap());
//! let mut driver = Driver::new(engine, Recorder::new());
//! driver.start();
//!
//! assert_eq!(driver.step(false, &[Input::PauseToggle]), Flow::Continue);
//! assert_eq!(driver.engine().phase(), Phase::Playing);
//! assert_eq!(driver.step(true, &[Input::Quit]), Flow::Quit);
//! ```

pub mod config;
pub mod driver;
pub mod journal;
pub mod presenter;
pub mod reconcile;

pub use retro_tetris_core as core;
pub use retro_tetris_engine as engine;
pub use retro_tetris_types as types;

pub use config::GameConfig;
pub use driver::{command_for, Driver, Flow, InputBatch};
pub use journal::{Journal, JournalEvent, JournalRecord};
pub use presenter::{Presenter, PresenterCall, Recorder};
pub use reconcile::{Reconciler, RedrawStats};
