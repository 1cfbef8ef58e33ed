//! Terminal front end.
//!
//! [`TermPresenter`] implements the adapter's `Presenter` by painting into a
//! [`FrameBuffer`]; [`TerminalRenderer`] flushes that buffer to the terminal,
//! sending only the glyph runs that changed since the previous flush.

pub mod fb;
pub mod renderer;
pub mod view;

pub use retro_tetris_adapter as adapter;
pub use retro_tetris_core as core;
pub use retro_tetris_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use view::{status_text, TermPresenter};
