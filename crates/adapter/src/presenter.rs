//! The capability set the driver draws through.
//!
//! A presenter knows how to paint; it never reads engine state. Coordinates
//! passed to [`Presenter::draw_cell`] are always inside the board.

use crate::types::{Cell, PieceKind, Phase};

pub trait Presenter {
    /// One-shot decorations around the board (borders, separators, idle text).
    fn draw_frames(&mut self);

    /// Blank the next-piece area.
    fn clear_preview(&mut self);

    fn draw_cell(&mut self, x: u8, y: u8, cell: Cell);

    /// Redraw the next-piece area showing `kind`.
    fn draw_preview(&mut self, kind: PieceKind);

    /// Status line (phase and line count).
    fn set_status(&mut self, phase: Phase, lines: u32);
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn draw_frames(&mut self) {
        (**self).draw_frames()
    }

    fn clear_preview(&mut self) {
        (**self).clear_preview()
    }

    fn draw_cell(&mut self, x: u8, y: u8, cell: Cell) {
        (**self).draw_cell(x, y, cell)
    }

    fn draw_preview(&mut self, kind: PieceKind) {
        (**self).draw_preview(kind)
    }

    fn set_status(&mut self, phase: Phase, lines: u32) {
        (**self).set_status(phase, lines)
    }
}

/// A presenter call, as captured by [`Recorder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenterCall {
    DrawFrames,
    ClearPreview,
    DrawCell { x: u8, y: u8, cell: Cell },
    DrawPreview(PieceKind),
    SetStatus(Phase, u32),
}

/// Presenter that only remembers what it was asked to do.
///
/// Used to check the redraw protocol without a terminal.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    pub calls: Vec<PresenterCall>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return and forget the calls recorded so far.
    pub fn take(&mut self) -> Vec<PresenterCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn cell_draws(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, PresenterCall::DrawCell { .. }))
            .count()
    }

    pub fn last_status(&self) -> Option<(Phase, u32)> {
        self.calls.iter().rev().find_map(|c| match c {
            PresenterCall::SetStatus(phase, lines) => Some((*phase, *lines)),
            _ => None,
        })
    }
}

impl Presenter for Recorder {
    fn draw_frames(&mut self) {
        self.calls.push(PresenterCall::DrawFrames);
    }

    fn clear_preview(&mut self) {
        self.calls.push(PresenterCall::ClearPreview);
    }

    fn draw_cell(&mut self, x: u8, y: u8, cell: Cell) {
        self.calls.push(PresenterCall::DrawCell { x, y, cell });
    }

    fn draw_preview(&mut self, kind: PieceKind) {
        self.calls.push(PresenterCall::DrawPreview(kind));
    }

    fn set_status(&mut self, phase: Phase, lines: u32) {
        self.calls.push(PresenterCall::SetStatus(phase, lines));
    }
}
