use crate::board::Board;
use crate::types::{Cell, PieceKind, Phase};

/// Externally visible game state, as consumed by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub lines: u32,
    pub next: PieceKind,
    pub phase: Phase,
}

impl Snapshot {
    /// State of a board that has never been played on.
    pub fn empty(width: u8, height: u8) -> Self {
        Self {
            board: Board::with_size(width, height),
            lines: 0,
            next: PieceKind::O,
            phase: Phase::GameOver,
        }
    }

    pub fn width(&self) -> u8 {
        self.board.width()
    }

    pub fn height(&self) -> u8 {
        self.board.height()
    }

    /// Cell at (x, y); out-of-range reads as `Empty` for display purposes.
    pub fn cell(&self, x: u8, y: u8) -> Cell {
        self.board.get(x as i8, y as i8).unwrap_or_default()
    }

    pub fn same_size(&self, other: &Snapshot) -> bool {
        self.width() == other.width() && self.height() == other.height()
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        let board = Board::new();
        Self::empty(board.width(), board.height())
    }
}
