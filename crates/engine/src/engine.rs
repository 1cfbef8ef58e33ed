//! Engine module - the active piece and everything that happens to it
//!
//! The active piece lives on the board as four `Falling` cells. Every move
//! follows the same pipeline: erase the piece, compute the candidate
//! position/frame, test the four target cells with [`Board::is_blocked`],
//! commit on success, then stamp the piece back. Placing a freshly spawned
//! piece is the one move that skips the erase and, on failure, the redraw.

use crate::core::{get_shape, Board, PieceShape, PieceSource, SimpleRng, Snapshot};
use crate::types::{Cell, PieceKind, Phase, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    /// Pivot column
    pub x: i8,
    /// Pivot row
    pub y: i8,
}

impl ActivePiece {
    /// A piece at the spawn pivot `(width / 2, 1)`, frame 0.
    pub fn spawn(kind: PieceKind, board_width: u8) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x: (board_width / 2) as i8,
            y: 1,
        }
    }

    /// Offsets for the current frame
    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    /// Absolute board coordinates of the four cells
    pub fn cells(&self) -> [(i8, i8); 4] {
        self.shape().map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    fn moved(&self, kind: MoveKind) -> Self {
        match kind {
            MoveKind::Place => *self,
            MoveKind::Rotate => Self {
                rotation: self.rotation.rotate_cw(),
                ..*self
            },
            MoveKind::Down => Self {
                y: self.y + 1,
                ..*self
            },
            MoveKind::Left => Self {
                x: self.x - 1,
                ..*self
            },
            MoveKind::Right => Self {
                x: self.x + 1,
                ..*self
            },
        }
    }
}

/// The five primitive piece moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MoveKind {
    /// Put a freshly spawned piece on the board where it already is
    Place,
    /// Advance to the next frame, pivot unchanged, no kicks
    Rotate,
    Down,
    Left,
    Right,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Engine<R = SimpleRng> {
    board: Board,
    active: Option<ActivePiece>,
    next: PieceKind,
    lines: u32,
    phase: Phase,
    rng: R,
}

impl<R: PieceSource> Engine<R> {
    /// Create an engine with the default 10x16 board.
    ///
    /// The game starts in `GameOver` with no active piece; call
    /// [`Engine::spawn`] (or [`Engine::restart`]) to begin.
    pub fn new(rng: R) -> Self {
        Self::with_size(BOARD_WIDTH, BOARD_HEIGHT, rng)
    }

    pub fn with_size(width: u8, height: u8, rng: R) -> Self {
        Self::with_board(Board::with_size(width, height), rng)
    }

    /// Start from a prepared board.
    ///
    /// Only `Locked` squares are kept; active-piece tags are dropped since
    /// there is no active piece yet.
    pub fn with_board(mut board: Board, mut rng: R) -> Self {
        board.retag(Cell::Falling, Cell::Empty);
        board.retag(Cell::PausedFalling, Cell::Empty);
        let next = rng.next_piece();
        Self {
            board,
            active: None,
            next,
            lines: 0,
            phase: Phase::GameOver,
            rng,
        }
    }

    /// Back to a fresh `GameOver` state with a new random source.
    pub fn reset(&mut self, rng: R) {
        self.rng = rng;
        self.clear_game();
    }

    /// New game on the current random stream: reset and spawn.
    ///
    /// Returns whether the first piece fit (it always does on an empty board
    /// of at least 4x4).
    pub fn restart(&mut self) -> bool {
        self.clear_game();
        self.spawn()
    }

    fn clear_game(&mut self) {
        self.board.clear();
        self.active = None;
        self.lines = 0;
        self.phase = Phase::GameOver;
        self.next = self.rng.next_piece();
    }

    /// Bring the next piece into play.
    ///
    /// On success the piece is drawn as `Falling` and the phase becomes
    /// `Playing`. If it does not fit, nothing is drawn, the piece is discarded
    /// and the phase becomes `GameOver`.
    pub fn spawn(&mut self) -> bool {
        if let Some(old) = self.active.take() {
            self.stamp(&old, Cell::Empty);
        }

        self.active = Some(ActivePiece::spawn(self.next, self.board.width()));
        self.next = self.rng.next_piece();

        if self.move_piece(MoveKind::Place) {
            self.phase = Phase::Playing;
            true
        } else {
            self.active = None;
            self.phase = Phase::GameOver;
            false
        }
    }

    pub fn rotate(&mut self) -> bool {
        self.playing_move(MoveKind::Rotate)
    }

    pub fn left(&mut self) -> bool {
        self.playing_move(MoveKind::Left)
    }

    pub fn right(&mut self) -> bool {
        self.playing_move(MoveKind::Right)
    }

    /// One row down. Never locks; see [`Engine::tick`] for that.
    pub fn soft_drop(&mut self) -> bool {
        self.playing_move(MoveKind::Down)
    }

    fn playing_move(&mut self, kind: MoveKind) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        self.move_piece(kind)
    }

    fn move_piece(&mut self, kind: MoveKind) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        if kind != MoveKind::Place {
            self.stamp(&active, Cell::Empty);
        }

        let candidate = active.moved(kind);
        let fits = candidate
            .cells()
            .iter()
            .all(|&(x, y)| !self.board.is_blocked(x, y));

        if fits {
            self.active = Some(candidate);
        } else if kind == MoveKind::Place {
            return false;
        }

        let drawn = if fits { candidate } else { active };
        self.stamp(&drawn, Cell::Falling);
        fits
    }

    fn stamp(&mut self, piece: &ActivePiece, cell: Cell) {
        for (x, y) in piece.cells() {
            self.board.set(x, y, cell);
        }
    }

    /// Gravity heartbeat.
    ///
    /// Moves the piece one row down; if it cannot fall it locks, full rows
    /// are cleared and counted, and the next piece spawns. A spawn that does
    /// not fit ends the game. Outside `Playing` this does nothing.
    pub fn tick(&mut self) -> Phase {
        if self.phase != Phase::Playing {
            return self.phase;
        }
        if self.move_piece(MoveKind::Down) {
            return self.phase;
        }

        if let Some(piece) = self.active.take() {
            self.stamp(&piece, Cell::Locked);
        }
        self.lines += self.board.clear_full_rows() as u32;
        self.spawn();
        self.phase
    }

    /// `Playing → Paused`; the active cells turn `PausedFalling`.
    pub fn pause(&mut self) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        if let Some(piece) = self.active {
            self.stamp(&piece, Cell::PausedFalling);
        }
        self.phase = Phase::Paused;
        true
    }

    /// `Paused → Playing`; the active cells turn `Falling` again.
    pub fn resume(&mut self) -> bool {
        if self.phase != Phase::Paused {
            return false;
        }
        if let Some(piece) = self.active {
            self.stamp(&piece, Cell::Falling);
        }
        self.phase = Phase::Playing;
        true
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            lines: self.lines,
            next: self.next,
            phase: self.phase,
        }
    }

    /// Write the snapshot into `out`, reusing its board allocation.
    pub fn snapshot_into(&self, out: &mut Snapshot) {
        out.board.clone_from(&self.board);
        out.lines = self.lines;
        out.next = self.next;
        out.phase = self.phase;
    }
}

impl<R> Engine<R> {
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn next(&self) -> PieceKind {
        self.next
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
}

impl Default for Engine<SimpleRng> {
    fn default() -> Self {
        Self::new(SimpleRng::default())
    }
}
