//! Core types module - shared tags and constants
//!
//! This crate defines the small vocabulary shared by the engine, the
//! presentation adapter and the terminal front-end. Everything here is plain
//! data with no dependencies.
//!
//! # Board Dimensions
//!
//! The classic playfield this game is built around:
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 16 rows (indexed 0-15, top to bottom)
//! - **Spawn pivot**: (width / 2, 1)
//!
//! Both dimensions can be changed at startup, up to [`MAX_BOARD_SIDE`] cells;
//! these are the defaults.
//!
//! # Timing
//!
//! Gravity is a single fixed heartbeat of [`TICK_MS`] (one row per second).
//! There is no level-based speed-up.
//!
//! # Examples
//!
//! ```
//! use retro_tetris_types::{Cell, Input, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_index(6), Some(PieceKind::I));
//! assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
//! assert_eq!(Input::PauseToggle.as_str(), "pauseToggle");
//! assert!(Cell::default().is_empty());
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 16);
//! ```

/// Default board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Default board height in cells (16 rows)
pub const BOARD_HEIGHT: u8 = 16;

/// Largest board side; coordinates are `i8`, so boards stay well below 128
pub const MAX_BOARD_SIDE: u8 = 40;

/// Default gravity period in milliseconds (one row per second)
pub const TICK_MS: u32 = 1000;

/// Number of distinct piece shapes
pub const PIECE_COUNT: usize = 7;

/// Number of rotation frames per shape
pub const ROTATION_COUNT: usize = 4;

/// Cells per piece
pub const PIECE_CELLS: usize = 4;

/// State of a single board square.
///
/// Each square is exactly one of these; the paused look of the active piece is
/// its own tag so that "locked but falling" style combinations cannot exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    /// Settled square of a past piece
    Locked,
    /// Square of the active piece
    Falling,
    /// Square of the active piece while the game is paused
    PausedFalling,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// True for both active-piece tags.
    pub fn is_active(&self) -> bool {
        matches!(self, Cell::Falling | Cell::PausedFalling)
    }

    /// Single-character form used by board dumps and test fixtures.
    ///
    /// ```
    /// use retro_tetris_types::Cell;
    ///
    /// assert_eq!(Cell::Locked.as_char(), '#');
    /// assert_eq!(Cell::from_char('@'), Some(Cell::Falling));
    /// ```
    pub fn as_char(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Locked => '#',
            Cell::Falling => '@',
            Cell::PausedFalling => '%',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Cell::Empty),
            '#' => Some(Cell::Locked),
            '@' => Some(Cell::Falling),
            '%' => Some(Cell::PausedFalling),
            _ => None,
        }
    }
}

/// Game phase.
///
/// The cycle is `GameOver → Playing ⇄ Paused`, and `Playing → GameOver` when a
/// freshly spawned piece does not fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Playing,
    Paused,
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Playing => "playing",
            Phase::Paused => "paused",
            Phase::GameOver => "gameOver",
        }
    }
}

/// The seven piece kinds, in catalog order.
///
/// The discriminant is the catalog index used by the random source:
/// J, L, O, S, Z, T, I.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    J,
    L,
    O,
    S,
    Z,
    T,
    I,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; PIECE_COUNT] = [
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::T,
        PieceKind::I,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// ```
    /// use retro_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("o"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("T"), Some(PieceKind::T));
    /// assert_eq!(PieceKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "t" => Some(PieceKind::T),
            "i" => Some(PieceKind::I),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::T => "t",
            PieceKind::I => "i",
        }
    }
}

/// Rotation frame of a piece.
///
/// Frames advance `North → East → South → West → North`; there is only one
/// rotation direction in this game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Next frame in the cycle.
    ///
    /// ```
    /// use retro_tetris_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::East.rotate_cw(), Rotation::South);
    /// assert_eq!(Rotation::South.rotate_cw(), Rotation::West);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Frame index in `0..4`.
    pub fn index(&self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Frame for an index, wrapping modulo 4.
    pub fn from_index(index: usize) -> Self {
        match index % ROTATION_COUNT {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }
}

/// Player inputs understood by the driver.
///
/// Physical key bindings live in the input crate; this is the decoded form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Input {
    /// Rotate the active piece to its next frame
    Rotate,
    /// Move one cell left
    Left,
    /// Move one cell right
    Right,
    /// Step one row down, locking the piece when it cannot fall
    SoftDrop,
    /// Pause, resume, or start a new game after a loss
    PauseToggle,
    /// Leave the game loop
    Quit,
}

impl Input {
    /// camelCase name, as written to the journal.
    pub fn as_str(&self) -> &'static str {
        match self {
            Input::Rotate => "rotate",
            Input::Left => "left",
            Input::Right => "right",
            Input::SoftDrop => "softDrop",
            Input::PauseToggle => "pauseToggle",
            Input::Quit => "quit",
        }
    }
}
