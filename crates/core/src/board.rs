//! Board module - manages the game grid
//!
//! The board is a `width × height` grid of [`Cell`] tags stored row-major in a
//! flat vector. Coordinates: (x, y) where x grows left to right and y grows top
//! to bottom. Anything outside the grid counts as blocked.

use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH, MAX_BOARD_SIDE};

/// The game board - flat row-major storage of cell tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board of the default 10x16 size
    pub fn new() -> Self {
        Self::with_size(BOARD_WIDTH, BOARD_HEIGHT)
    }

    /// Create a new empty board.
    ///
    /// Sides larger than [`MAX_BOARD_SIDE`] are clamped to it.
    pub fn with_size(width: u8, height: u8) -> Self {
        let width = width.min(MAX_BOARD_SIDE);
        let height = height.min(MAX_BOARD_SIDE);
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width as usize * height as usize],
        }
    }

    /// Build a board from text rows, one char per cell (see [`Cell::from_char`]).
    ///
    /// Returns `None` when rows are ragged or empty, when either side exceeds
    /// [`MAX_BOARD_SIDE`], or when a row holds an unknown char.
    ///
    /// ```
    /// use retro_tetris_core::Board;
    /// use retro_tetris_core::types::Cell;
    ///
    /// let board = Board::from_rows(&["..", "#."]).unwrap();
    /// assert_eq!(board.get(0, 1), Some(Cell::Locked));
    /// assert!(board.is_blocked(2, 0));
    /// ```
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let height = u8::try_from(rows.len()).ok()?;
        let width = u8::try_from(rows.first()?.chars().count()).ok()?;
        if width == 0 || width > MAX_BOARD_SIDE || height > MAX_BOARD_SIDE {
            return None;
        }

        let mut board = Self::with_size(width, height);
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width as usize {
                return None;
            }
            for (x, ch) in row.chars().enumerate() {
                board.cells[y * width as usize + x] = Cell::from_char(ch)?;
            }
        }
        Some(board)
    }

    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if x < 0 || y < 0 || x as u8 >= self.width || y as u8 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y); `None` if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// The collision predicate: out of bounds, or any non-empty tag.
    ///
    /// Active-piece cells count as blocked, so callers erase the piece before
    /// testing where it may go next.
    pub fn is_blocked(&self, x: i8, y: i8) -> bool {
        !matches!(self.get(x, y), Some(Cell::Empty))
    }

    /// A row is full when every cell in it is `Locked`.
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|c| *c == Cell::Locked))
            .unwrap_or(false)
    }

    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height as usize {
            return None;
        }
        let start = y * self.width as usize;
        Some(&self.cells[start..start + self.width as usize])
    }

    /// Remove all full rows and return how many were removed.
    ///
    /// Rows above each removed row move down by one; the same number of empty
    /// rows appear at the top. Columns are never compacted.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.width as usize;
        let mut write_y = self.height as usize;
        let mut cleared = 0;

        // Two pointers, bottom to top: keep non-full rows, packed downwards.
        for read_y in (0..self.height as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * width;
                self.cells.copy_within(src..src + width, write_y * width);
            }
        }

        self.cells[..write_y * width].fill(Cell::Empty);
        cleared
    }

    /// Number of cells carrying the given tag.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|c| **c == cell).count()
    }

    /// Replace every occurrence of `from` with `to`.
    pub fn retag(&mut self, from: Cell, to: Cell) {
        for cell in self.cells.iter_mut().filter(|c| **c == from) {
            *cell = to;
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Reset every cell to `Empty`, keeping the allocation.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Text dump, one line per row (inverse of [`Board::from_rows`]).
    pub fn to_rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.width as usize)
            .map(|row| row.iter().map(Cell::as_char).collect())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
