//! RNG module - seeded piece selection
//!
//! The game draws each next piece uniformly from the seven shapes. The
//! sampler is a small LCG so that a seed fully determines a game.
//!
//! [`PieceSource`] is the seam the engine draws through; [`ScriptedPieces`]
//! replays a fixed sequence for demos and tests.

use crate::types::{PieceKind, PIECE_COUNT};

/// Anything that can hand the engine its next piece.
pub trait PieceSource {
    fn next_piece(&mut self) -> PieceKind;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high half of the state; the low bits of an LCG have short
    /// periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 16) % max
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PieceSource for SimpleRng {
    fn next_piece(&mut self) -> PieceKind {
        let index = self.next_range(PIECE_COUNT as u32) as usize;
        PieceKind::ALL[index]
    }
}

/// Replays a fixed list of pieces, cycling when it runs out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedPieces {
    pieces: Vec<PieceKind>,
    pos: usize,
}

impl ScriptedPieces {
    /// An empty script falls back to a single `O`.
    pub fn new(pieces: impl Into<Vec<PieceKind>>) -> Self {
        let mut pieces = pieces.into();
        if pieces.is_empty() {
            pieces.push(PieceKind::O);
        }
        Self { pieces, pos: 0 }
    }

    /// Parse a script such as `"oiij"` (case-insensitive, one letter per piece).
    pub fn parse(script: &str) -> Option<Self> {
        let pieces = script
            .chars()
            .map(|c| PieceKind::from_str(&c.to_string()))
            .collect::<Option<Vec<_>>>()?;
        Some(Self::new(pieces))
    }
}

impl PieceSource for ScriptedPieces {
    fn next_piece(&mut self) -> PieceKind {
        let piece = self.pieces[self.pos];
        self.pos = (self.pos + 1) % self.pieces.len();
        piece
    }
}
