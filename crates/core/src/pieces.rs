//! Pieces module - the seven shapes and their rotation frames
//!
//! Every shape has four pre-baked frames; each frame lists four cell offsets
//! relative to the piece pivot. Rotation simply selects the next frame. There
//! are no wall kicks: if the next frame does not fit, the rotation fails.

use crate::types::{PieceKind, Rotation, PIECE_COUNT, ROTATION_COUNT};

/// Offset of a single cell relative to the piece pivot
pub type MinoOffset = (i8, i8);

/// One rotation frame - 4 cell offsets from the pivot
pub type PieceShape = [MinoOffset; 4];

/// Frame table indexed by `[kind][rotation]`.
const SHAPES: [[PieceShape; ROTATION_COUNT]; PIECE_COUNT] = [
    // J
    [
        [(-1, -1), (0, -1), (0, 0), (0, 1)],
        [(-1, 0), (0, 0), (1, 0), (1, -1)],
        [(0, -1), (0, 0), (0, 1), (1, 1)],
        [(-1, 1), (-1, 0), (0, 0), (1, 0)],
    ],
    // L
    [
        [(1, -1), (0, -1), (0, 0), (0, 1)],
        [(-1, 0), (0, 0), (1, 0), (1, 1)],
        [(0, -1), (0, 0), (0, 1), (-1, 1)],
        [(-1, -1), (-1, 0), (0, 0), (1, 0)],
    ],
    // O
    [
        [(-1, -1), (0, -1), (-1, 0), (0, 0)],
        [(-1, -1), (0, -1), (-1, 0), (0, 0)],
        [(-1, -1), (0, -1), (-1, 0), (0, 0)],
        [(-1, -1), (0, -1), (-1, 0), (0, 0)],
    ],
    // S
    [
        [(-1, -1), (0, -1), (0, 0), (1, 0)],
        [(1, -1), (1, 0), (0, 0), (0, 1)],
        [(-1, 0), (0, 0), (0, 1), (1, 1)],
        [(-1, 1), (-1, 0), (0, 0), (0, -1)],
    ],
    // Z
    [
        [(-1, 0), (0, 0), (0, -1), (1, -1)],
        [(1, 1), (1, 0), (0, 0), (0, -1)],
        [(1, 0), (0, 0), (0, 1), (-1, 1)],
        [(-1, -1), (-1, 0), (0, 0), (0, 1)],
    ],
    // T
    [
        [(0, -1), (-1, 0), (0, 0), (1, 0)],
        [(0, -1), (0, 0), (0, 1), (1, 0)],
        [(-1, 0), (0, 0), (1, 0), (0, 1)],
        [(-1, 0), (0, -1), (0, 0), (0, 1)],
    ],
    // I
    [
        [(0, -1), (0, 0), (0, 1), (0, 2)],
        [(-2, 0), (-1, 0), (0, 0), (1, 0)],
        [(0, -2), (0, -1), (0, 0), (0, 1)],
        [(-1, 0), (0, 0), (1, 0), (2, 0)],
    ],
];

/// Number of shapes in the catalog.
pub const fn count() -> usize {
    PIECE_COUNT
}

/// Get the cell offsets for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    SHAPES[kind.index()][rotation.index()]
}

/// Index-based lookup; the rotation wraps modulo 4.
pub fn frame(shape: usize, rotation: usize) -> Option<PieceShape> {
    SHAPES
        .get(shape)
        .map(|frames| frames[rotation % ROTATION_COUNT])
}

/// Spawn frame, also used for the next-piece preview.
pub fn get_spawn_shape(kind: PieceKind) -> PieceShape {
    get_shape(kind, Rotation::North)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_stay_within_two_cells() {
        for frames in SHAPES.iter() {
            for shape in frames.iter() {
                for &(dx, dy) in shape.iter() {
                    assert!((-2..=2).contains(&dx));
                    assert!((-2..=2).contains(&dy));
                }
            }
        }
    }

    #[test]
    fn every_frame_has_four_distinct_cells() {
        for frames in SHAPES.iter() {
            for shape in frames.iter() {
                for i in 0..4 {
                    for j in (i + 1)..4 {
                        assert_ne!(shape[i], shape[j]);
                    }
                }
            }
        }
    }

    #[test]
    fn every_frame_contains_the_pivot() {
        for frames in SHAPES.iter() {
            for shape in frames.iter() {
                assert!(shape.contains(&(0, 0)));
            }
        }
    }

    #[test]
    fn square_frames_are_identical() {
        let frames = SHAPES[PieceKind::O.index()];
        assert!(frames.iter().all(|f| *f == frames[0]));
    }

    #[test]
    fn frame_wraps_rotation() {
        assert_eq!(frame(6, 4), frame(6, 0));
        assert_eq!(frame(7, 0), None);
    }
}
