//! Property tests for the engine invariants.
//!
//! Covered:
//! - horizontal moves and rotation never change the multiset of cell tags
//! - the falling squares are always exactly the active piece's frame
//! - four unobstructed rotations are the identity
//! - clearing rows equals dropping full rows and padding empties on top
//! - the line counter never decreases within a game
//! - active squares stay on the board and never overlap settled ones
//! - a seed and an op sequence fully determine the snapshot trace

use proptest::prelude::*;
use retro_tetris::core::{Board, SimpleRng, Snapshot};
use retro_tetris::engine::{ActivePiece, Command, Engine};
use retro_tetris::types::{Cell, Phase};

const OPS: [Command; 8] = [
    Command::Rotate,
    Command::Left,
    Command::Right,
    Command::SoftDrop,
    Command::Tick,
    Command::Pause,
    Command::Resume,
    Command::Reset,
];

fn started(seed: u32) -> Engine {
    let mut engine = Engine::new(SimpleRng::new(seed));
    engine.restart();
    engine
}

fn tag_counts(board: &Board) -> [usize; 4] {
    [
        board.count(Cell::Empty),
        board.count(Cell::Locked),
        board.count(Cell::Falling),
        board.count(Cell::PausedFalling),
    ]
}

fn falling_cells(board: &Board) -> Vec<(i8, i8)> {
    let mut cells = Vec::new();
    for y in 0..board.height() as i8 {
        for x in 0..board.width() as i8 {
            if board.get(x, y) == Some(Cell::Falling) {
                cells.push((x, y));
            }
        }
    }
    cells
}

fn sorted_piece_cells(piece: &ActivePiece) -> Vec<(i8, i8)> {
    let mut cells = piece.cells().to_vec();
    cells.sort_by_key(|&(x, y)| (y, x));
    cells
}

fn check_active_geometry(engine: &Engine) -> Result<(), TestCaseError> {
    match (engine.phase(), engine.active()) {
        (Phase::Playing, Some(piece)) => {
            prop_assert_eq!(falling_cells(engine.board()), sorted_piece_cells(&piece));
        }
        (Phase::Paused, Some(piece)) => {
            prop_assert_eq!(engine.board().count(Cell::PausedFalling), 4);
            for (x, y) in piece.cells() {
                prop_assert_eq!(engine.board().get(x, y), Some(Cell::PausedFalling));
            }
        }
        (Phase::GameOver, None) => {
            prop_assert_eq!(engine.board().count(Cell::Falling), 0);
            prop_assert_eq!(engine.board().count(Cell::PausedFalling), 0);
        }
        (phase, active) => {
            prop_assert!(false, "unexpected {:?} with active {:?}", phase, active);
        }
    }
    Ok(())
}

fn random_board() -> impl Strategy<Value = Vec<Vec<bool>>> {
    // Rows are either full or random so that clears actually happen.
    let row = prop_oneof![
        Just(vec![true; 6]),
        prop::collection::vec(any::<bool>(), 6),
    ];
    prop::collection::vec(row, 1..12)
}

fn board_from_mask(mask: &[Vec<bool>]) -> Board {
    let mut board = Board::with_size(6, mask.len() as u8);
    for (y, row) in mask.iter().enumerate() {
        for (x, &filled) in row.iter().enumerate() {
            if filled {
                board.set(x as i8, y as i8, Cell::Locked);
            }
        }
    }
    board
}

proptest! {
    #[test]
    fn shifts_and_rotations_conserve_tags(
        seed in any::<u32>(),
        drops in 0usize..10,
        moves in prop::collection::vec(0usize..3, 1..60),
    ) {
        let mut engine = started(seed);
        for _ in 0..drops {
            engine.soft_drop();
        }
        let counts = tag_counts(engine.board());

        for m in moves {
            let moved = match m {
                0 => engine.rotate(),
                1 => engine.left(),
                _ => engine.right(),
            };
            prop_assert_eq!(tag_counts(engine.board()), counts);
            if moved {
                check_active_geometry(&engine)?;
            }
        }
    }

    #[test]
    fn four_free_rotations_are_identity(
        seed in any::<u32>(),
        drops in 2usize..10,
        shift in -4i8..=4,
    ) {
        let mut engine = started(seed);
        for _ in 0..drops {
            engine.soft_drop();
        }
        for _ in 0..shift.unsigned_abs() {
            let _ = if shift < 0 { engine.left() } else { engine.right() };
        }

        let before = engine.snapshot();
        let mut all_fit = true;
        for _ in 0..4 {
            all_fit &= engine.rotate();
        }
        if all_fit {
            prop_assert_eq!(engine.snapshot(), before);
        }
    }

    #[test]
    fn clearing_rows_is_a_row_shift(mask in random_board()) {
        let mut board = board_from_mask(&mask);
        let height = mask.len();

        let kept: Vec<&Vec<bool>> = mask.iter().filter(|row| !row.iter().all(|&c| c)).collect();
        let k = height - kept.len();

        prop_assert_eq!(board.clear_full_rows(), k);
        for y in 0..height {
            for x in 0..6 {
                let expected = if y < k { false } else { kept[y - k][x] };
                let cell = board.get(x as i8, y as i8);
                prop_assert_eq!(cell == Some(Cell::Locked), expected, "({}, {})", x, y);
            }
        }
    }

    #[test]
    fn random_play_keeps_invariants(
        seed in any::<u32>(),
        ops in prop::collection::vec(0usize..OPS.len(), 1..400),
    ) {
        let mut engine = started(seed);
        let mut lines = engine.lines();

        for op in ops {
            let command = OPS[op];
            let phase = engine.phase();
            engine.dispatch(command);

            let new_game = command == Command::Reset
                || (command == Command::Pause && phase == Phase::GameOver);
            if new_game {
                lines = engine.lines();
            }
            prop_assert!(engine.lines() >= lines, "lines went from {} to {}", lines, engine.lines());
            lines = engine.lines();

            check_active_geometry(&engine)?;
            if let Some(piece) = engine.active() {
                for (x, y) in piece.cells() {
                    prop_assert!((0..10).contains(&x) && (0..16).contains(&y));
                    prop_assert_ne!(engine.board().get(x, y), Some(Cell::Locked));
                }
            }
        }
    }

    #[test]
    fn same_seed_same_trace(
        seed in any::<u32>(),
        ops in prop::collection::vec(0usize..OPS.len(), 1..200),
    ) {
        let mut a = started(seed);
        let mut b = started(seed);
        let mut trace_a: Vec<Snapshot> = Vec::new();
        let mut trace_b: Vec<Snapshot> = Vec::new();

        for op in ops {
            a.dispatch(OPS[op]);
            b.dispatch(OPS[op]);
            trace_a.push(a.snapshot());
            trace_b.push(b.snapshot());
        }
        prop_assert_eq!(trace_a, trace_b);
    }
}
