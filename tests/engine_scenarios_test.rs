//! End-to-end engine scenarios on the default 10x16 board.

use retro_tetris::core::{Board, ScriptedPieces};
use retro_tetris::engine::{Command, Engine};
use retro_tetris::types::{Cell, PieceKind, Phase, MAX_BOARD_SIDE};

fn scripted(script: &str) -> ScriptedPieces {
    ScriptedPieces::parse(script).unwrap()
}

/// A 10x16 board with the given rows filled, leaving `gap` open on each.
fn board_with_rows(rows: std::ops::RangeInclusive<i8>, gap: i8) -> Board {
    let mut board = Board::new();
    for y in rows {
        for x in 0..10 {
            if x != gap {
                board.set(x, y, Cell::Locked);
            }
        }
    }
    board
}

fn locked_in_column(engine: &Engine<ScriptedPieces>, x: i8) -> Vec<i8> {
    (0..16)
        .filter(|&y| engine.board().get(x, y) == Some(Cell::Locked))
        .collect()
}

#[test]
fn square_spawns_drops_and_locks_at_the_floor() {
    let mut engine = Engine::new(scripted("oo"));
    engine.reset(scripted("oo"));
    assert!(engine.spawn());

    let active = engine.active().unwrap();
    assert_eq!(active.kind, PieceKind::O);
    assert_eq!((active.x, active.y), (5, 1));

    for _ in 0..14 {
        assert!(engine.soft_drop());
    }
    assert!(!engine.soft_drop(), "the floor stops a plain drop");
    assert_eq!(engine.board().count(Cell::Falling), 4);

    engine.dispatch(Command::SoftDrop);
    for (x, y) in [(4, 14), (5, 14), (4, 15), (5, 15)] {
        assert_eq!(engine.board().get(x, y), Some(Cell::Locked));
    }
    assert_eq!(engine.board().count(Cell::Locked), 4);
    assert_eq!(engine.lines(), 0);
    assert_eq!(engine.phase(), Phase::Playing);
}

#[test]
fn vertical_bar_completes_a_single_row() {
    let mut engine = Engine::with_board(board_with_rows(15..=15, 9), scripted("io"));
    assert!(engine.spawn());
    assert_eq!(engine.active().unwrap().kind, PieceKind::I);

    for _ in 0..4 {
        assert!(engine.right());
    }
    assert!(!engine.right());
    assert_eq!(engine.active().unwrap().x, 9);

    // The spawn frame is already vertical: rows y-1..=y+2.
    for _ in 0..12 {
        assert_eq!(engine.tick(), Phase::Playing);
    }
    assert_eq!(engine.active().unwrap().y, 13);
    engine.tick();

    assert_eq!(engine.lines(), 1);
    // The three surviving bar squares shift down with the rows above.
    assert_eq!(locked_in_column(&engine, 9), vec![13, 14, 15]);
    assert_eq!(engine.board().count(Cell::Locked), 3);
    for x in 0..9 {
        assert_eq!(engine.board().get(x, 15), Some(Cell::Empty));
    }
}

#[test]
fn vertical_bar_clears_four_rows_at_once() {
    let mut engine = Engine::with_board(board_with_rows(12..=15, 9), scripted("io"));
    engine.spawn();
    for _ in 0..4 {
        engine.right();
    }
    while engine.active().map(|a| a.kind) == Some(PieceKind::I) {
        engine.tick();
    }

    assert_eq!(engine.lines(), 4);
    assert_eq!(engine.board().count(Cell::Locked), 0);
    assert_eq!(engine.board().count(Cell::Falling), 4);
    assert_eq!(engine.phase(), Phase::Playing);
}

#[test]
fn rotation_at_the_right_wall_fails_without_kicking() {
    let mut engine = Engine::new(scripted("i"));
    engine.spawn();
    while engine.right() {}
    assert_eq!(engine.active().unwrap().x, 9);

    // Frame 1 is horizontal and would reach x = 10.
    let before = engine.snapshot();
    let active = engine.active();
    assert!(!engine.rotate());
    assert_eq!(engine.snapshot(), before);
    assert_eq!(engine.active(), active);
}

#[test]
fn rotation_one_column_in_fails_on_the_long_horizontal_frame() {
    let mut engine = Engine::new(scripted("i"));
    engine.spawn();
    engine.soft_drop();
    engine.soft_drop();
    for _ in 0..3 {
        engine.right();
    }
    assert_eq!(engine.active().unwrap().x, 8);

    assert!(engine.rotate(), "frame 1 spans x 6..=9");
    assert!(engine.rotate(), "frame 2 is vertical again");
    let before = engine.snapshot();
    assert!(!engine.rotate(), "frame 3 spans x 7..=10");
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn blocked_spawn_ends_the_game() {
    // Rows 2..=15 hold locked squares but none of them is full.
    let board = board_with_rows(2..=15, 0);
    let mut engine = Engine::with_board(board, scripted("o"));
    assert!(engine.spawn());

    // The square cannot fall: it locks in rows 0..=1 and the next square
    // has nowhere to go.
    assert_eq!(engine.tick(), Phase::GameOver);
    assert_eq!(engine.board().count(Cell::Falling), 0);
    assert!(engine.active().is_none());
    assert_eq!(engine.lines(), 0);

    let after = engine.snapshot();
    assert_eq!(engine.dispatch(Command::Tick), Phase::GameOver);
    assert_eq!(engine.dispatch(Command::Left), Phase::GameOver);
    assert_eq!(engine.snapshot(), after);
}

#[test]
fn pause_round_trip_restores_the_snapshot() {
    let mut engine = Engine::new(scripted("tz"));
    engine.spawn();
    engine.tick();
    engine.left();
    let before = engine.snapshot();

    assert!(engine.pause());
    let paused = engine.snapshot();
    assert_eq!(paused.phase, Phase::Paused);
    assert_eq!(paused.board.count(Cell::PausedFalling), 4);
    assert_eq!(paused.board.count(Cell::Falling), 0);

    assert!(engine.resume());
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn reset_command_starts_over_from_any_phase() {
    let mut engine = Engine::new(scripted("ls"));
    engine.spawn();
    engine.tick();
    engine.dispatch(Command::Pause);

    assert_eq!(engine.dispatch(Command::Reset), Phase::Playing);
    assert_eq!(engine.lines(), 0);
    assert_eq!(engine.board().count(Cell::Falling), 4);
    assert_eq!(engine.board().count(Cell::PausedFalling), 0);
}

#[test]
fn reset_after_a_cleared_line_returns_to_idle() {
    let mut engine = Engine::with_board(board_with_rows(15..=15, 9), scripted("io"));
    engine.spawn();
    for _ in 0..4 {
        engine.right();
    }
    while engine.lines() == 0 {
        engine.tick();
    }
    assert!(engine.board().count(Cell::Locked) > 0);
    assert!(engine.active().is_some());

    engine.reset(scripted("o"));
    assert_eq!(engine.lines(), 0);
    assert_eq!(engine.phase(), Phase::GameOver);
    assert!(engine.active().is_none());
    for tag in [Cell::Locked, Cell::Falling, Cell::PausedFalling] {
        assert_eq!(engine.board().count(tag), 0, "{tag:?} left behind");
    }

    assert!(engine.spawn());
    assert_eq!(engine.active().unwrap().kind, PieceKind::O);
}

#[test]
fn oversized_board_is_clamped_and_gravity_stays_in_range() {
    let mut engine = Engine::with_size(10, 200, scripted("o"));
    assert_eq!(engine.board().height(), MAX_BOARD_SIDE);
    assert!(engine.spawn());

    for _ in 0..300 {
        engine.tick();
    }
    assert_eq!(engine.phase(), Phase::Playing);
    assert_eq!(engine.board().count(Cell::Falling), 4);
    let snap = engine.snapshot();
    assert_eq!(snap.height(), MAX_BOARD_SIDE);
    assert_eq!(snap.cell(4, MAX_BOARD_SIDE - 1), Cell::Locked);
}
