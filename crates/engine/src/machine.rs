//! State machine - which commands each phase accepts
//!
//! | From      | rotate/left/right/soft | tick    | pause        | resume    | reset        |
//! |-----------|------------------------|---------|--------------|-----------|--------------|
//! | Playing   | apply                  | gravity | → Paused     | ignored   | → new game   |
//! | Paused    | ignored                | ignored | ignored      | → Playing | → new game   |
//! | GameOver  | ignored                | ignored | → new game   | ignored   | → new game   |

use crate::core::PieceSource;
use crate::engine::Engine;
use crate::types::Phase;

/// Commands the engine reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Rotate,
    Left,
    Right,
    /// Manual gravity step: fall one row, or lock if the piece cannot fall
    SoftDrop,
    Tick,
    Pause,
    Resume,
    Reset,
}

/// Whether `phase` reacts to `command` at all.
pub fn accepts(phase: Phase, command: Command) -> bool {
    match (phase, command) {
        (_, Command::Reset) => true,
        (Phase::Playing, Command::Resume) => false,
        (Phase::Playing, _) => true,
        (Phase::Paused, Command::Resume) => true,
        (Phase::Paused, _) => false,
        (Phase::GameOver, Command::Pause) => true,
        (Phase::GameOver, _) => false,
    }
}

impl<R: PieceSource> Engine<R> {
    /// Apply a command according to the phase table; returns the new phase.
    ///
    /// Commands the current phase does not accept are dropped silently.
    pub fn dispatch(&mut self, command: Command) -> Phase {
        if !accepts(self.phase(), command) {
            return self.phase();
        }

        match command {
            Command::Rotate => {
                self.rotate();
            }
            Command::Left => {
                self.left();
            }
            Command::Right => {
                self.right();
            }
            Command::SoftDrop | Command::Tick => {
                self.tick();
            }
            Command::Pause if self.phase() == Phase::GameOver => {
                self.restart();
            }
            Command::Pause => {
                self.pause();
            }
            Command::Resume => {
                self.resume();
            }
            Command::Reset => {
                self.restart();
            }
        }
        self.phase()
    }
}
