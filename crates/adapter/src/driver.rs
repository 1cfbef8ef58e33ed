//! Driver - feeds ticks and inputs to the engine and keeps a presenter in sync
//!
//! One [`Driver::step`] is one iteration of the game loop: the gravity tick
//! (if due) is applied first, then every queued input in arrival order, then a
//! single reconcile pass pushes the visible changes to the presenter.

use arrayvec::ArrayVec;

use crate::core::{PieceSource, SimpleRng, Snapshot};
use crate::engine::{Command, Engine};
use crate::journal::{Journal, JournalEvent};
use crate::presenter::Presenter;
use crate::reconcile::{Reconciler, RedrawStats};
use crate::types::{Input, Phase};

/// Inputs gathered during one loop iteration.
pub type InputBatch = ArrayVec<Input, 32>;

/// Whether the loop should keep going after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Map an input to the engine command it means in `phase`.
///
/// The pause toggle is `Pause` while playing, `Resume` while paused and starts
/// a new game from `GameOver`. `Quit` has no engine command.
pub fn command_for(phase: Phase, input: Input) -> Option<Command> {
    let command = match input {
        Input::Rotate => Command::Rotate,
        Input::Left => Command::Left,
        Input::Right => Command::Right,
        Input::SoftDrop => Command::SoftDrop,
        Input::PauseToggle => match phase {
            Phase::Paused => Command::Resume,
            Phase::Playing | Phase::GameOver => Command::Pause,
        },
        Input::Quit => return None,
    };
    Some(command)
}

pub struct Driver<P, R = SimpleRng> {
    engine: Engine<R>,
    presenter: P,
    reconciler: Reconciler,
    snapshot: Snapshot,
    journal: Option<Journal>,
}

impl<P: Presenter, R: PieceSource> Driver<P, R> {
    pub fn new(engine: Engine<R>, presenter: P) -> Self {
        let snapshot = engine.snapshot();
        Self {
            engine,
            presenter,
            reconciler: Reconciler::new(),
            snapshot,
            journal: None,
        }
    }

    pub fn with_journal(mut self, journal: Journal) -> Self {
        self.journal = Some(journal);
        self
    }

    /// Draw the static frame, blank the preview and paint the whole board.
    pub fn start(&mut self) -> RedrawStats {
        self.presenter.draw_frames();
        self.presenter.clear_preview();
        self.reconciler.invalidate();
        self.reconcile()
    }

    /// Gravity tick.
    pub fn on_tick(&mut self) {
        self.apply(Command::Tick);
    }

    /// Apply one input; the presenter is not touched until the next reconcile.
    pub fn on_input(&mut self, input: Input) -> Flow {
        self.log(JournalEvent::Input {
            input: input.as_str().to_string(),
        });

        match command_for(self.engine.phase(), input) {
            Some(command) => {
                self.apply(command);
                Flow::Continue
            }
            None => {
                self.log(JournalEvent::Quit {
                    lines: self.engine.lines(),
                });
                Flow::Quit
            }
        }
    }

    /// One loop iteration: tick, inputs in order, then a single redraw.
    ///
    /// Inputs after a `Quit` are not applied.
    pub fn step(&mut self, tick: bool, inputs: &[Input]) -> Flow {
        if tick {
            self.on_tick();
        }

        let mut flow = Flow::Continue;
        for &input in inputs {
            if self.on_input(input) == Flow::Quit {
                flow = Flow::Quit;
                break;
            }
        }

        self.reconcile();
        flow
    }

    /// Push whatever changed since the last pass.
    pub fn reconcile(&mut self) -> RedrawStats {
        self.engine.snapshot_into(&mut self.snapshot);
        self.reconciler.reconcile(&self.snapshot, &mut self.presenter)
    }

    /// Repaint everything, e.g. after the terminal was resized.
    pub fn redraw_all(&mut self) -> RedrawStats {
        self.start()
    }

    fn apply(&mut self, command: Command) {
        let (phase, lines) = (self.engine.phase(), self.engine.lines());
        self.engine.dispatch(command);

        let now = self.engine.lines();
        if now > lines {
            self.log(JournalEvent::Lines {
                lines: now,
                cleared: now - lines,
            });
        }
        if self.engine.phase() != phase {
            self.log(JournalEvent::Phase {
                phase: self.engine.phase().as_str().to_string(),
                lines: now,
            });
        }
    }

    fn log(&mut self, event: JournalEvent) {
        if let Some(journal) = self.journal.as_mut() {
            journal.record(event);
        }
    }
}

impl<P, R> Driver<P, R> {
    pub fn engine(&self) -> &Engine<R> {
        &self.engine
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Tear the driver apart, e.g. to close the journal.
    pub fn into_parts(self) -> (Engine<R>, P, Option<Journal>) {
        (self.engine, self.presenter, self.journal)
    }
}
