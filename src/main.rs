//! Terminal Tetris runner (default binary).
//!
//! Waits on the keyboard with a timeout that ends at the next gravity tick,
//! then hands the tick and every key that arrived to the driver in one step.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use retro_tetris::adapter::{Driver, Flow, GameConfig, InputBatch};
use retro_tetris::core::SimpleRng;
use retro_tetris::engine::Engine;
use retro_tetris::input::map_key;
use retro_tetris::term::{TermPresenter, TerminalRenderer};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    config.validate()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let engine = Engine::with_size(config.width, config.height, SimpleRng::new(config.seed));
    let mut driver = Driver::new(engine, TermPresenter::new(config.width, config.height));
    if let Some(journal) = config.open_journal()? {
        driver = driver.with_journal(journal);
    }

    let result = play(term, &mut driver, config);

    // Flush the journal whether or not play failed.
    let (_, _, journal) = driver.into_parts();
    if let Some(journal) = journal {
        journal.close();
    }
    result
}

fn play(
    term: &mut TerminalRenderer,
    driver: &mut Driver<TermPresenter>,
    config: &GameConfig,
) -> Result<()> {
    driver.start();
    term.draw(driver.presenter().frame())?;

    let tick = config.tick();
    let mut last_tick = Instant::now();
    let mut inputs = InputBatch::new();

    loop {
        inputs.clear();
        let mut resized = false;

        let timeout = tick.saturating_sub(last_tick.elapsed());
        collect_events(timeout, &mut inputs, &mut resized)?;

        let due = last_tick.elapsed() >= tick;
        if due {
            last_tick = Instant::now();
        }

        if resized {
            driver.redraw_all();
            term.invalidate();
        }

        let flow = driver.step(due, &inputs);
        term.draw(driver.presenter().frame())?;
        if flow == Flow::Quit {
            return Ok(());
        }
    }
}

/// Block up to `timeout` for the first event, then drain whatever else is
/// already queued without waiting.
fn collect_events(timeout: Duration, inputs: &mut InputBatch, resized: &mut bool) -> Result<()> {
    if !event::poll(timeout)? {
        return Ok(());
    }
    loop {
        match event::read()? {
            Event::Key(key) => {
                if let Some(input) = map_key(key) {
                    let _ = inputs.try_push(input);
                }
            }
            Event::Resize(..) => *resized = true,
            _ => {}
        }
        if inputs.is_full() || !event::poll(Duration::ZERO)? {
            return Ok(());
        }
    }
}
