//! Game configuration from environment variables.
//!
//! | Variable          | Default          | Accepted        |
//! |-------------------|------------------|-----------------|
//! | `TETRIS_WIDTH`    | 10               | 4..=40          |
//! | `TETRIS_HEIGHT`   | 16               | 4..=40          |
//! | `TETRIS_TICK_MS`  | 1000             | 10..=10000      |
//! | `TETRIS_SEED`     | wall-clock secs  | any `u32`       |
//! | `TETRIS_LOG_PATH` | unset            | non-empty path  |
//!
//! Values that fail to parse fall back to the default; values that parse but
//! are out of range are rejected by [`GameConfig::validate`].

use std::str::FromStr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{ensure, Result};

use crate::journal::{Journal, JournalEvent};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, MAX_BOARD_SIDE, TICK_MS};

pub const MIN_SIDE: u8 = 4;
pub const MAX_SIDE: u8 = MAX_BOARD_SIDE;
pub const MIN_TICK_MS: u64 = 10;
pub const MAX_TICK_MS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u8,
    pub height: u8,
    pub tick_ms: u64,
    pub seed: u32,
    /// Where to append the JSONL session journal; `None` disables it
    pub log_path: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            tick_ms: TICK_MS as u64,
            seed: clock_seed(),
            log_path: None,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let log_path = lookup("TETRIS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            width: parse_var(&lookup, "TETRIS_WIDTH").unwrap_or(defaults.width),
            height: parse_var(&lookup, "TETRIS_HEIGHT").unwrap_or(defaults.height),
            tick_ms: parse_var(&lookup, "TETRIS_TICK_MS").unwrap_or(defaults.tick_ms),
            seed: parse_var(&lookup, "TETRIS_SEED").unwrap_or(defaults.seed),
            log_path,
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            (MIN_SIDE..=MAX_SIDE).contains(&self.width),
            "TETRIS_WIDTH must be within {MIN_SIDE}..={MAX_SIDE}, got {}",
            self.width
        );
        ensure!(
            (MIN_SIDE..=MAX_SIDE).contains(&self.height),
            "TETRIS_HEIGHT must be within {MIN_SIDE}..={MAX_SIDE}, got {}",
            self.height
        );
        ensure!(
            (MIN_TICK_MS..=MAX_TICK_MS).contains(&self.tick_ms),
            "TETRIS_TICK_MS must be within {MIN_TICK_MS}..={MAX_TICK_MS}, got {}",
            self.tick_ms
        );
        Ok(())
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Open the journal at `log_path`, if any, with the session's `start`
    /// record already queued.
    pub fn open_journal(&self) -> Result<Option<Journal>> {
        let Some(path) = self.log_path.as_deref() else {
            return Ok(None);
        };
        let mut journal = Journal::open(path)?;
        journal.record(JournalEvent::Start {
            seed: self.seed,
            width: self.width,
            height: self.height,
            tick_ms: self.tick_ms,
        });
        Ok(Some(journal))
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key).and_then(|s| s.trim().parse().ok())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32)
        .unwrap_or(1)
}
