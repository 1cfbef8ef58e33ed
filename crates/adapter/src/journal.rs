//! Append-only JSONL session journal.
//!
//! Records are handed to a background tokio task over an unbounded channel so
//! the game loop never waits on disk. Each line is one [`JournalRecord`]:
//!
//! ```text
//! {"seq":1,"ts":1700000000000,"event":"start","seed":7,"width":10,"height":16,"tick_ms":1000}
//! {"seq":2,"ts":1700000000412,"event":"input","input":"left"}
//! {"seq":3,"ts":1700000009120,"event":"lines","lines":1,"cleared":1}
//! ```
//!
//! Write failures after the file is open are dropped; the game keeps running.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::runtime::{Builder, Runtime};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum JournalEvent {
    Start {
        seed: u32,
        width: u8,
        height: u8,
        tick_ms: u64,
    },
    Input {
        input: String,
    },
    Phase {
        phase: String,
        lines: u32,
    },
    Lines {
        lines: u32,
        cleared: u32,
    },
    Quit {
        lines: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalRecord {
    pub seq: u64,
    pub ts: u64,
    #[serde(flatten)]
    pub event: JournalEvent,
}

pub struct Journal {
    rt: Runtime,
    tx: Option<mpsc::UnboundedSender<JournalRecord>>,
    writer: Option<JoinHandle<()>>,
    seq: u64,
}

impl Journal {
    /// Open (or create) `path` for appending and start the writer task.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        use tokio::fs::OpenOptions;
        use tokio::io::AsyncWriteExt;

        let path = path.into();
        let rt = Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .context("starting journal runtime")?;
        let mut file = rt
            .block_on(OpenOptions::new().create(true).append(true).open(&path))
            .with_context(|| format!("opening journal {}", path.display()))?;

        let (tx, mut rx) = mpsc::unbounded_channel::<JournalRecord>();
        let writer = rt.spawn(async move {
            let mut buf: Vec<u8> = Vec::with_capacity(256);
            while let Some(rec) = rx.recv().await {
                buf.clear();
                if serde_json::to_writer(&mut buf, &rec).is_err() {
                    continue;
                }
                buf.push(b'\n');
                if file.write_all(&buf).await.is_err() {
                    break;
                }
            }
            let _ = file.flush().await;
        });

        Ok(Self {
            rt,
            tx: Some(tx),
            writer: Some(writer),
            seq: 0,
        })
    }

    pub fn record(&mut self, event: JournalEvent) {
        let Some(tx) = self.tx.as_ref() else {
            return;
        };
        self.seq += 1;
        let _ = tx.send(JournalRecord {
            seq: self.seq,
            ts: current_timestamp_ms(),
            event,
        });
    }

    /// Records queued so far.
    pub fn len(&self) -> u64 {
        self.seq
    }

    pub fn is_empty(&self) -> bool {
        self.seq == 0
    }

    /// Stop accepting records and wait until everything queued is on disk.
    pub fn close(mut self) {
        self.tx = None;
        if let Some(writer) = self.writer.take() {
            let _ = self.rt.block_on(writer);
        }
    }
}

fn current_timestamp_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
