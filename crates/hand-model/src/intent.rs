//! Pointer intent events emitted by the gesture engine.
//!
//! Intents are what the engine *wants* the pointer to do; the pointer
//! collaborator (or a replay log) consumes them. Coordinates are
//! absolute screen pixels, unlike landmark coordinates which are
//! normalized.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use airpoint_common::error::{AirpointError, AirpointResult};

use crate::frame::TimestampNs;

/// A single timestamped pointer intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointerIntent {
    /// Monotonic nanoseconds since session start.
    #[serde(rename = "t")]
    pub timestamp_ns: TimestampNs,

    /// The intent payload.
    #[serde(flatten)]
    pub kind: IntentKind,
}

/// Discriminated union of pointer intents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IntentKind {
    /// Move the cursor to an absolute screen position.
    Move {
        /// Target X in screen pixels.
        x: f64,
        /// Target Y in screen pixels.
        y: f64,
    },

    /// Synthesize a click at the current cursor position.
    Click,
}

impl PointerIntent {
    /// Create a move intent.
    pub fn move_to(timestamp_ns: TimestampNs, x: f64, y: f64) -> Self {
        Self {
            timestamp_ns,
            kind: IntentKind::Move { x, y },
        }
    }

    /// Create a click intent.
    pub fn click(timestamp_ns: TimestampNs) -> Self {
        Self {
            timestamp_ns,
            kind: IntentKind::Click,
        }
    }
}

/// Serialize intents to JSONL format.
pub fn serialize_intents(intents: &[PointerIntent]) -> Result<String, serde_json::Error> {
    let mut output = String::new();
    for intent in intents {
        output.push_str(&serde_json::to_string(intent)?);
        output.push('\n');
    }
    Ok(output)
}

/// Parse intents from JSONL content (one JSON object per line).
pub fn parse_intents(jsonl: &str) -> Result<Vec<PointerIntent>, serde_json::Error> {
    jsonl
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(serde_json::from_str)
        .collect()
}

/// Writes intents to a JSONL file in append-only mode.
pub struct IntentWriter {
    writer: BufWriter<File>,
    path: PathBuf,
    intents_written: u64,
}

impl IntentWriter {
    /// Create a new intent writer, truncating any existing file.
    pub fn new(path: PathBuf) -> AirpointResult<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)?;

        Ok(Self {
            writer: BufWriter::new(file),
            path,
            intents_written: 0,
        })
    }

    /// Write a single intent as a JSONL line.
    pub fn write_intent(&mut self, intent: &PointerIntent) -> AirpointResult<()> {
        let json = serde_json::to_string(intent)?;
        writeln!(self.writer, "{json}")
            .map_err(|e| AirpointError::pointer(format!("Failed to write intent: {e}")))?;
        self.intents_written += 1;

        // Flush every 1000 intents for crash safety
        if self.intents_written % 1000 == 0 {
            self.flush()?;
        }

        Ok(())
    }

    /// Flush buffered writes to disk.
    pub fn flush(&mut self) -> AirpointResult<()> {
        self.writer
            .flush()
            .map_err(|e| AirpointError::pointer(format!("Failed to flush intents: {e}")))?;
        Ok(())
    }

    /// Number of intents written.
    pub fn intents_written(&self) -> u64 {
        self.intents_written
    }

    /// Path to the output file.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl Drop for IntentWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
