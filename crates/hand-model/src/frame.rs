//! Pose frames and the JSONL pose-stream format.
//!
//! Pose streams are recorded in append-only JSONL: a `#`-prefixed JSON
//! header line followed by one frame object per line. Frames without a
//! detected hand are recorded with a null pose so replay preserves the
//! original frame cadence.

use serde::{Deserialize, Serialize};

use crate::landmark::HandPose;

/// Monotonic timestamp in nanoseconds since session start.
pub type TimestampNs = u64;

/// One observation from the hand-tracking detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoseFrame {
    /// Monotonic nanoseconds since session start.
    #[serde(rename = "t")]
    pub timestamp_ns: TimestampNs,

    /// The detected hand, or `None` if no hand was visible this frame.
    pub pose: Option<HandPose>,
}

impl PoseFrame {
    /// Create a frame carrying a detected hand.
    pub fn with_pose(timestamp_ns: TimestampNs, pose: HandPose) -> Self {
        Self {
            timestamp_ns,
            pose: Some(pose),
        }
    }

    /// Create a frame with no detected hand.
    pub fn empty(timestamp_ns: TimestampNs) -> Self {
        Self {
            timestamp_ns,
            pose: None,
        }
    }

    /// Timestamp as fractional seconds since session start.
    pub fn timestamp_secs(&self) -> f64 {
        self.timestamp_ns as f64 / 1_000_000_000.0
    }
}

/// Stream metadata written as the first line of a pose-stream file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoseStreamHeader {
    /// Schema version for forward compatibility.
    pub schema_version: String,

    /// Wall-clock time at session start (ISO 8601).
    pub epoch_wall: String,

    /// Nominal frame rate of the source (Hz).
    pub frame_rate_hz: u32,

    /// Detector or tool that produced the stream.
    pub source: String,
}

impl PoseStreamHeader {
    /// Header with the current schema version.
    pub fn new(epoch_wall: impl Into<String>, frame_rate_hz: u32, source: impl Into<String>) -> Self {
        Self {
            schema_version: "1.0".to_string(),
            epoch_wall: epoch_wall.into(),
            frame_rate_hz,
            source: source.into(),
        }
    }
}

/// Parse frames from JSONL content (one JSON object per line).
///
/// Header and comment lines (starting with `#`) are skipped.
pub fn parse_frames(jsonl: &str) -> Result<Vec<PoseFrame>, serde_json::Error> {
    jsonl
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(serde_json::from_str)
        .collect()
}

/// Parse the `#`-prefixed header line of a pose-stream file, if present.
pub fn parse_header(jsonl: &str) -> Option<PoseStreamHeader> {
    let line = jsonl.lines().map(str::trim).find(|l| l.starts_with('#'))?;
    serde_json::from_str(line.trim_start_matches('#').trim()).ok()
}

/// Serialize frames to JSONL format, prefixed with a header line.
pub fn serialize_stream(
    header: &PoseStreamHeader,
    frames: &[PoseFrame],
) -> Result<String, serde_json::Error> {
    let mut output = String::new();
    output.push_str("# ");
    output.push_str(&serde_json::to_string(header)?);
    output.push('\n');
    for frame in frames {
        output.push_str(&serde_json::to_string(frame)?);
        output.push('\n');
    }
    Ok(output)
}
