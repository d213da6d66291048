//! Pinch-to-click detection with hysteresis.
//!
//! The pinch distance is normalized by hand scale (wrist to middle
//! PIP) so click sensitivity is independent of how far the hand is
//! from the camera. A lock with a widened release threshold turns the
//! pinch into a one-shot edge-triggered click: exactly one press per
//! pinch, no chatter when the ratio hovers at the boundary.

use airpoint_hand_model::landmark::{HandPose, LandmarkId};

use crate::config::EngineConfig;

/// Release threshold as a multiple of the press threshold.
const RELEASE_FACTOR: f64 = 1.5;

/// Per-frame click decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickDecision {
    /// Pinch closed: emit one click.
    Press,
    /// Pinch opened past the release band.
    Release,
    /// No change.
    None,
}

/// The click detector.
#[derive(Debug)]
pub struct ClickDetector {
    threshold: f64,
    min_hand_size: f64,

    /// True while a pinch is held; suppresses repeat presses.
    locked: bool,
}

impl ClickDetector {
    /// Create an unlocked detector from engine tunables.
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            threshold: config.click_threshold,
            min_hand_size: config.min_hand_size,
            locked: false,
        }
    }

    /// Evaluate the pinch for one frame.
    ///
    /// A degenerate hand (scale reference at or below the minimum) is
    /// insufficient signal: the decision is `None` and the lock state
    /// is left untouched.
    pub fn step(&mut self, pose: &HandPose) -> ClickDecision {
        let hand_size = pose.hand_size();
        if hand_size <= self.min_hand_size {
            return ClickDecision::None;
        }

        let pinch = pose
            .point(LandmarkId::ThumbTip)
            .distance_to(&pose.point(LandmarkId::IndexTip));
        let ratio = pinch / hand_size;

        if ratio < self.threshold && !self.locked {
            self.locked = true;
            tracing::debug!(ratio, "Pinch press");
            return ClickDecision::Press;
        }

        if ratio > self.threshold * RELEASE_FACTOR && self.locked {
            self.locked = false;
            tracing::debug!(ratio, "Pinch release");
            return ClickDecision::Release;
        }

        ClickDecision::None
    }

    /// Whether a pinch is currently held.
    pub fn is_locked(&self) -> bool {
        self.locked
    }
}
