//! Engine tunables.

use airpoint_common::config::EngineDefaults;

/// Configuration for the gesture engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Exponential smoothing factor in `[0.0, 1.0)`.
    /// Higher = more lag, less jitter.
    pub smoothing_factor: f64,

    /// Scale-normalized pinch distance below which a click fires.
    pub click_threshold: f64,

    /// Seconds to wait for the second gesture of the activation
    /// sequence before resetting to idle.
    pub activation_timeout_secs: f64,

    /// Gain applied to palm motion. Higher = faster cursor.
    pub sensitivity: f64,

    /// Minimum normalized hand size for click detection. Hands smaller
    /// than this (partially out of frame, degenerate geometry) are
    /// treated as insufficient signal.
    pub min_hand_size: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            smoothing_factor: 0.5,
            click_threshold: 0.05,
            activation_timeout_secs: 1.5,
            sensitivity: 2.5,
            min_hand_size: 0.01,
        }
    }
}

impl EngineConfig {
    /// Activation timeout in nanoseconds, for comparison against frame
    /// timestamps.
    pub fn activation_timeout_ns(&self) -> u64 {
        (self.activation_timeout_secs * 1_000_000_000.0) as u64
    }
}

impl From<&EngineDefaults> for EngineConfig {
    fn from(defaults: &EngineDefaults) -> Self {
        Self {
            smoothing_factor: defaults.smoothing_factor,
            click_threshold: defaults.click_threshold,
            activation_timeout_secs: defaults.activation_timeout_secs,
            sensitivity: defaults.sensitivity,
            min_hand_size: defaults.min_hand_size,
        }
    }
}
