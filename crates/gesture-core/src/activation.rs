//! Activation state machine: two-step gesture sequence arms/disarms control.
//!
//! A thumbs-up moves the machine from idle to awaiting the second
//! gesture; a splayed palm within the timeout toggles the active flag
//! and returns to idle. The timeout check takes priority over the
//! gesture-success check when both could apply in the same frame.

use airpoint_hand_model::frame::TimestampNs;

use crate::classifier::GestureFlags;

/// Machine states. The machine runs indefinitely; there is no
/// terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationState {
    /// Waiting for the first gesture (thumbs-up).
    Idle,
    /// Saw a thumbs-up; waiting for a splayed palm before the timeout.
    AwaitingSecondGesture,
}

/// Emitted when the active flag toggles. `Activated` doubles as the
/// explicit re-prime signal for the motion filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationEvent {
    Activated,
    Deactivated,
}

/// The activation state machine.
#[derive(Debug)]
pub struct ActivationMachine {
    state: ActivationState,
    last_gesture_ns: TimestampNs,
    active: bool,
    timeout_ns: u64,
}

impl ActivationMachine {
    /// Create a machine in the idle state with the given timeout.
    pub fn new(timeout_ns: u64) -> Self {
        Self {
            state: ActivationState::Idle,
            last_gesture_ns: 0,
            active: false,
            timeout_ns,
        }
    }

    /// Evaluate one frame's gesture flags at time `now_ns`.
    ///
    /// Returns an event only on the frame where the active flag toggles.
    pub fn step(&mut self, flags: &GestureFlags, now_ns: TimestampNs) -> Option<ActivationEvent> {
        match self.state {
            ActivationState::Idle => {
                if flags.thumb_up {
                    tracing::info!("Saw thumbs-up, awaiting splayed palm");
                    self.state = ActivationState::AwaitingSecondGesture;
                    self.last_gesture_ns = now_ns;
                }
                None
            }
            ActivationState::AwaitingSecondGesture => {
                // Timeout has priority over gesture success
                if now_ns.saturating_sub(self.last_gesture_ns) > self.timeout_ns {
                    tracing::info!("Activation sequence timed out, resetting to idle");
                    self.state = ActivationState::Idle;
                    return None;
                }
                if flags.palm_splayed {
                    self.active = !self.active;
                    self.state = ActivationState::Idle;
                    let event = if self.active {
                        ActivationEvent::Activated
                    } else {
                        ActivationEvent::Deactivated
                    };
                    tracing::info!(active = self.active, "Saw splayed palm, toggling control");
                    return Some(event);
                }
                None
            }
        }
    }

    /// Whether pointer control is currently armed.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Current machine state, for display/debug collaborators.
    pub fn state(&self) -> ActivationState {
        self.state
    }
}
