//! Per-frame orchestration: classifier → activation → motion + click.

use airpoint_hand_model::frame::TimestampNs;
use airpoint_hand_model::landmark::{HandPose, Point2D};

use crate::activation::{ActivationEvent, ActivationMachine, ActivationState};
use crate::classifier::{GestureClassifier, TipAboveJointClassifier};
use crate::click::{ClickDecision, ClickDetector};
use crate::config::EngineConfig;
use crate::motion::{MotionFilter, ScreenSize};
use crate::session::PointerSink;

/// What one frame produced, for display/debug collaborators and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOutcome {
    /// Activation machine state after this frame.
    pub state: ActivationState,

    /// Whether control is armed after this frame.
    pub active: bool,

    /// Activation toggle that happened this frame, if any.
    pub event: Option<ActivationEvent>,

    /// Cursor target forwarded to the sink, if movement was emitted.
    pub moved: Option<Point2D>,

    /// Click decision for this frame.
    pub click: ClickDecision,
}

/// The per-frame controller.
///
/// Owns all four engine state blocks; collaborators only see the
/// outcomes it emits. Sink failures are logged and swallowed so a
/// flaky pointer backend can never desynchronize engine state.
pub struct Controller {
    classifier: Box<dyn GestureClassifier + Send>,
    activation: ActivationMachine,
    motion: MotionFilter,
    click: ClickDetector,
    screen: ScreenSize,
}

impl Controller {
    /// Create a controller with the default tip-above-joint classifier.
    pub fn new(config: &EngineConfig, screen: ScreenSize) -> Self {
        Self::with_classifier(config, screen, Box::new(TipAboveJointClassifier))
    }

    /// Create a controller with a custom gesture classifier.
    pub fn with_classifier(
        config: &EngineConfig,
        screen: ScreenSize,
        classifier: Box<dyn GestureClassifier + Send>,
    ) -> Self {
        Self {
            classifier,
            activation: ActivationMachine::new(config.activation_timeout_ns()),
            motion: MotionFilter::new(config),
            click: ClickDetector::new(config),
            screen,
        }
    }

    /// Process one frame.
    ///
    /// With no pose, gesture/motion/click logic is skipped entirely:
    /// the activation machine keeps its state and timestamps, and the
    /// motion filter only drops its palm reference so the next visible
    /// frame re-primes instead of jumping.
    pub fn frame(
        &mut self,
        pose: Option<&HandPose>,
        now_ns: TimestampNs,
        sink: &mut dyn PointerSink,
    ) -> FrameOutcome {
        let Some(pose) = pose else {
            if self.activation.is_active() {
                self.motion.interrupt();
            }
            return self.outcome(None, None, ClickDecision::None);
        };

        let flags = self.classifier.classify(pose);
        let event = self.activation.step(&flags, now_ns);

        if event == Some(ActivationEvent::Activated) {
            match sink.position() {
                Ok((x, y)) => self.motion.seed(Point2D::new(x, y)),
                Err(e) => {
                    // Sink unavailable: keep the last smoothed position
                    // rather than guessing a seed
                    tracing::warn!("Failed to read pointer position: {e}");
                    self.motion.interrupt();
                }
            }
        }

        if !self.activation.is_active() {
            return self.outcome(event, None, ClickDecision::None);
        }

        let moved = self.motion.update(pose.palm_center(), self.screen);
        if let Some(target) = moved {
            if let Err(e) = sink.move_to(target.x, target.y) {
                tracing::warn!("Failed to move pointer: {e}");
            }
        }

        let click = self.click.step(pose);
        if click == ClickDecision::Press {
            if let Err(e) = sink.click() {
                tracing::warn!("Failed to synthesize click: {e}");
            }
        }

        self.outcome(event, moved, click)
    }

    fn outcome(
        &self,
        event: Option<ActivationEvent>,
        moved: Option<Point2D>,
        click: ClickDecision,
    ) -> FrameOutcome {
        FrameOutcome {
            state: self.activation.state(),
            active: self.activation.is_active(),
            event,
            moved,
            click,
        }
    }

    /// Whether control is currently armed.
    pub fn is_active(&self) -> bool {
        self.activation.is_active()
    }

    /// Activation machine state, for display/debug collaborators.
    pub fn activation_state(&self) -> ActivationState {
        self.activation.state()
    }
}
