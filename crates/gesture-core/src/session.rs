//! Collaborator traits and the frame-driven control session.
//!
//! The engine never touches a camera or the OS pointer directly. Poses
//! arrive through [`PoseSource`], cursor actions leave through
//! [`PointerSink`], and the session is strictly single-threaded: one
//! frame is processed to completion before the next is pulled.

use airpoint_common::clock::SessionClock;
use airpoint_common::error::AirpointResult;
use airpoint_hand_model::frame::PoseFrame;
use airpoint_hand_model::intent::PointerIntent;

use crate::click::ClickDecision;
use crate::config::EngineConfig;
use crate::controller::Controller;
use crate::motion::ScreenSize;

/// Source of pose frames, pulled once per loop iteration.
///
/// `Ok(None)` means the stream is exhausted and the session ends. A
/// frame whose `pose` is `None` means the detector saw no hand — a
/// normal per-frame condition, not the end of the stream.
pub trait PoseSource {
    fn next_frame(&mut self) -> AirpointResult<Option<PoseFrame>>;

    /// Source name for logging.
    fn name(&self) -> &str;
}

/// Pointer collaborator. Coordinates are absolute screen pixels.
pub trait PointerSink {
    /// Current cursor position, read once per activation to seed the
    /// motion filter.
    fn position(&mut self) -> AirpointResult<(f64, f64)>;

    /// Move the cursor to an absolute position.
    fn move_to(&mut self, x: f64, y: f64) -> AirpointResult<()>;

    /// Synthesize a click at the current position.
    fn click(&mut self) -> AirpointResult<()>;
}

/// Monotonic time source for live frame stamping.
pub trait Clock {
    fn now_ns(&self) -> u64;
}

impl Clock for SessionClock {
    fn now_ns(&self) -> u64 {
        self.elapsed_ns()
    }
}

/// Counters describing a completed session.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionSummary {
    pub frames: u64,
    pub frames_with_pose: u64,
    pub moves: u64,
    pub clicks: u64,
    pub activations: u64,
    pub deactivations: u64,
}

/// Drives a pose source through the controller until exhaustion.
///
/// Frame timestamps come from the source (a live source stamps them
/// with its [`Clock`]; a replay source carries recorded ones), so
/// replayed sessions reproduce timeout behavior exactly.
pub struct ControlSession {
    controller: Controller,
    intents: Vec<PointerIntent>,
}

impl ControlSession {
    /// Create a session over a fresh controller.
    pub fn new(config: &EngineConfig, screen: ScreenSize) -> Self {
        Self {
            controller: Controller::new(config, screen),
            intents: Vec::new(),
        }
    }

    /// Run until the source reports exhaustion.
    pub fn run(
        &mut self,
        source: &mut dyn PoseSource,
        sink: &mut dyn PointerSink,
    ) -> AirpointResult<SessionSummary> {
        tracing::info!(source = source.name(), "Control session started");
        let mut summary = SessionSummary::default();

        while let Some(frame) = source.next_frame()? {
            summary.frames += 1;
            if frame.pose.is_some() {
                summary.frames_with_pose += 1;
            }

            let outcome = self
                .controller
                .frame(frame.pose.as_ref(), frame.timestamp_ns, sink);

            match outcome.event {
                Some(crate::activation::ActivationEvent::Activated) => summary.activations += 1,
                Some(crate::activation::ActivationEvent::Deactivated) => {
                    summary.deactivations += 1
                }
                None => {}
            }

            if let Some(target) = outcome.moved {
                summary.moves += 1;
                self.intents
                    .push(PointerIntent::move_to(frame.timestamp_ns, target.x, target.y));
            }

            if outcome.click == ClickDecision::Press {
                summary.clicks += 1;
                self.intents.push(PointerIntent::click(frame.timestamp_ns));
            }
        }

        tracing::info!(
            frames = summary.frames,
            moves = summary.moves,
            clicks = summary.clicks,
            "Control session finished"
        );
        Ok(summary)
    }

    /// Pointer intents recorded during [`run`](Self::run), in order.
    pub fn intents(&self) -> &[PointerIntent] {
        &self.intents
    }

    /// The underlying controller, for state display.
    pub fn controller(&self) -> &Controller {
        &self.controller
    }
}

/// A pose source replaying an in-memory frame list.
pub struct ReplaySource {
    frames: std::vec::IntoIter<PoseFrame>,
    name: String,
}

impl ReplaySource {
    pub fn new(frames: Vec<PoseFrame>, name: impl Into<String>) -> Self {
        Self {
            frames: frames.into_iter(),
            name: name.into(),
        }
    }
}

impl PoseSource for ReplaySource {
    fn next_frame(&mut self) -> AirpointResult<Option<PoseFrame>> {
        Ok(self.frames.next())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// An in-memory pointer for replay and tests: tracks position and
/// counts the actions it receives.
#[derive(Debug, Clone)]
pub struct VirtualPointer {
    pub x: f64,
    pub y: f64,
    pub moves: u64,
    pub clicks: u64,
}

impl VirtualPointer {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            moves: 0,
            clicks: 0,
        }
    }
}

impl PointerSink for VirtualPointer {
    fn position(&mut self) -> AirpointResult<(f64, f64)> {
        Ok((self.x, self.y))
    }

    fn move_to(&mut self, x: f64, y: f64) -> AirpointResult<()> {
        self.x = x;
        self.y = y;
        self.moves += 1;
        Ok(())
    }

    fn click(&mut self) -> AirpointResult<()> {
        self.clicks += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_source_exhausts() {
        let mut source = ReplaySource::new(
            vec![PoseFrame::empty(0), PoseFrame::empty(33_000_000)],
            "test",
        );
        assert!(source.next_frame().unwrap().is_some());
        assert!(source.next_frame().unwrap().is_some());
        assert!(source.next_frame().unwrap().is_none());
    }

    #[test]
    fn test_empty_stream_session() {
        let mut session = ControlSession::new(
            &EngineConfig::default(),
            ScreenSize::new(1920.0, 1080.0),
        );
        let mut source = ReplaySource::new(vec![], "empty");
        let mut sink = VirtualPointer::new(0.0, 0.0);

        let summary = session.run(&mut source, &mut sink).unwrap();
        assert_eq!(summary.frames, 0);
        assert!(session.intents().is_empty());
        assert!(!session.controller().is_active());
    }

    #[test]
    fn test_virtual_pointer_tracks_moves() {
        let mut pointer = VirtualPointer::new(10.0, 20.0);
        assert_eq!(pointer.position().unwrap(), (10.0, 20.0));
        pointer.move_to(30.0, 40.0).unwrap();
        assert_eq!(pointer.position().unwrap(), (30.0, 40.0));
        assert_eq!(pointer.moves, 1);
    }
}
