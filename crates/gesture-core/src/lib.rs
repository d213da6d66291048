//! AirPoint Gesture Core — the control engine
//!
//! Interprets a stream of hand-pose observations as pointer control:
//! - **Classifier:** maps a pose snapshot to gesture flags
//! - **Activation:** two-step gesture sequence arms/disarms control
//! - **Motion:** relative palm deltas → smoothed absolute cursor targets
//! - **Click:** scale-normalized pinch with hysteresis → one-shot clicks
//! - **Controller/Session:** per-frame orchestration over collaborator traits
//!
//! This crate is pure computation — no camera, no OS pointer calls.
//! Poses come in through [`session::PoseSource`]; cursor movement and
//! clicks go out through [`session::PointerSink`].

pub mod activation;
pub mod classifier;
pub mod click;
pub mod config;
pub mod controller;
pub mod motion;
pub mod session;

pub use activation::{ActivationEvent, ActivationMachine, ActivationState};
pub use classifier::{GestureClassifier, GestureFlags, TipAboveJointClassifier};
pub use click::{ClickDecision, ClickDetector};
pub use config::EngineConfig;
pub use controller::{Controller, FrameOutcome};
pub use motion::{MotionFilter, ScreenSize};
pub use session::{Clock, ControlSession, PointerSink, PoseSource, ReplaySource, VirtualPointer};
