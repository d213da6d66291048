//! AirPoint Hand Model
//!
//! Defines the core data contracts for AirPoint:
//! - **Landmarks:** The 21-point hand topology and normalized 2D geometry
//! - **Frames:** Timestamped pose frames and the JSONL pose-stream format
//! - **Intents:** Pointer output events (move, click) emitted by the engine
//!
//! All landmark coordinates are normalized to `[0.0, 1.0]` range relative
//! to the camera image, with y growing downward. Pointer intents carry
//! absolute screen-pixel coordinates.

pub mod frame;
pub mod intent;
pub mod landmark;

pub use frame::*;
pub use intent::*;
pub use landmark::*;
