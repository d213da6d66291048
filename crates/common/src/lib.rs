//! AirPoint Common Utilities
//!
//! Shared infrastructure for all AirPoint crates:
//! - Error types and result aliases
//! - Session clock for frame timestamping
//! - Tracing/logging initialization
//! - Configuration loading

pub mod clock;
pub mod config;
pub mod error;
pub mod logging;

pub use clock::*;
pub use config::*;
pub use error::*;
