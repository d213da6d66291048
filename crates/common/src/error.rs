//! Error types shared across AirPoint crates.

use std::path::PathBuf;

/// Top-level error type for AirPoint operations.
#[derive(Debug, thiserror::Error)]
pub enum AirpointError {
    #[error("Pose stream error: {message}")]
    PoseStream { message: String },

    #[error("Pointer error: {message}")]
    Pointer { message: String },

    #[error("Screen error: {message}")]
    Screen { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Unsupported operation: {message}")]
    Unsupported { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using AirpointError.
pub type AirpointResult<T> = Result<T, AirpointError>;

impl AirpointError {
    pub fn pose_stream(msg: impl Into<String>) -> Self {
        Self::PoseStream {
            message: msg.into(),
        }
    }

    pub fn pointer(msg: impl Into<String>) -> Self {
        Self::Pointer {
            message: msg.into(),
        }
    }

    pub fn screen(msg: impl Into<String>) -> Self {
        Self::Screen {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported {
            message: msg.into(),
        }
    }
}
