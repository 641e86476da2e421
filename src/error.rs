//! Error types for the framesets knowledge base.
//!
//! Facet and registry operations report failure with `bool`/`Option` sentinels.
//! These types cover the places where the engine meets the outside world:
//! persistence, configuration, and explicit reference resolution.

use thiserror::Error;

/// Frame-related errors
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("Frame not found: {0}")]
    FrameNotFound(String),

    #[error("Frame already exists: {0}")]
    FrameExists(String),

    #[error("Invalid frame name: {0:?}")]
    InvalidFrameName(String),

    #[error("Slot not found: {frame}.{slot}")]
    SlotNotFound { frame: String, slot: String },

    #[error("Reference cycle detected on slot {slot:?}: {}", path.join(" -> "))]
    ReferenceCycle { slot: String, path: Vec<String> },

    #[error("Reference chain on slot {slot:?} from {frame} exceeds {limit} hops")]
    ReferenceDepthExceeded {
        frame: String,
        slot: String,
        limit: usize,
    },

    #[error("Decode error in frame {frame} line {line}: {message}")]
    Decode {
        frame: String,
        line: usize,
        message: String,
    },

    #[error("Storage I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// API-level errors (configuration, logging setup, wrapped frame errors)
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Frame error: {0}")]
    FrameError(#[from] FrameError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Output error: {0}")]
    OutputError(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
