//! Error types for the configuration boundary.
//!
//! Timeline and curve commands never fail; they clamp. Only text coming in from
//! outside the engine can be rejected.

use thiserror::Error;

/// Errors raised while reading studio configuration or curve notation.
#[derive(Error, Debug)]
pub enum StudioError {
    /// Configuration JSON could not be decoded
    #[error("invalid animation config: {0}")]
    Config(#[from] serde_json::Error),

    /// Malformed `cubic-bezier(...)` text
    #[error("invalid cubic-bezier notation: {0}")]
    Curve(String),

    /// No easing preset with this name
    #[error("unknown easing preset: {0}")]
    UnknownPreset(String),
}

/// Result type for fallible studio operations
pub type Result<T> = std::result::Result<T, StudioError>;
