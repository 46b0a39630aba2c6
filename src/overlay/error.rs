use thiserror::Error;

use super::host::StyleKey;

/// Style lookups that the settings collaborator could not satisfy.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StyleError {
    #[error("No color configured for {key}")]
    Missing { key: StyleKey },
    #[error("Invalid color {value:?} for {key}: expected #RRGGBB or #RRGGBBAA")]
    InvalidColor { key: StyleKey, value: String },
}

#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("Overlay style unavailable: {0}")]
    Style(#[from] StyleError),
    #[error("Host has no magnification and no default magnification is configured")]
    MissingMagnification,
    #[error("Magnification must be finite and positive, got {0}")]
    InvalidMagnification(f32),
    #[error("Failed to measure overlay text {text:?}: {message}")]
    Measure { text: String, message: String },
    #[error("Draw list pops a transform that was never pushed")]
    UnbalancedTransform,
}
