//! Error types for the fallible surfaces (configuration loading).
//!
//! Engine operations never fail: out-of-range inputs are clamped.

/// Configuration error.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum InterpError {
    /// Duration outside the accepted range (or not finite).
    #[error("Invalid duration: {duration} (expected {min}..={max})")]
    InvalidDuration { duration: f32, min: f32, max: f32 },

    /// Intermediate frame count outside the accepted range.
    #[error("Invalid intermediate frame count: {count} (expected {min}..={max})")]
    InvalidFrameCount {
        count: usize,
        min: usize,
        max: usize,
    },

    /// Malformed JSON.
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl InterpError {
    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidDuration { .. } | Self::InvalidFrameCount { .. } => "validation",
            Self::Parse(_) => "serialization",
        }
    }
}
