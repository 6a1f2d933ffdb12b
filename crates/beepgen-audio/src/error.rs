//! Error types for the tone backend.

use thiserror::Error;

/// Result type for tone operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur while generating a tone.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Invalid sample rate.
    #[error(
        "invalid sample rate: {rate} Hz (must be between 1 and {max} Hz)",
        max = crate::tone::MAX_SAMPLE_RATE
    )]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Invalid duration.
    #[error("invalid duration: {duration_ms} ms (must be finite and not negative)")]
    InvalidDuration {
        /// The invalid duration in milliseconds.
        duration_ms: f64,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AudioError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Stable error code for machine-readable output.
    pub fn code(&self) -> &'static str {
        match self {
            AudioError::InvalidSampleRate { .. } => "AUDIO_001",
            AudioError::InvalidDuration { .. } => "AUDIO_002",
            AudioError::InvalidParameter { .. } => "AUDIO_003",
            AudioError::Io(_) => "AUDIO_004",
        }
    }

    /// Returns true if this error came from the filesystem.
    pub fn is_io(&self) -> bool {
        matches!(self, AudioError::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_param_helper() {
        let err = AudioError::invalid_param("frames", "exceeds the 4 GiB WAV limit");
        assert!(err.to_string().contains("frames"));
        assert!(err.to_string().contains("4 GiB"));
        assert_eq!(err.code(), "AUDIO_003");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory");
        let err: AudioError = io.into();
        assert!(err.is_io());
        assert_eq!(err.code(), "AUDIO_004");
        assert!(err.to_string().starts_with("I/O error"));
    }

    #[test]
    fn test_validation_messages() {
        let err = AudioError::InvalidSampleRate { rate: 0 };
        assert!(err.to_string().contains("0 Hz"));
        assert!(!err.is_io());

        let err = AudioError::InvalidDuration { duration_ms: -5.0 };
        assert!(err.to_string().contains("-5 ms"));
    }
}
