//! Error types for the DTMF encoder.

use thiserror::Error;

/// Result type for encoder operations.
pub type EncodeResult<T> = Result<T, EncodeError>;

/// Errors that can occur while encoding text into a WAV file.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// No text was given to encode.
    #[error("no data to encode given")]
    EmptyInput,

    /// The encoded audio would be longer than the configured ceiling.
    #[error("duration of {duration:.3} seconds exceeds the limit of {limit} seconds")]
    DurationTooLong {
        /// Requested duration in seconds.
        duration: f64,
        /// Configured ceiling in seconds.
        limit: f64,
    },

    /// Invalid sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// A duration parameter is negative or not finite.
    #[error("invalid {name}: {value} seconds")]
    InvalidDuration {
        /// Parameter name.
        name: &'static str,
        /// The invalid value.
        value: f64,
    },

    /// The data chunk would not fit in the 32-bit RIFF length fields.
    #[error("sample buffer of {samples} samples is too large for a WAV container")]
    BufferTooLarge {
        /// Number of samples that were requested.
        samples: u64,
    },

    /// Writing to the output sink failed. The output is incomplete.
    #[error("failed to write output: {0}")]
    SinkWrite(#[from] std::io::Error),
}

impl EncodeError {
    /// Creates an invalid duration error.
    pub fn invalid_duration(name: &'static str, value: f64) -> Self {
        Self::InvalidDuration { name, value }
    }

    /// Stable error code for machine-readable output.
    pub fn code(&self) -> &'static str {
        match self {
            EncodeError::EmptyInput => "ENC_001",
            EncodeError::DurationTooLong { .. } => "ENC_002",
            EncodeError::InvalidSampleRate { .. } => "ENC_003",
            EncodeError::InvalidDuration { .. } => "ENC_004",
            EncodeError::BufferTooLarge { .. } => "ENC_005",
            EncodeError::SinkWrite(_) => "ENC_006",
        }
    }

    /// Returns true if the error happened after bytes may have reached the sink.
    pub fn is_partial_output(&self) -> bool {
        matches!(self, EncodeError::SinkWrite(_))
    }
}
