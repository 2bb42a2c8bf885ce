use thiserror::Error;

/// Errors that can surface from the recording core.
///
/// The set is deliberately small: illegal commands (pause while idle,
/// repeated stop) are absorbed as no-ops per the session contract, and the
/// WAV encoder is total, so neither has an error variant.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecorderError {
    /// Microphone permission denied or no capture device present.
    #[error("capture source unavailable: {0}")]
    SourceUnavailable(String),

    /// Rejected recorder configuration (zero max duration, zero tick).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
