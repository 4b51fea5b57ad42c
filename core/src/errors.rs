//! Error types for Voicegate core operations

use thiserror::Error;

/// Main error type for Voicegate core operations
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Speech-to-text error: {0}")]
    Stt(#[from] SttError),

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Errors related to speech-to-text engine operations
#[derive(Error, Debug)]
pub enum SttError {
    #[error("Engine configuration error: {0}")]
    ConfigError(String),

    #[error("Unsupported audio payload: {0}")]
    UnsupportedAudio(String),

    #[error("Transcription failed: {0}")]
    TranscriptionFailed(String),

    #[error("Timeout during transcription")]
    Timeout,

    #[error("Internal engine error: {0}")]
    InternalError(String),
}

/// Errors related to presentation adapters
#[derive(Error, Debug)]
pub enum PresentationError {
    #[error("Server startup failed: {0}")]
    StartupFailed(String),

    #[error("Server shutdown failed: {0}")]
    ShutdownFailed(String),

    #[error("Request handling error: {0}")]
    RequestHandling(String),
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Result type alias for speech-to-text operations
pub type SttResult<T> = Result<T, SttError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stt_error_converts_to_core_error() {
        let err: CoreError = SttError::Timeout.into();
        assert!(matches!(err, CoreError::Stt(SttError::Timeout)));
    }

    #[test]
    fn test_error_display() {
        let err = CoreError::Configuration("duplicate prefix /tts".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: duplicate prefix /tts"
        );
    }
}
