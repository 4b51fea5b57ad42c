//! Wire models for the HTTP gateway

use serde::{Deserialize, Serialize};

/// Re-export core types used in handler signatures
pub use voicegate_core::types::{HealthStatus, Transcript, Upload};

/// Response body for `POST /tts/transcribe`.
///
/// Clients parse this shape directly, so it carries the text alone with
/// no envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscribeResponse {
    /// Transcribed text for the uploaded file
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcribe_response_wire_format() {
        let response = TranscribeResponse {
            text: "transcribed text placeholder".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"text":"transcribed text placeholder"}"#);
    }
}
