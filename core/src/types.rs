//! Core data types for Voicegate

use serde::{Deserialize, Serialize};

/// A file upload received by the gateway.
///
/// Uploads are request-scoped: they exist only for the duration of one
/// request/response cycle, carry no identifier, and are never persisted.
#[derive(Debug, Clone, Default)]
pub struct Upload {
    /// Client-supplied file name, if any
    pub filename: Option<String>,
    /// Declared MIME type of the payload, if any
    pub content_type: Option<String>,
    /// Raw payload bytes
    pub data: Vec<u8>,
}

impl Upload {
    /// Create an upload from raw bytes
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            filename: None,
            content_type: None,
            data,
        }
    }

    /// Attach the client-supplied file name
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Attach the declared MIME type
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Size of the payload in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the payload is empty (empty uploads are still valid input)
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Text produced by a speech-to-text engine for one upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    /// The transcribed text
    pub text: String,
}

impl Transcript {
    /// Create a transcript from text
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Liveness response body, computed fresh on every query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Always `"ok"` while the process is serving
    pub status: String,
}

impl HealthStatus {
    /// The constant healthy status
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_builder() {
        let upload = Upload::new(vec![0x00, 0x01])
            .with_filename("a.wav")
            .with_content_type("audio/wav");

        assert_eq!(upload.filename.as_deref(), Some("a.wav"));
        assert_eq!(upload.content_type.as_deref(), Some("audio/wav"));
        assert_eq!(upload.len(), 2);
        assert!(!upload.is_empty());
    }

    #[test]
    fn test_empty_upload_is_valid() {
        let upload = Upload::new(Vec::new()).with_filename("empty.wav");
        assert!(upload.is_empty());
        assert_eq!(upload.len(), 0);
    }

    #[test]
    fn test_health_status_wire_format() {
        let json = serde_json::to_string(&HealthStatus::ok()).unwrap();
        assert_eq!(json, r#"{"status":"ok"}"#);
    }

    #[test]
    fn test_transcript_wire_format() {
        let json = serde_json::to_string(&Transcript::new("hello")).unwrap();
        assert_eq!(json, r#"{"text":"hello"}"#);
    }
}
