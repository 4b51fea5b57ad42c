//! Built-in speech-to-text engines

use crate::errors::SttError;
use crate::traits::SpeechToText;
use crate::types::{Transcript, Upload};
use async_trait::async_trait;
use tracing::debug;

/// Fixed text returned by [`PlaceholderTranscriber`]
pub const PLACEHOLDER_TRANSCRIPT: &str = "transcribed text placeholder";

/// Engine that returns a fixed transcript for every upload.
///
/// Stands in until a real engine is wired behind [`SpeechToText`]. The
/// output never depends on the upload's content, size, or file name, and
/// the upload is not persisted anywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderTranscriber;

impl PlaceholderTranscriber {
    /// Create a new placeholder engine
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SpeechToText for PlaceholderTranscriber {
    async fn transcribe(&self, upload: &Upload) -> Result<Transcript, SttError> {
        debug!(
            "Returning placeholder transcript for {} byte upload ({})",
            upload.len(),
            upload.filename.as_deref().unwrap_or("unnamed")
        );
        Ok(Transcript::new(PLACEHOLDER_TRANSCRIPT))
    }

    fn name(&self) -> &str {
        "placeholder"
    }
}
