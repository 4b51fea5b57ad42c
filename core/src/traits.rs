//! Core traits defining the collaborator interfaces for Voicegate

use crate::errors::{PresentationError, SttError};
use crate::types::{Transcript, Upload};
use async_trait::async_trait;
use std::sync::Arc;

/// Capability trait for speech-to-text engines.
///
/// The gateway's handlers depend on this trait but do not own an engine;
/// a concrete integration is injected at composition time. Engines receive
/// the request-scoped upload directly, so they decide for themselves
/// whether the audio ever touches disk.
#[async_trait]
pub trait SpeechToText: Send + Sync {
    /// Transcribe one uploaded audio payload into text
    async fn transcribe(&self, upload: &Upload) -> Result<Transcript, SttError>;

    /// Engine name used in logs and startup banners
    fn name(&self) -> &str {
        "unnamed"
    }
}

/// Trait for presentation adapters exposing the gateway over a transport
#[async_trait]
pub trait PresentationAdapter: Send + Sync {
    /// Start serving requests against the given speech-to-text engine.
    ///
    /// Runs until the process receives a shutdown signal or the server
    /// fails; the routing table is assembled once before serving begins
    /// and is immutable afterwards.
    async fn start(&self, engine: Arc<dyn SpeechToText>) -> Result<(), PresentationError>;

    /// Stop serving
    async fn stop(&self) -> Result<(), PresentationError>;
}
