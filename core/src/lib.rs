//! # Voicegate Core
//!
//! Core types, traits, and business logic for the Voicegate voice assistant
//! gateway. This crate provides the fundamental abstractions that all
//! presentation adapters and engine integrations must implement.

pub mod engine;
pub mod errors;
pub mod traits;
pub mod types;

// Re-export commonly used types and traits
pub use engine::{PlaceholderTranscriber, PLACEHOLDER_TRANSCRIPT};
pub use errors::{CoreError, PresentationError, SttError};
pub use traits::{PresentationAdapter, SpeechToText};
pub use types::{HealthStatus, Transcript, Upload};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::engine::*;
    pub use crate::errors::*;
    pub use crate::traits::*;
    pub use crate::types::*;
    pub use async_trait::async_trait;
}
