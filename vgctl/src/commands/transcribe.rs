//! Transcription command implementation

use crate::client::{TranscribeResult, VoicegateClient};
use crate::config::VgctlConfig;
use colored::*;
use reqwest::multipart;
use std::path::Path;
use tracing::info;
use voicegate_core::errors::CoreError;

/// Handle transcribe command: upload one audio file and print the text
pub async fn handle_transcribe_command(file: &Path, config: &VgctlConfig) -> Result<(), CoreError> {
    let client = VoicegateClient::new(config.clone())?;

    let bytes = tokio::fs::read(file)
        .await
        .map_err(|e| CoreError::Internal(format!("Failed to read {}: {}", file.display(), e)))?;

    let filename = file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());

    info!("Uploading {} ({} bytes) for transcription", filename, bytes.len());

    let part = multipart::Part::bytes(bytes).file_name(filename);
    let form = multipart::Form::new().part("file", part);

    let response = client.post_multipart("/tts/transcribe", form).await?;

    match client.handle_response::<TranscribeResult>(response).await {
        Ok(result) => {
            println!("{}", "✓ Transcription complete".green().bold());
            println!("{}", result.text);
            Ok(())
        }
        Err(e) => {
            println!("{}", "✗ Transcription failed".red().bold());
            println!("Error: {}", e.to_string().red());
            Err(e)
        }
    }
}
