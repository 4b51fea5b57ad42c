//! Text-to-speech route group

use axum::{
    extract::{Multipart, State},
    response::Json,
    routing::post,
    Router,
};
use tracing::debug;
use voicegate_core::Upload;

use crate::error::ApiError;
use crate::models::TranscribeResponse;
use crate::AppState;

/// Routes mounted under the `/tts` prefix
pub fn router() -> Router<AppState> {
    Router::new().route("/transcribe", post(transcribe))
}

/// Accept an uploaded audio file and return its transcription.
///
/// The upload is consumed in memory and handed to the injected engine;
/// nothing is written to disk. Empty files are valid input.
pub async fn transcribe(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<TranscribeResponse>, ApiError> {
    let upload = read_file_field(multipart).await?;
    debug!(
        "Transcribe request: {} bytes ({})",
        upload.len(),
        upload.filename.as_deref().unwrap_or("unnamed")
    );

    let transcript = state.engine.transcribe(&upload).await?;

    Ok(Json(TranscribeResponse {
        text: transcript.text,
    }))
}

/// Pull the required `file` field out of the multipart stream
async fn read_file_field(mut multipart: Multipart) -> Result<Upload, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Failed reading multipart field: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.map_err(|e| {
            ApiError::bad_request(format!("Failed reading multipart 'file' field: {e}"))
        })?;

        let mut upload = Upload::new(bytes.to_vec());
        if let Some(name) = filename {
            upload = upload.with_filename(name);
        }
        if let Some(content_type) = content_type {
            upload = upload.with_content_type(content_type);
        }
        return Ok(upload);
    }

    Err(ApiError::bad_request(
        "Missing required multipart 'file' field",
    ))
}
