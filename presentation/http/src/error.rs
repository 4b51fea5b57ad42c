//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use voicegate_core::SttError;

/// Error returned by gateway handlers
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": {
                "message": self.message,
                "type": match self.status {
                    StatusCode::BAD_REQUEST => "invalid_request_error",
                    StatusCode::GATEWAY_TIMEOUT => "timeout_error",
                    _ => "server_error",
                },
                "code": self.status.as_str(),
            }
        }));
        (self.status, body).into_response()
    }
}

impl From<SttError> for ApiError {
    fn from(err: SttError) -> Self {
        match &err {
            SttError::UnsupportedAudio(_) | SttError::ConfigError(_) => {
                ApiError::bad_request(err.to_string())
            }
            SttError::Timeout => Self {
                status: StatusCode::GATEWAY_TIMEOUT,
                message: err.to_string(),
            },
            _ => ApiError::internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_audio_maps_to_bad_request() {
        let err: ApiError = SttError::UnsupportedAudio("zero channels".to_string()).into();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_engine_failure_maps_to_server_error() {
        let err: ApiError = SttError::InternalError("device lost".to_string()).into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_engine_timeout_maps_to_gateway_timeout() {
        let err: ApiError = SttError::Timeout.into();
        assert_eq!(err.status, StatusCode::GATEWAY_TIMEOUT);
    }
}
