use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::{ArtifactError, ValidationError};
use crate::domain::ArtifactKind;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("No audio file provided")]
    MissingAudioField,
    #[error("Failed to read multipart: {0}")]
    Multipart(#[from] MultipartError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Artifact(#[from] ArtifactError),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingAudioField | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Multipart(e) => e.status(),
            ApiError::Artifact(ArtifactError::ContentBlocked(_)) => StatusCode::BAD_REQUEST,
            ApiError::Artifact(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to the caller. Remote failure details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::Artifact(ArtifactError::MalformedModelOutput { kind, .. }) => match kind {
                ArtifactKind::Notes => "Model returned empty notes. Please try again.".to_string(),
                _ => format!("Model returned invalid JSON for {}. Please try again.", kind),
            },
            ApiError::Artifact(ArtifactError::GenerationFailed { kind, .. }) => {
                format!("Failed to generate {}. Please try again.", kind)
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "Request failed");
        } else {
            tracing::warn!(status = %status, error = %self, "Request rejected");
        }

        (
            status,
            Json(ErrorResponse {
                error: self.public_message(),
            }),
        )
            .into_response()
    }
}
