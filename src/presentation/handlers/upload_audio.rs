use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{AudioProbe, GenerativeModel};
use crate::presentation::state::AppState;

use super::audio_intake::receive_audio;
use super::error::ApiError;

#[derive(Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub filename: String,
    pub size: u64,
    pub duration_minutes: f64,
}

/// Validates an upload without contacting the model.
#[tracing::instrument(skip(state, multipart))]
pub async fn upload_audio_handler<M, P>(
    State(state): State<AppState<M, P>>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError>
where
    M: GenerativeModel + ?Sized + 'static,
    P: AudioProbe + ?Sized + 'static,
{
    let audio = receive_audio(&state, &mut multipart).await?;

    Ok((
        StatusCode::OK,
        Json(UploadResponse {
            message: format!(
                "Audio file '{}' uploaded and validated successfully.",
                audio.filename
            ),
            size: audio.size_bytes(),
            duration_minutes: audio.duration_minutes(),
            filename: audio.filename,
        }),
    ))
}
