use std::io::Cursor;

use axum::extract::Multipart;
use bytes::Bytes;

use crate::application::ports::{AudioProbe, GenerativeModel};
use crate::domain::UploadedAudio;
use crate::presentation::state::AppState;

use super::error::ApiError;

pub const AUDIO_FIELD: &str = "audio";

/// Pulls the `audio` field out of a multipart body, skipping any other fields.
pub async fn read_audio_field(
    multipart: &mut Multipart,
) -> Result<(Option<String>, Bytes), ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(AUDIO_FIELD) {
            continue;
        }

        let filename = field.file_name().map(String::from);
        let data = field.bytes().await?;

        tracing::debug!(
            filename = filename.as_deref().unwrap_or(""),
            bytes = data.len(),
            "Audio field received"
        );

        return Ok((filename, data));
    }

    Err(ApiError::MissingAudioField)
}

/// Reads and validates the upload, returning audio that may be sent to the model.
///
/// Decoding runs on the blocking pool. The validator rewinds the stream, so the bytes
/// handed on are the stream's contents from its position onwards.
pub async fn receive_audio<M, P>(
    state: &AppState<M, P>,
    multipart: &mut Multipart,
) -> Result<UploadedAudio, ApiError>
where
    M: GenerativeModel + ?Sized + 'static,
    P: AudioProbe + ?Sized + 'static,
{
    let (filename, data) = read_audio_field(multipart).await?;

    let validator = std::sync::Arc::clone(&state.audio_validator);
    let (result, stream, filename) = tokio::task::spawn_blocking(move || {
        let mut stream = Cursor::new(data);
        let result = validator.validate(filename.as_deref(), &mut stream);
        (result, stream, filename)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("audio validation task failed: {}", e)))?;

    let validated = result?;
    let position = stream.position() as usize;
    let data = stream.get_ref().slice(position..);

    tracing::info!(
        filename = filename.as_deref().unwrap_or(""),
        format = %validated.format,
        bytes = data.len(),
        duration_minutes = validated.duration_minutes(),
        "Audio validated"
    );

    Ok(UploadedAudio::new(
        filename.unwrap_or_default(),
        validated.format,
        validated.duration,
        data,
    ))
}
