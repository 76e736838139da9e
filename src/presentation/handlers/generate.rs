use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::ports::{AudioProbe, GenerativeModel};
use crate::domain::ArtifactKind;
use crate::presentation::state::AppState;

use super::audio_intake::receive_audio;
use super::error::ApiError;

pub async fn generate_notes_handler<M, P>(
    State(state): State<AppState<M, P>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError>
where
    M: GenerativeModel + ?Sized + 'static,
    P: AudioProbe + ?Sized + 'static,
{
    generate_artifact(state, multipart, ArtifactKind::Notes).await
}

pub async fn generate_flashcards_handler<M, P>(
    State(state): State<AppState<M, P>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError>
where
    M: GenerativeModel + ?Sized + 'static,
    P: AudioProbe + ?Sized + 'static,
{
    generate_artifact(state, multipart, ArtifactKind::Flashcards).await
}

pub async fn generate_quizzes_handler<M, P>(
    State(state): State<AppState<M, P>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError>
where
    M: GenerativeModel + ?Sized + 'static,
    P: AudioProbe + ?Sized + 'static,
{
    generate_artifact(state, multipart, ArtifactKind::Quiz).await
}

#[tracing::instrument(skip(state, multipart))]
async fn generate_artifact<M, P>(
    state: AppState<M, P>,
    mut multipart: Multipart,
    kind: ArtifactKind,
) -> Result<impl IntoResponse, ApiError>
where
    M: GenerativeModel + ?Sized + 'static,
    P: AudioProbe + ?Sized + 'static,
{
    let audio = receive_audio(&state, &mut multipart).await?;
    let artifact = state.artifact_service.generate(kind, &audio).await?;

    Ok((StatusCode::OK, Json(artifact)))
}
