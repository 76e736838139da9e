use std::sync::Arc;

use crate::application::ports::{AudioPayload, GenerationError, GenerativeModel};
use crate::domain::{Artifact, ArtifactKind, UploadedAudio};

use super::artifact_recipe::ArtifactRecipe;
use super::model_output::{ModelOutputError, preview};

pub struct ArtifactService<M>
where
    M: GenerativeModel + ?Sized,
{
    model: Arc<M>,
}

impl<M> ArtifactService<M>
where
    M: GenerativeModel + ?Sized,
{
    pub fn new(model: Arc<M>) -> Self {
        Self { model }
    }

    #[tracing::instrument(
        skip(self, audio),
        fields(
            filename = %audio.filename,
            mime_type = audio.mime_type(),
            bytes = audio.size_bytes(),
        )
    )]
    pub async fn generate(
        &self,
        kind: ArtifactKind,
        audio: &UploadedAudio,
    ) -> Result<Artifact, ArtifactError> {
        let recipe = ArtifactRecipe::for_kind(kind);
        let payload = AudioPayload {
            mime_type: audio.mime_type(),
            data: &audio.data,
        };

        let raw = self
            .model
            .generate(recipe.instruction, payload)
            .await
            .map_err(|e| match e {
                GenerationError::Blocked(feedback) => {
                    tracing::warn!(feedback = %feedback, "Generation blocked by safety policy");
                    ArtifactError::ContentBlocked(feedback)
                }
                GenerationError::RequestFailed(reason) => {
                    tracing::error!(reason = %reason, "Generation request failed");
                    ArtifactError::GenerationFailed { kind, reason }
                }
            })?;

        let artifact = recipe.parse(&raw).map_err(|reason| {
            tracing::warn!(
                error = %reason,
                output = %preview(&raw),
                "Model output could not be parsed"
            );
            ArtifactError::MalformedModelOutput { kind, reason }
        })?;

        tracing::info!(entries = artifact.entry_count(), "Artifact generated");

        Ok(artifact)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("Content generation blocked due to safety policy: {0}")]
    ContentBlocked(String),
    #[error("model returned unusable {kind}: {reason}")]
    MalformedModelOutput {
        kind: ArtifactKind,
        reason: ModelOutputError,
    },
    #[error("failed to generate {kind}: {reason}")]
    GenerationFailed { kind: ArtifactKind, reason: String },
}
