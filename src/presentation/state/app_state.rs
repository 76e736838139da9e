use std::sync::Arc;

use crate::application::ports::{AudioProbe, GenerativeModel};
use crate::application::services::{ArtifactService, AudioValidator};

pub struct AppState<M, P>
where
    M: GenerativeModel + ?Sized,
    P: AudioProbe + ?Sized,
{
    pub artifact_service: Arc<ArtifactService<M>>,
    pub audio_validator: Arc<AudioValidator<P>>,
    pub max_upload_bytes: usize,
}

impl<M, P> Clone for AppState<M, P>
where
    M: GenerativeModel + ?Sized,
    P: AudioProbe + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            artifact_service: Arc::clone(&self.artifact_service),
            audio_validator: Arc::clone(&self.audio_validator),
            max_upload_bytes: self.max_upload_bytes,
        }
    }
}
