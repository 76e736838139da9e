use async_trait::async_trait;

/// Audio bytes plus the MIME type the model should interpret them as.
#[derive(Debug, Clone, Copy)]
pub struct AudioPayload<'a> {
    pub mime_type: &'a str,
    pub data: &'a [u8],
}

/// A multimodal model that answers a text instruction about an audio recording.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    async fn generate(
        &self,
        instruction: &str,
        audio: AudioPayload<'_>,
    ) -> Result<String, GenerationError>;
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("blocked by safety policy: {0}")]
    Blocked(String),
    #[error("api request failed: {0}")]
    RequestFailed(String),
}
