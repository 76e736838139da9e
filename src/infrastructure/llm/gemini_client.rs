use std::time::Duration;

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{AudioPayload, GenerationError, GenerativeModel};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

const BLOCKING_FINISH_REASONS: [&str; 4] = ["SAFETY", "BLOCKLIST", "PROHIBITED_CONTENT", "SPII"];

/// Client for the Gemini `generateContent` REST endpoint.
pub struct GeminiClient {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(
        api_key: &str,
        model: &str,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        let endpoint = format!(
            "{}/v1beta/models/{}:generateContent",
            base_url.trim_end_matches('/'),
            model,
        );
        Ok(Self {
            client,
            endpoint,
            api_key: api_key.to_string(),
            model: model.to_string(),
        })
    }
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: [RequestContent<'a>; 1],
}

#[derive(Serialize)]
struct RequestContent<'a> {
    role: &'static str,
    parts: [RequestPart<'a>; 2],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
enum RequestPart<'a> {
    Text(&'a str),
    InlineData(InlineData<'a>),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData<'a> {
    mime_type: &'a str,
    data: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
    #[serde(default)]
    safety_ratings: Vec<SafetyRating>,
}

#[derive(Deserialize)]
struct SafetyRating {
    #[serde(default)]
    category: String,
    #[serde(default)]
    probability: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl PromptFeedback {
    fn describe(&self, reason: &str) -> String {
        let ratings = self
            .safety_ratings
            .iter()
            .map(|r| format!("{}={}", r.category, r.probability))
            .collect::<Vec<_>>();

        if ratings.is_empty() {
            format!("block_reason: {}", reason)
        } else {
            format!("block_reason: {} ({})", reason, ratings.join(", "))
        }
    }
}

impl GenerateContentResponse {
    fn into_text(self) -> Result<String, GenerationError> {
        if let Some(feedback) = &self.prompt_feedback {
            if let Some(reason) = &feedback.block_reason {
                return Err(GenerationError::Blocked(feedback.describe(reason)));
            }
        }

        let candidate = self.candidates.into_iter().next().ok_or_else(|| {
            GenerationError::RequestFailed("response contained no candidates".to_string())
        })?;

        if let Some(reason) = candidate.finish_reason.as_deref() {
            if BLOCKING_FINISH_REASONS.contains(&reason) {
                return Err(GenerationError::Blocked(format!("finish_reason: {}", reason)));
            }
        }

        let text = candidate
            .content
            .map(|c| {
                c.parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(GenerationError::RequestFailed(
                "response contained no text".to_string(),
            ));
        }

        Ok(text)
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn generate(
        &self,
        instruction: &str,
        audio: AudioPayload<'_>,
    ) -> Result<String, GenerationError> {
        let body = GenerateContentRequest {
            contents: [RequestContent {
                role: "user",
                parts: [
                    RequestPart::Text(instruction),
                    RequestPart::InlineData(InlineData {
                        mime_type: audio.mime_type,
                        data: general_purpose::STANDARD.encode(audio.data),
                    }),
                ],
            }],
        };

        tracing::debug!(
            model = %self.model,
            mime_type = audio.mime_type,
            bytes = audio.data.len(),
            "Sending audio to Gemini"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::RequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(GenerationError::RequestFailed(format!(
                "status {}: {}",
                status, text
            )));
        }

        let raw_bytes = response
            .bytes()
            .await
            .map_err(|e| GenerationError::RequestFailed(format!("body: {}", e)))?;

        let parsed: GenerateContentResponse = serde_json::from_slice(&raw_bytes).map_err(|e| {
            tracing::error!(
                raw_response = %String::from_utf8_lossy(&raw_bytes),
                "Failed to parse Gemini JSON"
            );
            GenerationError::RequestFailed(format!("parse response: {}", e))
        })?;

        let text = parsed.into_text()?;

        tracing::info!(model = %self.model, chars = text.len(), "Gemini generation completed");

        Ok(text)
    }
}
