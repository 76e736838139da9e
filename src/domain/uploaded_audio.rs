use std::time::Duration;

use bytes::Bytes;

use super::audio_format::AudioFormat;

/// A request-scoped recording that passed intake validation.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedAudio {
    pub filename: String,
    pub format: AudioFormat,
    pub duration: Duration,
    pub data: Bytes,
}

impl UploadedAudio {
    pub fn new(filename: String, format: AudioFormat, duration: Duration, data: Bytes) -> Self {
        Self {
            filename,
            format,
            duration,
            data,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        self.format.as_mime()
    }

    pub fn size_bytes(&self) -> u64 {
        self.data.len() as u64
    }

    pub fn duration_minutes(&self) -> f64 {
        minutes(self.duration)
    }
}

pub fn minutes(duration: Duration) -> f64 {
    duration.as_secs_f64() / 60.0
}
