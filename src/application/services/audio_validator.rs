use std::io::Cursor;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;

use crate::application::ports::AudioProbe;
use crate::domain::{AudioFormat, minutes};

/// Rejects uploads that are not worth sending to the model.
pub struct AudioValidator<P>
where
    P: AudioProbe + ?Sized,
{
    probe: Arc<P>,
    max_duration: Duration,
}

impl<P> AudioValidator<P>
where
    P: AudioProbe + ?Sized,
{
    pub fn new(probe: Arc<P>, max_duration: Duration) -> Self {
        Self {
            probe,
            max_duration,
        }
    }

    pub fn max_duration(&self) -> Duration {
        self.max_duration
    }

    /// Checks the filename extension, then decodes `stream` to measure its duration.
    ///
    /// The decoder gets the whole buffer regardless of the stream position and shares it
    /// rather than copying it. The stream is rewound, so a caller that gets `Ok` back can
    /// read the same bytes again from offset zero.
    pub fn validate(
        &self,
        filename: Option<&str>,
        stream: &mut Cursor<Bytes>,
    ) -> Result<ValidatedAudio, ValidationError> {
        let filename = match filename {
            Some(name) if !name.trim().is_empty() => name,
            _ => return Err(ValidationError::MissingFile),
        };

        let extension = AudioFormat::extension_of(filename);
        let format = AudioFormat::from_extension(&extension)
            .ok_or(ValidationError::UnsupportedFormat(extension))?;

        stream.set_position(0);
        let data = stream.get_ref().clone();
        let size_bytes = data.len() as u64;

        let duration = self
            .probe
            .duration(data, format, self.max_duration)
            .map_err(|e| ValidationError::UnreadableAudio(e.to_string()))?;

        tracing::debug!(
            filename = %filename,
            format = %format,
            size_bytes,
            duration_secs = duration.as_secs_f64(),
            "Audio probed"
        );

        if duration > self.max_duration {
            return Err(ValidationError::DurationExceeded {
                minutes: minutes(duration),
                max_minutes: minutes(self.max_duration),
            });
        }

        Ok(ValidatedAudio {
            format,
            duration,
            size_bytes,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedAudio {
    pub format: AudioFormat,
    pub duration: Duration,
    pub size_bytes: u64,
}

impl ValidatedAudio {
    pub fn duration_minutes(&self) -> f64 {
        minutes(self.duration)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("No file uploaded.")]
    MissingFile,
    #[error("Unsupported file type: .{0}. Only MP3 and WAV are allowed.")]
    UnsupportedFormat(String),
    #[error("Could not process audio file: {0}")]
    UnreadableAudio(String),
    #[error("Audio file is too long ({minutes:.2} mins). Maximum allowed is {max_minutes} minutes.")]
    DurationExceeded { minutes: f64, max_minutes: f64 },
}
