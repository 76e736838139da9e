use std::time::Duration;

use bytes::Bytes;

use crate::domain::AudioFormat;

/// Decodes a recording far enough to know how long it plays.
///
/// Once the measured length passes `ceiling` the recording will be rejected anyway, so
/// implementations may stop decoding there. The returned duration must still be the
/// full length or at least exceed `ceiling`.
pub trait AudioProbe: Send + Sync {
    fn duration(
        &self,
        data: Bytes,
        format: AudioFormat,
        ceiling: Duration,
    ) -> Result<Duration, AudioProbeError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioProbeError {
    #[error("{0}")]
    DecodingFailed(String),
    #[error("no audio track found")]
    NoAudioTrack,
    #[error("no audio frames decoded")]
    Empty,
}
