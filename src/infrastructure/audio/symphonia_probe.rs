use std::io::Cursor;
use std::time::Duration;

use bytes::Bytes;
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::application::ports::{AudioProbe, AudioProbeError};
use crate::domain::AudioFormat;

/// Measures duration by decoding the default track and counting frames.
///
/// Packets past the ceiling are counted from their declared length instead of being
/// decoded, and a container that declares a frame count over the ceiling is not
/// decoded at all.
#[derive(Debug, Default, Clone, Copy)]
pub struct SymphoniaProbe;

impl AudioProbe for SymphoniaProbe {
    fn duration(
        &self,
        data: Bytes,
        format: AudioFormat,
        ceiling: Duration,
    ) -> Result<Duration, AudioProbeError> {
        let mss = MediaSourceStream::new(Box::new(Cursor::new(data)), Default::default());

        let mut hint = Hint::new();
        hint.with_extension(format.extension());

        let probed = symphonia::default::get_probe()
            .format(
                &hint,
                mss,
                &FormatOptions::default(),
                &MetadataOptions::default(),
            )
            .map_err(|e| AudioProbeError::DecodingFailed(format!("probe: {}", e)))?;

        let mut reader = probed.format;

        let track = reader.default_track().ok_or(AudioProbeError::NoAudioTrack)?;
        let track_id = track.id;
        let codec_params = track.codec_params.clone();
        let sample_rate = codec_params
            .sample_rate
            .filter(|rate| *rate > 0)
            .ok_or_else(|| AudioProbeError::DecodingFailed("unknown sample rate".to_string()))?;

        let ceiling_frames = duration_to_frames(ceiling, sample_rate);

        if let Some(declared) = codec_params.n_frames.filter(|n| *n > ceiling_frames) {
            let duration = frames_to_duration(declared, sample_rate);
            tracing::debug!(
                frames = declared,
                sample_rate,
                duration_secs = duration.as_secs_f64(),
                "Declared length exceeds ceiling, skipping decode"
            );
            return Ok(duration);
        }

        let mut decoder = symphonia::default::get_codecs()
            .make(&codec_params, &DecoderOptions::default())
            .map_err(|e| AudioProbeError::DecodingFailed(format!("codec: {}", e)))?;

        let mut frames: u64 = 0;
        let mut decoding = true;

        loop {
            let packet = match reader.next_packet() {
                Ok(p) => p,
                Err(SymphoniaError::IoError(ref e))
                    if e.kind() == std::io::ErrorKind::UnexpectedEof =>
                {
                    break;
                }
                Err(e) => {
                    return Err(AudioProbeError::DecodingFailed(format!("packet: {}", e)));
                }
            };

            if packet.track_id() != track_id {
                continue;
            }

            if !decoding {
                frames += packet.dur();
                continue;
            }

            match decoder.decode(&packet) {
                Ok(decoded) => frames += decoded.frames() as u64,
                Err(SymphoniaError::DecodeError(e)) => {
                    tracing::warn!(error = %e, "Skipping corrupt audio frame");
                }
                Err(e) => {
                    return Err(AudioProbeError::DecodingFailed(format!("decode: {}", e)));
                }
            }

            if frames > ceiling_frames {
                tracing::debug!(
                    frames,
                    ceiling_frames,
                    "Ceiling crossed, counting remaining packets"
                );
                decoding = false;
            }
        }

        if frames == 0 {
            return Err(AudioProbeError::Empty);
        }

        let duration = frames_to_duration(frames, sample_rate);

        tracing::debug!(
            frames,
            sample_rate,
            decoded_to_end = decoding,
            duration_secs = duration.as_secs_f64(),
            "Audio duration measured"
        );

        Ok(duration)
    }
}

/// Largest frame count that still fits within `ceiling`.
fn duration_to_frames(ceiling: Duration, sample_rate: u32) -> u64 {
    let frames = ceiling.as_nanos() * u128::from(sample_rate) / 1_000_000_000;
    u64::try_from(frames).unwrap_or(u64::MAX)
}

fn frames_to_duration(frames: u64, sample_rate: u32) -> Duration {
    let rate = u64::from(sample_rate);
    let whole = frames / rate;
    let nanos = (frames % rate) * 1_000_000_000 / rate;
    Duration::from_secs(whole) + Duration::from_nanos(nanos)
}

