use std::io::{Cursor, Read, Seek, SeekFrom};
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;

use lectern::application::services::{AudioValidator, ValidationError};
use lectern::domain::AudioFormat;
use lectern::infrastructure::audio::SymphoniaProbe;

use crate::helpers::{CapturingMeter, FailingProbe, FixedDurationProbe, silent_wav};

const FIFTEEN_MINUTES: Duration = Duration::from_secs(15 * 60);
const TEST_SAMPLE_RATE: u32 = 1_000;

fn symphonia_validator() -> AudioValidator<SymphoniaProbe> {
    AudioValidator::new(Arc::new(SymphoniaProbe), FIFTEEN_MINUTES)
}

fn fixed_validator(duration: Duration) -> AudioValidator<FixedDurationProbe> {
    AudioValidator::new(Arc::new(FixedDurationProbe(duration)), FIFTEEN_MINUTES)
}

#[test]
fn given_no_filename_when_validating_then_returns_missing_file() {
    let mut stream = Cursor::new(Bytes::from(silent_wav(TEST_SAMPLE_RATE, 1_000)));

    let result = symphonia_validator().validate(None, &mut stream);

    assert!(matches!(result, Err(ValidationError::MissingFile)));
}

#[test]
fn given_empty_filename_when_validating_then_returns_missing_file() {
    let mut stream = Cursor::new(Bytes::from(silent_wav(TEST_SAMPLE_RATE, 1_000)));

    let result = symphonia_validator().validate(Some(""), &mut stream);

    assert!(matches!(result, Err(ValidationError::MissingFile)));
}

#[test]
fn given_unsupported_extension_when_validating_then_rejects_regardless_of_content() {
    let valid_wav = Bytes::from(silent_wav(TEST_SAMPLE_RATE, 1_000));

    for name in ["lecture.txt", "lecture.m4a", "lecture.WAVE", "lecture"] {
        let mut stream = Cursor::new(valid_wav.clone());

        let result = symphonia_validator().validate(Some(name), &mut stream);

        assert!(
            matches!(result, Err(ValidationError::UnsupportedFormat(_))),
            "{name} should be rejected"
        );
    }
}

#[test]
fn given_txt_file_when_validating_then_message_names_extension() {
    let mut stream = Cursor::new(Bytes::from_static(b"hello"));

    let err = symphonia_validator()
        .validate(Some("lecture.txt"), &mut stream)
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Unsupported file type: .txt. Only MP3 and WAV are allowed."
    );
}

#[test]
fn given_uppercase_extension_when_validating_then_accepts() {
    let mut stream = Cursor::new(Bytes::from(silent_wav(TEST_SAMPLE_RATE, 1_000)));

    let result = symphonia_validator().validate(Some("LECTURE.WAV"), &mut stream);

    assert_eq!(result.unwrap().format, AudioFormat::Wav);
}

#[test]
fn given_two_minute_wav_when_validating_then_reports_duration_and_keeps_stream_readable() {
    let original = Bytes::from(silent_wav(TEST_SAMPLE_RATE, 2 * 60 * TEST_SAMPLE_RATE));
    let mut stream = Cursor::new(original.clone());
    stream.seek(SeekFrom::End(0)).unwrap();

    let validated = symphonia_validator()
        .validate(Some("lecture.wav"), &mut stream)
        .unwrap();

    assert_eq!(validated.duration, Duration::from_secs(120));
    assert_eq!(validated.size_bytes, original.len() as u64);
    assert_eq!(stream.position(), 0);

    let mut reread = Vec::new();
    stream.read_to_end(&mut reread).unwrap();
    assert_eq!(reread, original);
}

#[test]
fn given_exactly_fifteen_minutes_when_validating_then_accepts() {
    let fifteen_minutes = silent_wav(TEST_SAMPLE_RATE, 15 * 60 * TEST_SAMPLE_RATE);
    let mut stream = Cursor::new(Bytes::from(fifteen_minutes));

    let result = symphonia_validator().validate(Some("lecture.wav"), &mut stream);

    assert_eq!(result.unwrap().duration, FIFTEEN_MINUTES);
}

#[test]
fn given_fifteen_point_zero_one_minutes_when_validating_then_returns_duration_exceeded() {
    // 15.01 minutes = 900.6 seconds
    let frames = 900 * TEST_SAMPLE_RATE + 600;
    let mut stream = Cursor::new(Bytes::from(silent_wav(TEST_SAMPLE_RATE, frames)));

    let err = symphonia_validator()
        .validate(Some("lecture.wav"), &mut stream)
        .unwrap_err();

    assert!(matches!(err, ValidationError::DurationExceeded { .. }));
    assert_eq!(
        err.to_string(),
        "Audio file is too long (15.01 mins). Maximum allowed is 15 minutes."
    );
}

#[test]
fn given_probe_reporting_twenty_minutes_when_validating_mp3_then_returns_duration_exceeded() {
    let mut stream = Cursor::new(Bytes::from(vec![0u8; 64]));

    let result = fixed_validator(Duration::from_secs(20 * 60))
        .validate(Some("lecture.mp3"), &mut stream);

    assert!(matches!(
        result,
        Err(ValidationError::DurationExceeded { minutes, .. }) if (minutes - 20.0).abs() < f64::EPSILON
    ));
}

#[test]
fn given_probe_failure_when_validating_then_returns_unreadable_audio() {
    let validator = AudioValidator::new(Arc::new(FailingProbe), FIFTEEN_MINUTES);
    let mut stream = Cursor::new(Bytes::from_static(&[1, 2, 3]));

    let err = validator
        .validate(Some("lecture.mp3"), &mut stream)
        .unwrap_err();

    assert!(matches!(err, ValidationError::UnreadableAudio(_)));
    assert!(err.to_string().starts_with("Could not process audio file:"));
}

#[test]
fn given_garbage_bytes_named_wav_when_validating_then_returns_unreadable_audio() {
    let mut stream = Cursor::new(Bytes::from(vec![0xFFu8; 128]));

    let result = symphonia_validator().validate(Some("lecture.wav"), &mut stream);

    assert!(matches!(result, Err(ValidationError::UnreadableAudio(_))));
}

#[test]
fn given_empty_wav_when_validating_then_returns_unreadable_audio() {
    let mut stream = Cursor::new(Bytes::from(silent_wav(TEST_SAMPLE_RATE, 0)));

    let result = symphonia_validator().validate(Some("lecture.wav"), &mut stream);

    assert!(matches!(result, Err(ValidationError::UnreadableAudio(_))));
}

#[test]
fn given_custom_ceiling_when_audio_exceeds_it_then_message_uses_configured_limit() {
    let validator = AudioValidator::new(
        Arc::new(FixedDurationProbe(Duration::from_secs(6 * 60))),
        Duration::from_secs(5 * 60),
    );
    let mut stream = Cursor::new(Bytes::from(vec![0u8; 16]));

    let err = validator
        .validate(Some("lecture.wav"), &mut stream)
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Audio file is too long (6.00 mins). Maximum allowed is 5 minutes."
    );
}

#[test]
fn given_stream_read_to_the_end_when_validating_then_decoder_shares_the_upload_buffer() {
    let upload = Bytes::from(silent_wav(TEST_SAMPLE_RATE, 1_000));
    let meter = Arc::new(CapturingMeter::default());
    let validator = AudioValidator::new(Arc::clone(&meter), FIFTEEN_MINUTES);
    let mut stream = Cursor::new(upload.clone());
    stream.seek(SeekFrom::End(0)).unwrap();

    let validated = validator
        .validate(Some("lecture.wav"), &mut stream)
        .unwrap();

    let (seen, _) = meter.seen().unwrap();
    assert_eq!(seen, upload);
    assert_eq!(seen.as_ptr(), upload.as_ptr());
    assert_eq!(validated.size_bytes, upload.len() as u64);
    assert_eq!(stream.position(), 0);
}

#[test]
fn given_configured_ceiling_when_validating_then_decoder_receives_it() {
    let meter = Arc::new(CapturingMeter::default());
    let validator = AudioValidator::new(Arc::clone(&meter), Duration::from_secs(5 * 60));
    let mut stream = Cursor::new(Bytes::from(silent_wav(TEST_SAMPLE_RATE, 1_000)));

    validator
        .validate(Some("lecture.mp3"), &mut stream)
        .unwrap();

    let (_, ceiling) = meter.seen().unwrap();
    assert_eq!(ceiling, Duration::from_secs(5 * 60));
}
