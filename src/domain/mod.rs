mod artifact;
mod artifact_kind;
mod audio_format;
mod flashcard;
mod quiz_item;
mod uploaded_audio;

pub use artifact::Artifact;
pub use artifact_kind::ArtifactKind;
pub use audio_format::AudioFormat;
pub use flashcard::Flashcard;
pub use quiz_item::{AnswerKey, QuizItem, QuizOptions};
pub use uploaded_audio::{UploadedAudio, minutes};
