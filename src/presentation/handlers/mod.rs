mod audio_intake;
mod error;
mod generate;
mod health;
mod upload_audio;

pub use audio_intake::AUDIO_FIELD;
pub use error::{ApiError, ErrorResponse};
pub use generate::{generate_flashcards_handler, generate_notes_handler, generate_quizzes_handler};
pub use health::health_handler;
pub use upload_audio::{UploadResponse, upload_audio_handler};
