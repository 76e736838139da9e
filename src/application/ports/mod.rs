mod audio_probe;
mod generative_model;

pub use audio_probe::{AudioProbe, AudioProbeError};
pub use generative_model::{AudioPayload, GenerationError, GenerativeModel};
