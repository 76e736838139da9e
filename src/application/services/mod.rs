mod artifact_recipe;
mod artifact_service;
mod audio_validator;
pub mod model_output;
mod prompts;

pub use artifact_recipe::ArtifactRecipe;
pub use artifact_service::{ArtifactError, ArtifactService};
pub use audio_validator::{AudioValidator, ValidatedAudio, ValidationError};
pub use model_output::ModelOutputError;
