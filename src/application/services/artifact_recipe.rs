use crate::domain::{Artifact, ArtifactKind, Flashcard, QuizItem};

use super::model_output::{ModelOutputError, parse_list, parse_text};
use super::prompts::{FLASHCARDS_INSTRUCTION, NOTES_INSTRUCTION, QUIZ_INSTRUCTION};

type ParseFn = fn(&str) -> Result<Artifact, ModelOutputError>;

/// Fixed instruction for one artifact kind together with the parser for the model's reply.
pub struct ArtifactRecipe {
    pub kind: ArtifactKind,
    pub instruction: &'static str,
    parse: ParseFn,
}

static NOTES: ArtifactRecipe = ArtifactRecipe {
    kind: ArtifactKind::Notes,
    instruction: NOTES_INSTRUCTION,
    parse: parse_notes,
};

static FLASHCARDS: ArtifactRecipe = ArtifactRecipe {
    kind: ArtifactKind::Flashcards,
    instruction: FLASHCARDS_INSTRUCTION,
    parse: parse_flashcards,
};

static QUIZ: ArtifactRecipe = ArtifactRecipe {
    kind: ArtifactKind::Quiz,
    instruction: QUIZ_INSTRUCTION,
    parse: parse_quiz,
};

impl ArtifactRecipe {
    pub fn for_kind(kind: ArtifactKind) -> &'static ArtifactRecipe {
        match kind {
            ArtifactKind::Notes => &NOTES,
            ArtifactKind::Flashcards => &FLASHCARDS,
            ArtifactKind::Quiz => &QUIZ,
        }
    }

    pub fn parse(&self, raw: &str) -> Result<Artifact, ModelOutputError> {
        (self.parse)(raw)
    }
}

fn parse_notes(raw: &str) -> Result<Artifact, ModelOutputError> {
    parse_text(raw).map(Artifact::Notes)
}

fn parse_flashcards(raw: &str) -> Result<Artifact, ModelOutputError> {
    parse_list::<Flashcard>(raw).map(Artifact::Flashcards)
}

fn parse_quiz(raw: &str) -> Result<Artifact, ModelOutputError> {
    parse_list::<QuizItem>(raw).map(Artifact::Quiz)
}
