use serde::Serialize;

use super::artifact_kind::ArtifactKind;
use super::flashcard::Flashcard;
use super::quiz_item::QuizItem;

/// Study material derived from one recording.
///
/// Serializes as a single-key object: `{"notes": ...}`, `{"flashcards": [...]}` or
/// `{"quiz": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Artifact {
    Notes(String),
    Flashcards(Vec<Flashcard>),
    Quiz(Vec<QuizItem>),
}

impl Artifact {
    pub fn kind(&self) -> ArtifactKind {
        match self {
            Artifact::Notes(_) => ArtifactKind::Notes,
            Artifact::Flashcards(_) => ArtifactKind::Flashcards,
            Artifact::Quiz(_) => ArtifactKind::Quiz,
        }
    }

    /// Number of generated entries; notes count as one.
    pub fn entry_count(&self) -> usize {
        match self {
            Artifact::Notes(_) => 1,
            Artifact::Flashcards(cards) => cards.len(),
            Artifact::Quiz(items) => items.len(),
        }
    }
}
