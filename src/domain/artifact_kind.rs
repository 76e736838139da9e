use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Notes,
    Flashcards,
    Quiz,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 3] = [
        ArtifactKind::Notes,
        ArtifactKind::Flashcards,
        ArtifactKind::Quiz,
    ];

    /// Plural noun used in user-facing messages.
    pub fn label(&self) -> &'static str {
        match self {
            ArtifactKind::Notes => "notes",
            ArtifactKind::Flashcards => "flashcards",
            ArtifactKind::Quiz => "quizzes",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
