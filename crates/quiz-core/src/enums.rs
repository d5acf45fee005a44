//! Entity kinds.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three stored entity kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Quiz,
    Question,
    Answer,
}

impl EntityKind {
    pub const ALL: [Self; 3] = [Self::Quiz, Self::Question, Self::Answer];

    /// Return the lowercase name used in messages and CLI arguments.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Quiz => "quiz",
            Self::Question => "question",
            Self::Answer => "answer",
        }
    }

    /// Capitalized label for client-facing messages (`"Quiz not found"`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Quiz => "Quiz",
            Self::Question => "Question",
            Self::Answer => "Answer",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
