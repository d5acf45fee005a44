//! Read responses that embed children under their parent.
//!
//! A composed read renders as `{"quiz": .., "questions": [..]}` when the
//! children were fetched, and as the bare parent object otherwise. The two
//! shapes are `#[serde(untagged)]` so the bare form is exactly the entity.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Answer, Question, Quiz};

/// Response for a quiz read.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(untagged)]
pub enum QuizView {
    WithQuestions { quiz: Quiz, questions: Vec<Question> },
    QuizOnly(Quiz),
}

impl QuizView {
    /// Build the view from a parent and optionally fetched children.
    #[must_use]
    pub fn new(quiz: Quiz, questions: Option<Vec<Question>>) -> Self {
        match questions {
            Some(questions) => Self::WithQuestions { quiz, questions },
            None => Self::QuizOnly(quiz),
        }
    }

    #[must_use]
    pub const fn quiz(&self) -> &Quiz {
        match self {
            Self::WithQuestions { quiz, .. } | Self::QuizOnly(quiz) => quiz,
        }
    }
}

/// Response for a question read.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(untagged)]
pub enum QuestionView {
    WithAnswers {
        question: Question,
        answers: Vec<Answer>,
    },
    QuestionOnly(Question),
}

impl QuestionView {
    #[must_use]
    pub fn new(question: Question, answers: Option<Vec<Answer>>) -> Self {
        match answers {
            Some(answers) => Self::WithAnswers { question, answers },
            None => Self::QuestionOnly(question),
        }
    }

    #[must_use]
    pub const fn question(&self) -> &Question {
        match self {
            Self::WithAnswers { question, .. } | Self::QuestionOnly(question) => question,
        }
    }
}

/// Response from a create operation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CreatedResponse {
    pub id: i64,
}

/// Acknowledgement for update and delete operations.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AckResponse {
    pub message: String,
}

impl AckResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result of importing a nested quiz document.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ImportSummary {
    pub quiz_id: i64,
    pub questions: usize,
    pub answers: usize,
}
