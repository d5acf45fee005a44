use quiz_core::enums::EntityKind;
use serde::Deserialize;

use super::{Fields, coerce, from_fields, non_empty, required_id, required_text};
use crate::error::DatabaseError;
use crate::updates::answer::AnswerUpdate;

/// Answer payload with every recognized field as an optional slot.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnswerFields {
    #[serde(default, deserialize_with = "coerce::id")]
    pub question_id: Option<i64>,
    #[serde(
        default,
        alias = "text",
        alias = "answer_text",
        deserialize_with = "coerce::text"
    )]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "coerce::flag")]
    pub is_correct: Option<bool>,
}

/// Validated values for inserting an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAnswer {
    pub question_id: i64,
    pub answer: String,
    pub is_correct: bool,
}

impl AnswerFields {
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` if the payload cannot be read.
    pub fn from_map(fields: Fields) -> Result<Self, DatabaseError> {
        from_fields(EntityKind::Answer, fields)
    }

    /// Apply the create policy: `question_id` and `answer` required,
    /// `is_correct` defaults to false.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` on a missing or empty required field.
    pub fn into_new(self) -> Result<NewAnswer, DatabaseError> {
        Ok(NewAnswer {
            question_id: required_id(self.question_id, "question_id")?,
            answer: required_text(self.answer, "answer")?,
            is_correct: self.is_correct.unwrap_or(false),
        })
    }

    /// Keep the updatable slots. `question_id` is not updatable and is dropped.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` if `answer` is present but empty.
    pub fn into_update(self) -> Result<AnswerUpdate, DatabaseError> {
        Ok(AnswerUpdate {
            answer: non_empty(self.answer, "answer")?,
            is_correct: self.is_correct,
        })
    }
}
