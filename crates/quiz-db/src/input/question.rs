use quiz_core::enums::EntityKind;
use serde::Deserialize;

use super::{Fields, coerce, from_fields, non_empty, position, required_id, required_text};
use crate::error::DatabaseError;
use crate::updates::question::QuestionUpdate;

/// Question payload with every recognized field as an optional slot.
///
/// The text is read from `question`, or from its aliases `text` and
/// `question_text`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionFields {
    #[serde(default, deserialize_with = "coerce::id")]
    pub quiz_id: Option<i64>,
    #[serde(
        default,
        alias = "text",
        alias = "question_text",
        deserialize_with = "coerce::text"
    )]
    pub question: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "coerce::text")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "coerce::integer")]
    pub order_num: Option<i64>,
}

/// Validated values for inserting a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub quiz_id: i64,
    pub question: String,
    pub kind: String,
    pub order_num: u32,
}

impl QuestionFields {
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` if the payload cannot be read.
    pub fn from_map(fields: Fields) -> Result<Self, DatabaseError> {
        from_fields(EntityKind::Question, fields)
    }

    /// Apply the create policy: `quiz_id`, `question`, and `type` required,
    /// `order_num` defaults to 0.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` on a missing or empty required
    /// field or a negative `order_num`.
    pub fn into_new(self) -> Result<NewQuestion, DatabaseError> {
        Ok(NewQuestion {
            quiz_id: required_id(self.quiz_id, "quiz_id")?,
            question: required_text(self.question, "question")?,
            kind: required_text(self.kind, "type")?,
            order_num: position(self.order_num, "order_num")?.unwrap_or(0),
        })
    }

    /// Keep the updatable slots. `quiz_id` is not updatable and is dropped.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` on an empty text slot or a
    /// negative `order_num`.
    pub fn into_update(self) -> Result<QuestionUpdate, DatabaseError> {
        Ok(QuestionUpdate {
            question: non_empty(self.question, "question")?,
            kind: non_empty(self.kind, "type")?,
            order_num: position(self.order_num, "order_num")?,
        })
    }
}
