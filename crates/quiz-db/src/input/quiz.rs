use quiz_core::enums::EntityKind;
use serde::Deserialize;

use super::{Fields, coerce, from_fields, required_text};
use crate::error::DatabaseError;
use crate::updates::quiz::QuizUpdate;

/// Quiz payload with every recognized field as an optional slot.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizFields {
    #[serde(default, deserialize_with = "coerce::text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "coerce::text")]
    pub description: Option<String>,
}

/// Validated values for inserting a quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuiz {
    pub title: String,
    pub description: String,
}

impl QuizFields {
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` if the payload cannot be read.
    pub fn from_map(fields: Fields) -> Result<Self, DatabaseError> {
        from_fields(EntityKind::Quiz, fields)
    }

    /// Apply the create policy: `title` required, `description` defaults to `""`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` if `title` is missing or empty.
    pub fn into_new(self) -> Result<NewQuiz, DatabaseError> {
        Ok(NewQuiz {
            title: required_text(self.title, "title")?,
            description: self.description.unwrap_or_default(),
        })
    }

    /// Keep the updatable slots.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` if `title` is present but empty.
    pub fn into_update(self) -> Result<QuizUpdate, DatabaseError> {
        Ok(QuizUpdate {
            title: super::non_empty(self.title, "title")?,
            description: self.description,
        })
    }
}
