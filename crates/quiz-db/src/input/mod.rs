//! Input coercion: untyped field maps to typed, validated values.
//!
//! A request body arrives as a `serde_json::Map`. It is deserialized into a
//! per-entity `*Fields` struct whose every field is an explicit `Option`
//! slot filled by the lenient coercers in [`coerce`]. From there:
//!
//! - `into_new()` applies the required-field policy and defaults for create
//! - `into_update()` keeps only the updatable slots for a partial update
//!
//! Unknown keys are ignored, so they can never reach a statement.

pub mod coerce;
mod answer;
mod question;
mod quiz;

pub use answer::{AnswerFields, NewAnswer};
pub use question::{NewQuestion, QuestionFields};
pub use quiz::{NewQuiz, QuizFields};

use quiz_core::enums::EntityKind;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::DatabaseError;

/// An untyped request payload.
pub type Fields = Map<String, Value>;

/// Deserialize a payload into an entity's `*Fields` struct.
pub(crate) fn from_fields<T: DeserializeOwned>(
    entity: EntityKind,
    fields: Fields,
) -> Result<T, DatabaseError> {
    serde_json::from_value(Value::Object(fields))
        .map_err(|e| DatabaseError::validation(format!("invalid {entity} payload: {e}")))
}

/// Take a required text slot, rejecting absent and blank values.
pub(crate) fn required_text(slot: Option<String>, field: &str) -> Result<String, DatabaseError> {
    match slot {
        Some(value) if !value.trim().is_empty() => Ok(value),
        Some(_) => Err(DatabaseError::validation(format!(
            "{field} must not be empty"
        ))),
        None => Err(DatabaseError::validation(format!("{field} is required"))),
    }
}

/// Check a present text slot of a required column during an update.
pub(crate) fn non_empty(slot: Option<String>, field: &str) -> Result<Option<String>, DatabaseError> {
    slot.map(|value| required_text(Some(value), field)).transpose()
}

/// Take a required reference slot.
pub(crate) fn required_id(slot: Option<i64>, field: &str) -> Result<i64, DatabaseError> {
    slot.ok_or_else(|| DatabaseError::validation(format!("{field} is required")))
}

/// Narrow an ordering slot to a non-negative position.
pub(crate) fn position(slot: Option<i64>, field: &str) -> Result<Option<u32>, DatabaseError> {
    slot.map(|raw| {
        u32::try_from(raw).map_err(|_| {
            DatabaseError::validation(format!("{field} must be a non-negative integer"))
        })
    })
    .transpose()
}
