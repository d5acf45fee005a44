//! Database error types for quiz-db.

use quiz_core::enums::EntityKind;
use thiserror::Error;

/// Errors from repository, coercion, and aggregation operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Client input was missing, empty, malformed, or carried no updatable field.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The identity does not resolve to a row.
    #[error("{entity} {id} not found")]
    NotFound { entity: EntityKind, id: i64 },

    /// A row could not be decoded into its entity.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Underlying libSQL error (connectivity, constraint violation, bad SQL).
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}

/// Coarse classification used by the boundary layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Client-input fault.
    Validation,
    /// Identity did not resolve.
    NotFound,
    /// Driver or query failure.
    Storage,
}

impl DatabaseError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Query(_) | Self::Migration(_) | Self::NoResult | Self::LibSql(_) => {
                ErrorKind::Storage
            }
        }
    }

    /// Message safe to return to a client.
    ///
    /// Storage detail is withheld; callers log the full error instead.
    #[must_use]
    pub fn client_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::NotFound { entity, .. } => format!("{} not found", entity.label()),
            _ => String::from("storage failure"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_cover_taxonomy() {
        assert_eq!(
            DatabaseError::validation("title is required").kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            DatabaseError::NotFound {
                entity: EntityKind::Quiz,
                id: 7
            }
            .kind(),
            ErrorKind::NotFound
        );
        assert_eq!(DatabaseError::NoResult.kind(), ErrorKind::Storage);
        assert_eq!(
            DatabaseError::Query("bad row".into()).kind(),
            ErrorKind::Storage
        );
    }

    #[test]
    fn client_message_hides_storage_detail() {
        let err = DatabaseError::Migration("near \"TABLE\": syntax error".into());
        assert_eq!(err.client_message(), "storage failure");
        assert!(err.to_string().contains("syntax error"));
    }

    #[test]
    fn client_message_for_not_found_omits_id() {
        let err = DatabaseError::NotFound {
            entity: EntityKind::Question,
            id: 42,
        };
        assert_eq!(err.client_message(), "Question not found");
        assert_eq!(err.to_string(), "question 42 not found");
    }

    #[test]
    fn client_message_keeps_validation_text() {
        let err = DatabaseError::validation("no valid fields to update");
        assert_eq!(err.client_message(), "no valid fields to update");
    }
}
