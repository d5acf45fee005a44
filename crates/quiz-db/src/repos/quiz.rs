//! Quiz repository.

use std::sync::Arc;

use quiz_core::entities::Quiz;
use quiz_core::enums::EntityKind;

use super::{apply_update, delete_row, insert_returning_id};
use crate::QuizDb;
use crate::error::DatabaseError;
use crate::helpers::collect_rows;
use crate::input::NewQuiz;
use crate::updates::quiz::QuizUpdate;

const SELECT_COLS: &str = "id, title, description";

fn row_to_quiz(row: &libsql::Row) -> Result<Quiz, DatabaseError> {
    Ok(Quiz {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
    })
}

pub(crate) async fn insert_quiz(
    conn: &libsql::Connection,
    new: &NewQuiz,
) -> Result<i64, DatabaseError> {
    let id = insert_returning_id(
        conn,
        "INSERT INTO quizzes (title, description) VALUES (?1, ?2) RETURNING id",
        libsql::params![new.title.as_str(), new.description.as_str()],
    )
    .await?;
    tracing::debug!(id, "quiz created");
    Ok(id)
}

#[derive(Clone)]
pub struct QuizRepo {
    db: Arc<QuizDb>,
}

impl QuizRepo {
    #[must_use]
    pub const fn new(db: Arc<QuizDb>) -> Self {
        Self { db }
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no quiz has this id.
    pub async fn get_by_id(&self, id: i64) -> Result<Quiz, DatabaseError> {
        let mut rows = self
            .db
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM quizzes WHERE id = ?1"),
                libsql::params![id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NotFound {
            entity: EntityKind::Quiz,
            id,
        })?;
        row_to_quiz(&row)
    }

    /// All quizzes, ascending by id.
    pub async fn list(&self) -> Result<Vec<Quiz>, DatabaseError> {
        let rows = self
            .db
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM quizzes ORDER BY id"),
                (),
            )
            .await?;
        collect_rows(rows, row_to_quiz).await
    }

    pub async fn create(&self, new: &NewQuiz) -> Result<i64, DatabaseError> {
        let _writer = self.db.write_gate().await;
        insert_quiz(self.db.conn(), new).await
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` if `update` has no fields.
    pub async fn update(&self, id: i64, update: &QuizUpdate) -> Result<(), DatabaseError> {
        let _writer = self.db.write_gate().await;
        apply_update(self.db.conn(), EntityKind::Quiz, id, update).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), DatabaseError> {
        let _writer = self.db.write_gate().await;
        delete_row(self.db.conn(), EntityKind::Quiz, id).await
    }
}
