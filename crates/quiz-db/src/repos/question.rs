//! Question repository.

use std::sync::Arc;

use quiz_core::entities::Question;
use quiz_core::enums::EntityKind;

use super::{apply_update, delete_row, insert_returning_id};
use crate::QuizDb;
use crate::error::DatabaseError;
use crate::helpers::{collect_rows, get_u32};
use crate::input::NewQuestion;
use crate::updates::question::QuestionUpdate;

const SELECT_COLS: &str = "id, quiz_id, question, type, order_num";

fn row_to_question(row: &libsql::Row) -> Result<Question, DatabaseError> {
    Ok(Question {
        id: row.get(0)?,
        quiz_id: row.get(1)?,
        question: row.get(2)?,
        kind: row.get(3)?,
        order_num: get_u32(row, 4)?,
    })
}

pub(crate) async fn insert_question(
    conn: &libsql::Connection,
    new: &NewQuestion,
) -> Result<i64, DatabaseError> {
    let id = insert_returning_id(
        conn,
        "INSERT INTO questions (quiz_id, question, type, order_num)
         VALUES (?1, ?2, ?3, ?4) RETURNING id",
        libsql::params![
            new.quiz_id,
            new.question.as_str(),
            new.kind.as_str(),
            i64::from(new.order_num)
        ],
    )
    .await?;
    tracing::debug!(id, quiz_id = new.quiz_id, "question created");
    Ok(id)
}

#[derive(Clone)]
pub struct QuestionRepo {
    db: Arc<QuizDb>,
}

impl QuestionRepo {
    #[must_use]
    pub const fn new(db: Arc<QuizDb>) -> Self {
        Self { db }
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no question has this id.
    pub async fn get_by_id(&self, id: i64) -> Result<Question, DatabaseError> {
        let mut rows = self
            .db
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM questions WHERE id = ?1"),
                libsql::params![id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NotFound {
            entity: EntityKind::Question,
            id,
        })?;
        row_to_question(&row)
    }

    /// Questions of a quiz by `order_num`, ties broken by id.
    ///
    /// The quiz itself is not checked; an unknown id yields an empty list.
    pub async fn get_by_quiz(&self, quiz_id: i64) -> Result<Vec<Question>, DatabaseError> {
        let rows = self
            .db
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM questions WHERE quiz_id = ?1
                     ORDER BY order_num, id"
                ),
                libsql::params![quiz_id],
            )
            .await?;
        collect_rows(rows, row_to_question).await
    }

    pub async fn create(&self, new: &NewQuestion) -> Result<i64, DatabaseError> {
        let _writer = self.db.write_gate().await;
        insert_question(self.db.conn(), new).await
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` if `update` has no fields.
    pub async fn update(&self, id: i64, update: &QuestionUpdate) -> Result<(), DatabaseError> {
        let _writer = self.db.write_gate().await;
        apply_update(self.db.conn(), EntityKind::Question, id, update).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), DatabaseError> {
        let _writer = self.db.write_gate().await;
        delete_row(self.db.conn(), EntityKind::Question, id).await
    }
}
