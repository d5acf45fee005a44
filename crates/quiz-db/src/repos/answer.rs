//! Answer repository.

use std::sync::Arc;

use quiz_core::entities::Answer;
use quiz_core::enums::EntityKind;

use super::{apply_update, delete_row, insert_returning_id};
use crate::QuizDb;
use crate::error::DatabaseError;
use crate::helpers::{collect_rows, get_bool};
use crate::input::NewAnswer;
use crate::updates::answer::AnswerUpdate;

const SELECT_COLS: &str = "id, question_id, answer, is_correct";

fn row_to_answer(row: &libsql::Row) -> Result<Answer, DatabaseError> {
    Ok(Answer {
        id: row.get(0)?,
        question_id: row.get(1)?,
        answer: row.get(2)?,
        is_correct: get_bool(row, 3)?,
    })
}

pub(crate) async fn insert_answer(
    conn: &libsql::Connection,
    new: &NewAnswer,
) -> Result<i64, DatabaseError> {
    let id = insert_returning_id(
        conn,
        "INSERT INTO answers (question_id, answer, is_correct)
         VALUES (?1, ?2, ?3) RETURNING id",
        libsql::params![
            new.question_id,
            new.answer.as_str(),
            i64::from(new.is_correct)
        ],
    )
    .await?;
    tracing::debug!(id, question_id = new.question_id, "answer created");
    Ok(id)
}

#[derive(Clone)]
pub struct AnswerRepo {
    db: Arc<QuizDb>,
}

impl AnswerRepo {
    #[must_use]
    pub const fn new(db: Arc<QuizDb>) -> Self {
        Self { db }
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no answer has this id.
    pub async fn get_by_id(&self, id: i64) -> Result<Answer, DatabaseError> {
        let mut rows = self
            .db
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM answers WHERE id = ?1"),
                libsql::params![id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NotFound {
            entity: EntityKind::Answer,
            id,
        })?;
        row_to_answer(&row)
    }

    pub async fn get_by_question(&self, question_id: i64) -> Result<Vec<Answer>, DatabaseError> {
        let rows = self
            .db
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM answers WHERE question_id = ?1 ORDER BY id"),
                libsql::params![question_id],
            )
            .await?;
        collect_rows(rows, row_to_answer).await
    }

    pub async fn create(&self, new: &NewAnswer) -> Result<i64, DatabaseError> {
        let _writer = self.db.write_gate().await;
        insert_answer(self.db.conn(), new).await
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` if `update` has no fields.
    pub async fn update(&self, id: i64, update: &AnswerUpdate) -> Result<(), DatabaseError> {
        let _writer = self.db.write_gate().await;
        apply_update(self.db.conn(), EntityKind::Answer, id, update).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), DatabaseError> {
        let _writer = self.db.write_gate().await;
        delete_row(self.db.conn(), EntityKind::Answer, id).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::helpers::{seed_answer, seed_question, seed_quiz, test_service};
    use crate::updates::answer::AnswerUpdateBuilder;

    #[tokio::test]
    async fn create_answer_defaults_roundtrip() {
        let svc = test_service().await;
        let quiz = seed_quiz(&svc, "Q").await;
        let question = seed_question(&svc, quiz.id, 0).await;
        let id = seed_answer(&svc, question.id, true).await;

        let answer = svc.answers().get_by_id(id).await.unwrap();
        assert_eq!(answer.question_id, question.id);
        assert!(answer.is_correct);
    }

    #[tokio::test]
    async fn get_by_question_is_ordered_by_id() {
        let svc = test_service().await;
        let quiz = seed_quiz(&svc, "Q").await;
        let question = seed_question(&svc, quiz.id, 0).await;
        let a = seed_answer(&svc, question.id, false).await;
        let b = seed_answer(&svc, question.id, true).await;

        let answers = svc.answers().get_by_question(question.id).await.unwrap();
        let ids: Vec<i64> = answers.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![a, b]);
        assert_eq!(
            answers.iter().map(|a| a.is_correct).collect::<Vec<_>>(),
            vec![false, true]
        );
    }

    #[tokio::test]
    async fn update_flag_only() {
        let svc = test_service().await;
        let quiz = seed_quiz(&svc, "Q").await;
        let question = seed_question(&svc, quiz.id, 0).await;
        let id = seed_answer(&svc, question.id, false).await;
        let before = svc.answers().get_by_id(id).await.unwrap();

        let update = AnswerUpdateBuilder::new().is_correct(true).build();
        svc.answers().update(id, &update).await.unwrap();
        // Applying the same update twice leaves the same state
        svc.answers().update(id, &update).await.unwrap();

        let after = svc.answers().get_by_id(id).await.unwrap();
        assert_eq!(after.answer, before.answer);
        assert!(after.is_correct);
    }

    #[tokio::test]
    async fn delete_answer() {
        let svc = test_service().await;
        let quiz = seed_quiz(&svc, "Q").await;
        let question = seed_question(&svc, quiz.id, 0).await;
        let id = seed_answer(&svc, question.id, false).await;

        svc.answers().delete(id).await.unwrap();
        assert!(svc.answers().get_by_question(question.id).await.unwrap().is_empty());
    }
}
