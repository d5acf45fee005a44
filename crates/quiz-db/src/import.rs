//! Bulk import of a quiz document with nested questions and answers.
//!
//! The whole document is validated before any row is written; the inserts
//! then run in one transaction.
//!
//! ```json
//! {
//!   "title": "Rust basics",
//!   "description": "",
//!   "questions": [
//!     {
//!       "question_text": "Which keyword declares a constant?",
//!       "type": "multiple_choice",
//!       "order_num": 1,
//!       "answers": [{ "answer_text": "const", "is_correct": true }]
//!     }
//!   ]
//! }
//! ```

use quiz_core::enums::EntityKind;
use quiz_core::responses::ImportSummary;
use serde_json::Value;

use crate::QuizDb;
use crate::error::DatabaseError;
use crate::input::{
    AnswerFields, Fields, NewAnswer, NewQuestion, NewQuiz, QuestionFields, QuizFields, position,
    required_text,
};
use crate::repos::answer::insert_answer;
use crate::repos::question::insert_question;
use crate::repos::quiz::insert_quiz;

/// A question and its answers, validated but not yet attached to a quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
struct QuestionDraft {
    question: String,
    kind: String,
    order_num: u32,
    answers: Vec<AnswerDraft>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AnswerDraft {
    answer: String,
    is_correct: bool,
}

/// A fully validated import document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizDocument {
    quiz: NewQuiz,
    questions: Vec<QuestionDraft>,
}

impl QuizDocument {
    /// Validate a raw document.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` naming the first offending element.
    pub fn parse(value: Value) -> Result<Self, DatabaseError> {
        let mut fields = into_object(value, "document")?;
        let questions = take_list(&mut fields, "questions")?;

        let quiz = QuizFields::from_map(fields)?.into_new()?;
        let questions = questions
            .into_iter()
            .enumerate()
            .map(|(i, q)| {
                parse_question(q).map_err(|e| at(&format!("questions[{i}]"), e))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { quiz, questions })
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn answer_count(&self) -> usize {
        self.questions.iter().map(|q| q.answers.len()).sum()
    }

    /// Insert the document in a single transaction.
    ///
    /// # Errors
    ///
    /// Returns a storage error if any insert fails; nothing is committed.
    pub(crate) async fn insert(&self, db: &QuizDb) -> Result<ImportSummary, DatabaseError> {
        // Held until commit or rollback so no other write lands in this
        // transaction.
        let writer = db.write_gate().await;
        let tx = db.conn().transaction().await?;
        let quiz_id = match self.write_rows(&tx).await {
            Ok(id) => id,
            Err(e) => {
                tx.rollback().await?;
                return Err(e);
            }
        };
        tx.commit().await?;
        drop(writer);

        let summary = ImportSummary {
            quiz_id,
            questions: self.question_count(),
            answers: self.answer_count(),
        };
        tracing::info!(
            quiz_id,
            questions = summary.questions,
            answers = summary.answers,
            "quiz imported"
        );
        Ok(summary)
    }

    async fn write_rows(&self, conn: &libsql::Connection) -> Result<i64, DatabaseError> {
        let quiz_id = insert_quiz(conn, &self.quiz).await?;
        for draft in &self.questions {
            let question_id = insert_question(
                conn,
                &NewQuestion {
                    quiz_id,
                    question: draft.question.clone(),
                    kind: draft.kind.clone(),
                    order_num: draft.order_num,
                },
            )
            .await?;
            for answer in &draft.answers {
                insert_answer(
                    conn,
                    &NewAnswer {
                        question_id,
                        answer: answer.answer.clone(),
                        is_correct: answer.is_correct,
                    },
                )
                .await?;
            }
        }
        Ok(quiz_id)
    }
}

fn parse_question(value: Value) -> Result<QuestionDraft, DatabaseError> {
    let mut fields = into_object(value, EntityKind::Question.as_str())?;
    let answers = take_list(&mut fields, "answers")?;

    let question = QuestionFields::from_map(fields)?;
    let answers = answers
        .into_iter()
        .enumerate()
        .map(|(i, a)| parse_answer(a).map_err(|e| at(&format!("answers[{i}]"), e)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(QuestionDraft {
        question: required_text(question.question, "question")?,
        kind: required_text(question.kind, "type")?,
        order_num: position(question.order_num, "order_num")?.unwrap_or(0),
        answers,
    })
}

fn parse_answer(value: Value) -> Result<AnswerDraft, DatabaseError> {
    let answer = AnswerFields::from_map(into_object(value, EntityKind::Answer.as_str())?)?;
    Ok(AnswerDraft {
        answer: required_text(answer.answer, "answer")?,
        is_correct: answer.is_correct.unwrap_or(false),
    })
}

fn into_object(value: Value, what: &str) -> Result<Fields, DatabaseError> {
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(DatabaseError::validation(format!(
            "{what} must be a JSON object"
        ))),
    }
}

/// Remove a nested list from `fields`. Absent or `null` is an empty list.
fn take_list(fields: &mut Fields, key: &str) -> Result<Vec<Value>, DatabaseError> {
    match fields.remove(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(DatabaseError::validation(format!(
            "{key} must be an array"
        ))),
    }
}

/// Prefix a validation message with the element path.
fn at(path: &str, error: DatabaseError) -> DatabaseError {
    match error {
        DatabaseError::Validation(message) => {
            DatabaseError::Validation(format!("{path}: {message}"))
        }
        other => other,
    }
}
