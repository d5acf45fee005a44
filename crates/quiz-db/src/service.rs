//! Service layer wiring the repositories to one shared storage handle.
//!
//! `QuizService` owns an `Arc<QuizDb>` and hands a clone of it to each
//! repository and to the aggregator. The `*_from_fields` methods run a raw
//! payload through input coercion before calling the repository.

use std::sync::Arc;

use quiz_config::DatabaseConfig;
use quiz_core::responses::ImportSummary;
use serde_json::Value;

use crate::QuizDb;
use crate::aggregate::Aggregator;
use crate::error::DatabaseError;
use crate::import::QuizDocument;
use crate::input::{AnswerFields, Fields, QuestionFields, QuizFields};
use crate::repos::{AnswerRepo, QuestionRepo, QuizRepo};

#[derive(Clone)]
pub struct QuizService {
    db: Arc<QuizDb>,
    quizzes: QuizRepo,
    questions: QuestionRepo,
    answers: AnswerRepo,
    aggregator: Aggregator,
}

impl QuizService {
    /// Open the configured database and build the service around it.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        Ok(Self::from_db(Arc::new(QuizDb::open(config).await?)))
    }

    /// Open a local database file, or `":memory:"`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn new_local(path: &str) -> Result<Self, DatabaseError> {
        Ok(Self::from_db(Arc::new(QuizDb::open_local(path).await?)))
    }

    #[must_use]
    pub fn from_db(db: Arc<QuizDb>) -> Self {
        let quizzes = QuizRepo::new(Arc::clone(&db));
        let questions = QuestionRepo::new(Arc::clone(&db));
        let answers = AnswerRepo::new(Arc::clone(&db));
        let aggregator = Aggregator::new(quizzes.clone(), questions.clone(), answers.clone());
        Self {
            db,
            quizzes,
            questions,
            answers,
            aggregator,
        }
    }

    #[must_use]
    pub fn db(&self) -> &QuizDb {
        &self.db
    }

    #[must_use]
    pub const fn quizzes(&self) -> &QuizRepo {
        &self.quizzes
    }

    #[must_use]
    pub const fn questions(&self) -> &QuestionRepo {
        &self.questions
    }

    #[must_use]
    pub const fn answers(&self) -> &AnswerRepo {
        &self.answers
    }

    #[must_use]
    pub const fn aggregator(&self) -> &Aggregator {
        &self.aggregator
    }

    // -- payload entry points --

    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` for an invalid payload, or a
    /// storage error from the insert.
    pub async fn create_quiz(&self, fields: Fields) -> Result<i64, DatabaseError> {
        let new = QuizFields::from_map(fields)?.into_new()?;
        self.quizzes.create(&new).await
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` for an invalid or empty payload.
    pub async fn update_quiz(&self, id: i64, fields: Fields) -> Result<(), DatabaseError> {
        let update = QuizFields::from_map(fields)?.into_update()?;
        self.quizzes.update(id, &update).await
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` for an invalid payload, or a
    /// storage error from the insert.
    pub async fn create_question(&self, fields: Fields) -> Result<i64, DatabaseError> {
        let new = QuestionFields::from_map(fields)?.into_new()?;
        self.questions.create(&new).await
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` for an invalid or empty payload.
    pub async fn update_question(&self, id: i64, fields: Fields) -> Result<(), DatabaseError> {
        let update = QuestionFields::from_map(fields)?.into_update()?;
        self.questions.update(id, &update).await
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` for an invalid payload, or a
    /// storage error from the insert.
    pub async fn create_answer(&self, fields: Fields) -> Result<i64, DatabaseError> {
        let new = AnswerFields::from_map(fields)?.into_new()?;
        self.answers.create(&new).await
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` for an invalid or empty payload.
    pub async fn update_answer(&self, id: i64, fields: Fields) -> Result<(), DatabaseError> {
        let update = AnswerFields::from_map(fields)?.into_update()?;
        self.answers.update(id, &update).await
    }

    /// Validate and insert a nested quiz document.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` before any write if an element is
    /// invalid, or a storage error if the transaction fails.
    pub async fn import_document(&self, document: Value) -> Result<ImportSummary, DatabaseError> {
        let document = QuizDocument::parse(document)?;
        document.insert(&self.db).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::test_support::helpers::test_service;

    fn fields(value: Value) -> Fields {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[tokio::test]
    async fn create_quiz_from_fields_applies_defaults() {
        let svc = test_service().await;
        let id = svc
            .create_quiz(fields(json!({ "title": "T", "unknown": 1 })))
            .await
            .unwrap();

        let quiz = svc.quizzes().get_by_id(id).await.unwrap();
        assert_eq!(quiz.title, "T");
        assert_eq!(quiz.description, "");
    }

    #[tokio::test]
    async fn create_question_accepts_string_parent_reference() {
        let svc = test_service().await;
        let quiz_id = svc
            .create_quiz(fields(json!({ "title": "T" })))
            .await
            .unwrap();

        let id = svc
            .create_question(fields(json!({
                "quiz_id": quiz_id.to_string(),
                "text": "Q?",
                "type": "free_text"
            })))
            .await
            .unwrap();

        let question = svc.questions().get_by_id(id).await.unwrap();
        assert_eq!(question.quiz_id, quiz_id);
        assert_eq!(question.question, "Q?");
        assert_eq!(question.order_num, 0);
    }

    #[tokio::test]
    async fn update_with_only_unknown_fields_is_rejected() {
        let svc = test_service().await;
        let id = svc
            .create_quiz(fields(json!({ "title": "T" })))
            .await
            .unwrap();

        let err = svc
            .update_quiz(id, fields(json!({ "id": 5, "bogus": true })))
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::Validation(ref m) if m == "no valid fields to update"));
    }

    #[tokio::test]
    async fn create_answer_requires_parent() {
        let svc = test_service().await;
        let err = svc
            .create_answer(fields(json!({ "answer": "A" })))
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::Validation(ref m) if m == "question_id is required"));
    }

    #[tokio::test]
    async fn import_rejects_before_writing() {
        let svc = test_service().await;
        let err = svc
            .import_document(json!({
                "title": "Half valid",
                "questions": [{ "question": "Q?", "type": "" }]
            }))
            .await
            .unwrap_err();

        assert!(matches!(err, DatabaseError::Validation(_)));
        assert!(svc.quizzes().list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn service_is_shareable_across_tasks() {
        let svc = test_service().await;
        let handle = {
            let svc = svc.clone();
            tokio::spawn(async move { svc.create_quiz(fields(json!({ "title": "bg" }))).await })
        };
        let id = handle.await.unwrap().unwrap();
        assert_eq!(svc.quizzes().get_by_id(id).await.unwrap().title, "bg");
    }
}
