//! Shared test utilities for quiz-db unit tests.

pub(crate) mod helpers {
    use std::sync::Arc;

    use quiz_core::entities::{Question, Quiz};

    use crate::QuizDb;
    use crate::input::{NewAnswer, NewQuestion, NewQuiz};
    use crate::service::QuizService;

    /// Open an in-memory database with migrations applied.
    pub async fn test_db() -> QuizDb {
        QuizDb::open_local(":memory:").await.unwrap()
    }

    /// Create an in-memory service (foreign keys off).
    pub async fn test_service() -> QuizService {
        QuizService::from_db(Arc::new(test_db().await))
    }

    /// Insert a quiz and return it as stored.
    pub async fn seed_quiz(svc: &QuizService, title: &str) -> Quiz {
        let id = svc
            .quizzes()
            .create(&NewQuiz {
                title: title.to_string(),
                description: String::new(),
            })
            .await
            .unwrap();
        svc.quizzes().get_by_id(id).await.unwrap()
    }

    /// Insert a multiple-choice question at `order_num` and return it.
    pub async fn seed_question(svc: &QuizService, quiz_id: i64, order_num: u32) -> Question {
        let id = svc
            .questions()
            .create(&NewQuestion {
                quiz_id,
                question: format!("Question at {order_num}"),
                kind: "multiple_choice".into(),
                order_num,
            })
            .await
            .unwrap();
        svc.questions().get_by_id(id).await.unwrap()
    }

    /// Insert an answer and return its id.
    pub async fn seed_answer(svc: &QuizService, question_id: i64, is_correct: bool) -> i64 {
        svc.answers()
            .create(&NewAnswer {
                question_id,
                answer: format!("answer (correct: {is_correct})"),
                is_correct,
            })
            .await
            .unwrap()
    }

    /// Drop a table so reads against it fail with a storage error.
    pub async fn break_table(svc: &QuizService, table: &str) {
        svc.db()
            .conn()
            .execute(&format!("DROP TABLE {table}"), ())
            .await
            .unwrap();
    }
}
