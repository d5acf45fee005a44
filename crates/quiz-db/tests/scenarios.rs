//! End-to-end scenarios over a fresh in-memory store.
//!
//! - Create / get / update / delete through the payload entry points
//! - Nested reads with and without child failures
//! - Orphans left behind by deletes
//! - Rejected updates leave rows unchanged

use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use quiz_core::entities::{Answer, Quiz};
use quiz_core::enums::EntityKind;
use quiz_core::responses::{QuestionView, QuizView};
use quiz_db::aggregate::Composed;
use quiz_db::error::{DatabaseError, ErrorKind};
use quiz_db::input::Fields;
use quiz_db::service::QuizService;

async fn test_service() -> QuizService {
    QuizService::new_local(":memory:").await.unwrap()
}

fn fields(value: Value) -> Fields {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

/// Quiz 1 with question 1 and four answers, one of them correct.
async fn seeded() -> (QuizService, Vec<i64>) {
    let svc = test_service().await;
    let quiz_id = svc
        .create_quiz(fields(json!({ "title": "T", "description": "D" })))
        .await
        .unwrap();
    let question_id = svc
        .create_question(fields(json!({
            "quiz_id": quiz_id,
            "text": "Q1",
            "type": "multiple_choice",
            "order_num": 1
        })))
        .await
        .unwrap();

    let mut answer_ids = Vec::new();
    for (i, label) in ["A", "B", "C", "D"].iter().enumerate() {
        let id = svc
            .create_answer(fields(json!({
                "question_id": question_id,
                "answer": label,
                "is_correct": i == 2
            })))
            .await
            .unwrap();
        answer_ids.push(id);
    }
    (svc, answer_ids)
}

// ---------------------------------------------------------------------------
// Concrete scenarios
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_then_get_quiz() {
    let svc = test_service().await;
    let id = svc
        .create_quiz(fields(json!({ "title": "T", "description": "D" })))
        .await
        .unwrap();
    assert_eq!(id, 1);

    let quiz = svc.quizzes().get_by_id(1).await.unwrap();
    assert_eq!(
        quiz,
        Quiz {
            id: 1,
            title: "T".into(),
            description: "D".into(),
        }
    );
}

#[tokio::test]
async fn question_embeds_its_answers() {
    let (svc, answer_ids) = seeded().await;

    let (question, answers) = svc
        .aggregator()
        .question_with_answers(1)
        .await
        .unwrap()
        .into_strict()
        .unwrap();
    assert_eq!(question.question, "Q1");
    assert_eq!(question.kind, "multiple_choice");
    assert_eq!(answers.iter().map(|a| a.id).collect::<Vec<_>>(), answer_ids);
    assert_eq!(answers.iter().filter(|a| a.is_correct).count(), 1);

    let view = QuestionView::new(question, Some(answers));
    let rendered = serde_json::to_value(&view).unwrap();
    assert_eq!(rendered["question"]["type"], "multiple_choice");
    assert_eq!(rendered["answers"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn partial_update_keeps_other_fields() {
    let (svc, _) = seeded().await;

    svc.update_quiz(1, fields(json!({ "description": "D2" })))
        .await
        .unwrap();

    let quiz = svc.quizzes().get_by_id(1).await.unwrap();
    assert_eq!(quiz.title, "T");
    assert_eq!(quiz.description, "D2");
}

#[tokio::test]
async fn deleting_question_orphans_answers() {
    let (svc, answer_ids) = seeded().await;

    svc.questions().delete(1).await.unwrap();
    let err = svc.questions().get_by_id(1).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.client_message(), "Question not found");

    for id in answer_ids {
        let answer: Answer = svc.answers().get_by_id(id).await.unwrap();
        assert_eq!(answer.question_id, 1);
    }
}

#[tokio::test]
async fn rejected_updates_change_nothing() {
    let (svc, answer_ids) = seeded().await;
    let before = svc.answers().get_by_id(answer_ids[0]).await.unwrap();

    for payload in [json!({}), json!({ "question_id": 9, "colour": "red" })] {
        let err = svc
            .update_answer(answer_ids[0], fields(payload))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    let after = svc.answers().get_by_id(answer_ids[0]).await.unwrap();
    assert_eq!(before, after);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[tokio::test]
async fn created_rows_match_validated_input() {
    let svc = test_service().await;
    let quiz_id = svc
        .create_quiz(fields(json!({ "title": "Only title" })))
        .await
        .unwrap();
    assert_eq!(quiz_id, 1);
    // Integral floats narrow to integers
    let question_id = svc
        .create_question(fields(json!({
            "quiz_id": 1.0,
            "question_text": "Q",
            "type": "free_text"
        })))
        .await
        .unwrap();
    let answer_id = svc
        .create_answer(fields(json!({
            "question_id": question_id.to_string(),
            "answer_text": "A"
        })))
        .await
        .unwrap();

    assert_eq!(svc.quizzes().get_by_id(quiz_id).await.unwrap().description, "");
    let question = svc.questions().get_by_id(question_id).await.unwrap();
    assert_eq!((question.quiz_id, question.order_num), (quiz_id, 0));
    let answer = svc.answers().get_by_id(answer_id).await.unwrap();
    assert_eq!(answer.answer, "A");
    assert!(!answer.is_correct);
}

#[tokio::test]
async fn repeated_partial_update_is_idempotent() {
    let (svc, _) = seeded().await;
    let payload = json!({ "question": "Q1 revised", "order_num": 4 });

    svc.update_question(1, fields(payload.clone())).await.unwrap();
    let once = svc.questions().get_by_id(1).await.unwrap();
    svc.update_question(1, fields(payload)).await.unwrap();
    let twice = svc.questions().get_by_id(1).await.unwrap();

    assert_eq!(once, twice);
    assert_eq!(once.kind, "multiple_choice");
    assert_eq!(once.order_num, 4);
}

#[tokio::test]
async fn delete_then_get_is_not_found_for_every_entity() {
    let (svc, answer_ids) = seeded().await;

    svc.answers().delete(answer_ids[0]).await.unwrap();
    svc.quizzes().delete(1).await.unwrap();

    assert!(matches!(
        svc.answers().get_by_id(answer_ids[0]).await,
        Err(DatabaseError::NotFound {
            entity: EntityKind::Answer,
            ..
        })
    ));
    assert!(matches!(
        svc.aggregator().quiz_with_questions(1).await,
        Err(DatabaseError::NotFound {
            entity: EntityKind::Quiz,
            id: 1
        })
    ));
}

#[tokio::test]
async fn questions_come_back_in_position_order() {
    let svc = test_service().await;
    let quiz_id = svc
        .create_quiz(fields(json!({ "title": "Ordered" })))
        .await
        .unwrap();
    for order_num in [5, 0, 3, 3, 1] {
        svc.create_question(fields(json!({
            "quiz_id": quiz_id,
            "question": format!("at {order_num}"),
            "type": "free_text",
            "order_num": order_num
        })))
        .await
        .unwrap();
    }

    let positions: Vec<u32> = svc
        .questions()
        .get_by_quiz(quiz_id)
        .await
        .unwrap()
        .iter()
        .map(|q| q.order_num)
        .collect();
    assert_eq!(positions, vec![0, 1, 3, 3, 5]);
}

#[tokio::test]
async fn both_nested_reads_degrade_to_parent() {
    let (svc, _) = seeded().await;
    svc.db()
        .conn()
        .execute("DROP TABLE answers", ())
        .await
        .unwrap();

    let composed = svc.aggregator().question_with_answers(1).await.unwrap();
    assert!(matches!(composed, Composed::ChildrenUnavailable { .. }));
    let (question, answers) = composed.degrade();
    let rendered = serde_json::to_value(QuestionView::new(question, answers)).unwrap();
    assert_eq!(rendered["question"], "Q1");
    assert!(rendered.get("answers").is_none());

    svc.db()
        .conn()
        .execute("DROP TABLE questions", ())
        .await
        .unwrap();
    let composed = svc.aggregator().quiz_with_questions(1).await.unwrap();
    let strict = svc
        .aggregator()
        .quiz_with_questions(1)
        .await
        .unwrap()
        .into_strict()
        .unwrap_err();
    assert_eq!(strict.kind(), ErrorKind::Storage);
    assert_eq!(strict.client_message(), "storage failure");

    let (quiz, questions) = composed.degrade();
    let view = QuizView::new(quiz, questions);
    assert_eq!(view.quiz().title, "T");
    assert!(matches!(view, QuizView::QuizOnly(_)));
}

#[tokio::test]
async fn enforced_foreign_keys_surface_as_storage_errors() {
    let config = quiz_config::DatabaseConfig {
        foreign_keys: true,
        ..quiz_config::DatabaseConfig::local(":memory:")
    };
    let svc = QuizService::open(&config).await.unwrap();

    let err = svc
        .create_question(fields(json!({
            "quiz_id": 77,
            "question": "dangling",
            "type": "free_text"
        })))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Storage);
}

#[tokio::test]
async fn concurrent_reads_and_writes_share_one_handle() {
    let (svc, _) = seeded().await;

    let (quiz, created, listed) = tokio::join!(
        svc.aggregator().quiz_with_questions(1),
        svc.create_quiz(fields(json!({ "title": "second" }))),
        svc.quizzes().list(),
    );

    assert!(quiz.unwrap().is_complete());
    let created = created.unwrap();
    assert!(created > 1);
    assert!(!listed.unwrap().is_empty());
}

#[tokio::test]
async fn import_document_is_readable_through_aggregator() {
    let svc = test_service().await;
    let summary = svc
        .import_document(json!({
            "title": "Imported",
            "questions": [
                {
                    "question_text": "Pick one",
                    "type": "multiple_choice",
                    "answers": [
                        { "answer_text": "yes", "is_correct": true },
                        { "answer_text": "no" }
                    ]
                }
            ]
        }))
        .await
        .unwrap();
    assert_eq!((summary.questions, summary.answers), (1, 2));

    let (quiz, questions) = svc
        .aggregator()
        .quiz_with_questions(summary.quiz_id)
        .await
        .unwrap()
        .into_strict()
        .unwrap();
    assert_eq!(quiz.title, "Imported");
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].order_num, 0);
}
