//! Read-side composition of a parent entity with its children.
//!
//! The parent is fetched first; a missing parent ends the read before the
//! children are touched. A failing child fetch does not fail the read.
//! It is captured in [`Composed::ChildrenUnavailable`] and the caller picks
//! [`Composed::degrade`] or [`Composed::into_strict`].
//!
//! The two fetches are separate statements with no surrounding transaction.

use std::future::Future;

use quiz_core::entities::{Answer, Question, Quiz};

use crate::error::DatabaseError;
use crate::repos::{AnswerRepo, QuestionRepo, QuizRepo};

/// Outcome of a parent-plus-children read.
#[derive(Debug)]
pub enum Composed<P, C> {
    Complete { parent: P, children: Vec<C> },
    ChildrenUnavailable { parent: P, error: DatabaseError },
}

impl<P, C> Composed<P, C> {
    pub const fn parent(&self) -> &P {
        match self {
            Self::Complete { parent, .. } | Self::ChildrenUnavailable { parent, .. } => parent,
        }
    }

    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete { .. })
    }

    /// Keep the parent and drop an unavailable child list.
    ///
    /// The swallowed error is logged at `warn`.
    pub fn degrade(self) -> (P, Option<Vec<C>>) {
        match self {
            Self::Complete { parent, children } => (parent, Some(children)),
            Self::ChildrenUnavailable { parent, error } => {
                tracing::warn!(%error, "children unavailable, returning parent only");
                (parent, None)
            }
        }
    }

    /// # Errors
    ///
    /// Returns the child fetch error if the children were unavailable.
    pub fn into_strict(self) -> Result<(P, Vec<C>), DatabaseError> {
        match self {
            Self::Complete { parent, children } => Ok((parent, children)),
            Self::ChildrenUnavailable { error, .. } => Err(error),
        }
    }
}

/// Fetch a parent, then its children.
///
/// # Errors
///
/// Returns the parent fetch error unchanged. Child errors never surface here.
pub async fn compose<P, C, PF, CF>(
    parent: PF,
    children: impl FnOnce() -> CF,
) -> Result<Composed<P, C>, DatabaseError>
where
    PF: Future<Output = Result<P, DatabaseError>>,
    CF: Future<Output = Result<Vec<C>, DatabaseError>>,
{
    let parent = parent.await?;
    Ok(match children().await {
        Ok(children) => Composed::Complete { parent, children },
        Err(error) => Composed::ChildrenUnavailable { parent, error },
    })
}

/// Nested reads over the three repositories.
#[derive(Clone)]
pub struct Aggregator {
    quizzes: QuizRepo,
    questions: QuestionRepo,
    answers: AnswerRepo,
}

impl Aggregator {
    #[must_use]
    pub const fn new(quizzes: QuizRepo, questions: QuestionRepo, answers: AnswerRepo) -> Self {
        Self {
            quizzes,
            questions,
            answers,
        }
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` (or a storage error) from the quiz
    /// fetch.
    pub async fn quiz_with_questions(
        &self,
        id: i64,
    ) -> Result<Composed<Quiz, Question>, DatabaseError> {
        compose(self.quizzes.get_by_id(id), || self.questions.get_by_quiz(id)).await
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` (or a storage error) from the
    /// question fetch.
    pub async fn question_with_answers(
        &self,
        id: i64,
    ) -> Result<Composed<Question, Answer>, DatabaseError> {
        compose(self.questions.get_by_id(id), || {
            self.answers.get_by_question(id)
        })
        .await
    }
}
