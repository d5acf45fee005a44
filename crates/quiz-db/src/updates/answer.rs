//! Answer update builder.

use super::PartialUpdate;

/// Updatable answer fields. The question reference is fixed at creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerUpdate {
    pub answer: Option<String>,
    pub is_correct: Option<bool>,
}

impl PartialUpdate for AnswerUpdate {
    const TABLE: &'static str = "answers";
    const COLUMNS: &'static [&'static str] = &["answer", "is_correct"];

    fn value(&self, column: &str) -> Option<libsql::Value> {
        match column {
            "answer" => self.answer.as_deref().map(libsql::Value::from),
            "is_correct" => self
                .is_correct
                .map(|flag| libsql::Value::Integer(i64::from(flag))),
            _ => None,
        }
    }
}

pub struct AnswerUpdateBuilder(AnswerUpdate);

impl AnswerUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(AnswerUpdate::default())
    }

    #[must_use]
    pub fn answer(mut self, answer: impl Into<String>) -> Self {
        self.0.answer = Some(answer.into());
        self
    }

    #[must_use]
    pub const fn is_correct(mut self, is_correct: bool) -> Self {
        self.0.is_correct = Some(is_correct);
        self
    }

    #[must_use]
    pub fn build(self) -> AnswerUpdate {
        self.0
    }
}

impl Default for AnswerUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
