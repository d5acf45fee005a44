//! Quiz update builder.

use super::PartialUpdate;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl PartialUpdate for QuizUpdate {
    const TABLE: &'static str = "quizzes";
    const COLUMNS: &'static [&'static str] = &["title", "description"];

    fn value(&self, column: &str) -> Option<libsql::Value> {
        match column {
            "title" => self.title.as_deref().map(libsql::Value::from),
            "description" => self.description.as_deref().map(libsql::Value::from),
            _ => None,
        }
    }
}

pub struct QuizUpdateBuilder(QuizUpdate);

impl QuizUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(QuizUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.0.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn build(self) -> QuizUpdate {
        self.0
    }
}

impl Default for QuizUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
