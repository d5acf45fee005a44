//! Question update builder.

use super::PartialUpdate;

/// Updatable question fields. The quiz reference is fixed at creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionUpdate {
    pub question: Option<String>,
    pub kind: Option<String>,
    pub order_num: Option<u32>,
}

impl PartialUpdate for QuestionUpdate {
    const TABLE: &'static str = "questions";
    const COLUMNS: &'static [&'static str] = &["question", "type", "order_num"];

    fn value(&self, column: &str) -> Option<libsql::Value> {
        match column {
            "question" => self.question.as_deref().map(libsql::Value::from),
            "type" => self.kind.as_deref().map(libsql::Value::from),
            "order_num" => self.order_num.map(|n| libsql::Value::Integer(i64::from(n))),
            _ => None,
        }
    }
}

pub struct QuestionUpdateBuilder(QuestionUpdate);

impl QuestionUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(QuestionUpdate::default())
    }

    #[must_use]
    pub fn question(mut self, question: impl Into<String>) -> Self {
        self.0.question = Some(question.into());
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.0.kind = Some(kind.into());
        self
    }

    #[must_use]
    pub const fn order_num(mut self, order_num: u32) -> Self {
        self.0.order_num = Some(order_num);
        self
    }

    #[must_use]
    pub fn build(self) -> QuestionUpdate {
        self.0
    }
}

impl Default for QuestionUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::updates::assigned_columns;

    #[test]
    fn all_columns_in_whitelist_order() {
        let built = QuestionUpdateBuilder::new()
            .order_num(4)
            .kind("true_false")
            .question("Q")
            .build()
            .to_statement(12)
            .unwrap();
        assert_eq!(
            built.sql,
            "UPDATE questions SET question = ?1, type = ?2, order_num = ?3 WHERE id = ?4"
        );
        assert_eq!(built.params.len(), QuestionUpdate::COLUMNS.len() + 1);
        assert_eq!(assigned_columns(&built), QuestionUpdate::COLUMNS);
    }
}
