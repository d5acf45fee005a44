use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A candidate answer to a question.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Answer {
    pub id: i64,
    pub question_id: i64,
    pub answer: String,
    pub is_correct: bool,
}
