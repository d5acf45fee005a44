use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A question belonging to a quiz.
///
/// `kind` is a free-form tag such as `"multiple_choice"` or `"true_false"`;
/// it does not constrain the answers attached to the question.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Question {
    pub id: i64,
    pub quiz_id: i64,
    pub question: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Display position within the quiz. Not unique.
    pub order_num: u32,
}
