use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A named collection of questions.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Quiz {
    pub id: i64,
    pub title: String,
    pub description: String,
}
