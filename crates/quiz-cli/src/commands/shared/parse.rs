use quiz_db::error::DatabaseError;
use quiz_db::input::Fields;
use serde_json::Value;

/// Parse a `--data` argument into a field map.
///
/// Malformed or non-object input is a validation error like any other bad
/// payload.
pub fn parse_fields(raw: &str) -> Result<Fields, DatabaseError> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|error| DatabaseError::Validation(format!("invalid --data JSON: {error}")))?;
    match value {
        Value::Object(fields) => Ok(fields),
        other => Err(DatabaseError::Validation(format!(
            "--data must be a JSON object, got {}",
            kind_of(&other)
        ))),
    }
}

/// Set the parent reference from the positional id, replacing any value in
/// the payload.
pub fn with_parent(mut fields: Fields, key: &str, id: i64) -> Fields {
    fields.insert(key.to_string(), Value::from(id));
    fields
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quiz_db::error::ErrorKind;
    use serde_json::json;

    use super::{parse_fields, with_parent};

    #[test]
    fn parses_object() {
        let fields = parse_fields(r#"{"title":"T"}"#).expect("object should parse");
        assert_eq!(fields.get("title"), Some(&json!("T")));
    }

    #[test]
    fn rejects_non_object() {
        let err = parse_fields("[1, 2]").expect_err("should fail");
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.client_message(), "--data must be a JSON object, got an array");
    }

    #[test]
    fn rejects_malformed_json() {
        let err = parse_fields("{title:").expect_err("should fail");
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(err.client_message().starts_with("invalid --data JSON"));
    }

    #[test]
    fn parent_from_path_wins() {
        let fields = parse_fields(r#"{"quiz_id": 9, "text": "Q"}"#).expect("parse");
        let fields = with_parent(fields, "quiz_id", 2);
        assert_eq!(fields.get("quiz_id"), Some(&json!(2)));
    }
}
