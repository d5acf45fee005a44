//! Lenient per-field coercers for untyped payload values.
//!
//! Each coercer accepts exactly one JSON shape (plus the narrowing rules
//! below) and maps every other shape to `None`, which the caller treats as an
//! absent field. Used through `#[serde(deserialize_with = "...")]`.
//!
//! - identities: integer, integral float, or a decimal string; must be > 0
//! - integers: integer or integral float; strings are not converted
//! - text: string only
//! - flags: boolean only

use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

pub fn id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(as_id(&Value::deserialize(deserializer)?))
}

pub fn integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(as_integer(&Value::deserialize(deserializer)?))
}

pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

pub fn flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_bool())
}

/// Coerce a reference or identity value.
///
/// Decimal strings are the one text shape converted, so a boundary can
/// inject a path parameter without re-typing it.
#[must_use]
pub fn as_id(value: &Value) -> Option<i64> {
    let id = match value {
        Value::String(s) => s.trim().parse::<i64>().ok(),
        other => as_integer(other),
    }?;
    (id > 0).then_some(id)
}

/// Coerce a general JSON number to an integer.
#[must_use]
pub fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => narrow(n),
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn narrow(n: &Number) -> Option<i64> {
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    if n.is_u64() {
        return None;
    }
    let f = n.as_f64()?;
    let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
    (f.fract() == 0.0 && in_range).then(|| f as i64)
}
