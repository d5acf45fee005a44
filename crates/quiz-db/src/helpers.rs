//! Row-to-entity parsing helpers.
//!
//! Every repo converts `libsql::Row` (column-indexed) into typed entity
//! structs. SQLite stores booleans and small integers as `INTEGER`, so the
//! narrowing lives here.

use quiz_core::enums::EntityKind;

use crate::error::DatabaseError;

/// Read an `INTEGER` column holding a non-negative 32-bit value.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the stored value is out of range.
pub fn get_u32(row: &libsql::Row, idx: i32) -> Result<u32, DatabaseError> {
    let raw = row.get::<i64>(idx)?;
    u32::try_from(raw)
        .map_err(|_| DatabaseError::Query(format!("column {idx}: {raw} is not a valid u32")))
}

/// Read an `INTEGER` column stored as `0`/`1`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` for any other stored value.
pub fn get_bool(row: &libsql::Row, idx: i32) -> Result<bool, DatabaseError> {
    match row.get::<i64>(idx)? {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(DatabaseError::Query(format!(
            "column {idx}: {other} is not a boolean"
        ))),
    }
}

/// Map `EntityKind` to the corresponding SQL table name.
#[must_use]
pub const fn entity_table(entity: EntityKind) -> &'static str {
    match entity {
        EntityKind::Quiz => "quizzes",
        EntityKind::Question => "questions",
        EntityKind::Answer => "answers",
    }
}

/// Collect every row of a query through `decode`.
///
/// # Errors
///
/// Returns the first libSQL or decoding error encountered.
pub async fn collect_rows<T>(
    mut rows: libsql::Rows,
    decode: impl Fn(&libsql::Row) -> Result<T, DatabaseError>,
) -> Result<Vec<T>, DatabaseError> {
    let mut out = Vec::new();
    while let Some(row) = rows.next().await? {
        out.push(decode(&row)?);
    }
    Ok(out)
}
