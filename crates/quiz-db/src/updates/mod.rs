//! Partial-update statement building.
//!
//! Each entity has an update struct with `Option` fields. Only `Some` fields
//! generate SET clauses, appended in the entity's fixed whitelist order. The
//! placeholder for each clause is the length of the parameter vector after
//! the value is pushed, so numbering is plain decimal with no upper bound.
//! The identity is always the final parameter.

pub mod answer;
pub mod question;
pub mod quiz;

use crate::error::DatabaseError;

/// An entity update that knows its table and updatable columns.
pub trait PartialUpdate {
    /// Target table.
    const TABLE: &'static str;

    /// Updatable columns, in the order clauses are emitted.
    const COLUMNS: &'static [&'static str];

    /// Value to bind for `column`, or `None` when that field is absent.
    fn value(&self, column: &str) -> Option<libsql::Value>;

    /// Append a clause for every present field, walking `COLUMNS` in order.
    fn apply(&self, statement: &mut UpdateStatement) {
        for column in Self::COLUMNS {
            if let Some(value) = self.value(column) {
                statement.set(column, value);
            }
        }
    }

    /// Build the statement for row `id`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` if no field is present.
    fn to_statement(&self, id: i64) -> Result<BuiltUpdate, DatabaseError> {
        let mut statement = UpdateStatement::new(Self::TABLE);
        self.apply(&mut statement);
        statement.finish(id)
    }
}

/// Accumulates `column = ?N` clauses and their bound values.
#[derive(Debug)]
pub struct UpdateStatement {
    table: &'static str,
    sets: Vec<String>,
    params: Vec<libsql::Value>,
}

/// A finished `UPDATE` ready to execute.
#[derive(Debug)]
pub struct BuiltUpdate {
    pub sql: String,
    pub params: Vec<libsql::Value>,
}

impl UpdateStatement {
    #[must_use]
    pub const fn new(table: &'static str) -> Self {
        Self {
            table,
            sets: Vec::new(),
            params: Vec::new(),
        }
    }

    /// Bind `value` to the next positional parameter and assign it to `column`.
    pub fn set(&mut self, column: &str, value: impl Into<libsql::Value>) -> &mut Self {
        self.params.push(value.into());
        let idx = self.params.len();
        self.sets.push(format!("{column} = ?{idx}"));
        self
    }

    /// Number of SET clauses so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Close the statement with `WHERE id = ?N` bound to `id`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` if no clause was added.
    pub fn finish(mut self, id: i64) -> Result<BuiltUpdate, DatabaseError> {
        if self.sets.is_empty() {
            return Err(DatabaseError::validation("no valid fields to update"));
        }
        self.params.push(id.into());
        let idx = self.params.len();
        let sql = format!(
            "UPDATE {} SET {} WHERE id = ?{idx}",
            self.table,
            self.sets.join(", ")
        );
        Ok(BuiltUpdate {
            sql,
            params: self.params,
        })
    }
}

/// Column names assigned by a built statement, in SET order.
#[cfg(test)]
pub(crate) fn assigned_columns(built: &BuiltUpdate) -> Vec<&str> {
    let sets = built
        .sql
        .split(" SET ")
        .nth(1)
        .and_then(|rest| rest.split(" WHERE ").next())
        .unwrap_or_default();
    sets.split(", ")
        .filter_map(|clause| clause.split(" = ").next())
        .collect()
}
