//! Repository modules implementing CRUD for each entity.
//!
//! Every repository holds the shared `QuizDb` handle and is cheap to clone.
//! Operations are stateless and reentrant; each is a single statement.

pub mod answer;
pub mod question;
pub mod quiz;

pub use answer::AnswerRepo;
pub use question::QuestionRepo;
pub use quiz::QuizRepo;

use quiz_core::enums::EntityKind;

use crate::error::DatabaseError;
use crate::helpers::entity_table;
use crate::updates::PartialUpdate;

/// Run an `INSERT ... RETURNING id` and return the assigned identity.
pub(crate) async fn insert_returning_id(
    conn: &libsql::Connection,
    sql: &str,
    params: impl libsql::params::IntoParams,
) -> Result<i64, DatabaseError> {
    let mut rows = conn.query(sql, params).await?;
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    Ok(row.get::<i64>(0)?)
}

/// Execute the partial update for row `id`.
///
/// A missing row is not an error; the update simply touches nothing.
pub(crate) async fn apply_update<U: PartialUpdate>(
    conn: &libsql::Connection,
    entity: EntityKind,
    id: i64,
    update: &U,
) -> Result<(), DatabaseError> {
    let built = update.to_statement(id)?;
    let changed = conn
        .execute(&built.sql, libsql::params_from_iter(built.params))
        .await?;
    tracing::debug!(%entity, id, changed, "updated");
    Ok(())
}

/// Delete row `id` unconditionally. Children are left in place.
pub(crate) async fn delete_row(
    conn: &libsql::Connection,
    entity: EntityKind,
    id: i64,
) -> Result<(), DatabaseError> {
    let removed = conn
        .execute(
            &format!("DELETE FROM {} WHERE id = ?1", entity_table(entity)),
            libsql::params![id],
        )
        .await?;
    tracing::debug!(%entity, id, removed, "deleted");
    Ok(())
}
