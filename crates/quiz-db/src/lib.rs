//! # quiz-db
//!
//! libSQL storage for quiz content: quizzes, their questions, and each
//! question's answers.
//!
//! - [`input`] turns untyped field maps into typed, validated values
//! - [`updates`] builds parameterized partial `UPDATE` statements
//! - [`repos`] holds one repository per entity
//! - [`aggregate`] composes a parent with its children for nested reads
//! - [`service`] wires the repositories to one shared storage handle

pub mod aggregate;
pub mod error;
pub mod helpers;
pub mod import;
pub mod input;
mod migrations;
pub mod repos;
pub mod service;
pub mod updates;

#[cfg(test)]
pub(crate) mod test_support;

use error::DatabaseError;
use libsql::Builder;
use quiz_config::DatabaseConfig;
use tokio::sync::{Mutex, MutexGuard};

/// Central database handle shared by every repository.
///
/// Wraps a libSQL database and its single connection. Opened once per
/// process; dropping the last owner releases both.
///
/// Every write goes through [`QuizDb::write_gate`]. A transaction on the
/// shared connection would otherwise absorb writes issued by other tasks.
pub struct QuizDb {
    conn: libsql::Connection,
    /// Owns the engine (and for remote mode, the client) behind `conn`.
    /// Declared after `conn` so it is dropped after the connection.
    _db: libsql::Database,
    foreign_keys: bool,
    writes: Mutex<()>,
}

impl QuizDb {
    /// Open the database described by `config`.
    ///
    /// Connects to the remote endpoint when one is configured, otherwise to
    /// the local file. Runs migrations on every open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let db = if config.is_remote() {
            tracing::info!(url = %config.url, "opening remote database");
            Builder::new_remote(config.url.clone(), config.auth_token.clone())
                .build()
                .await?
        } else {
            let path = config.local_path();
            tracing::info!(%path, "opening local database");
            Builder::new_local(path).build().await?
        };
        Self::init(db, config.foreign_keys).await
    }

    /// Open a local-only database at the given path with foreign-key
    /// enforcement off.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        Self::open(&DatabaseConfig::local(path)).await
    }

    async fn init(db: libsql::Database, foreign_keys: bool) -> Result<Self, DatabaseError> {
        let conn = db.connect()?;

        // Per-connection in SQLite
        let pragma = if foreign_keys {
            "PRAGMA foreign_keys = ON"
        } else {
            "PRAGMA foreign_keys = OFF"
        };
        conn.execute(pragma, ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("{pragma}: {e}")))?;

        let quiz_db = Self {
            conn,
            _db: db,
            foreign_keys,
            writes: Mutex::new(()),
        };
        quiz_db.run_migrations().await?;
        Ok(quiz_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Serialize writers on the shared connection.
    ///
    /// Single-statement writes hold the guard for their statement; a
    /// transaction holds it from `BEGIN` until commit or rollback.
    pub async fn write_gate(&self) -> MutexGuard<'_, ()> {
        self.writes.lock().await
    }

    /// Whether the storage engine enforces foreign keys on this connection.
    #[must_use]
    pub const fn foreign_keys(&self) -> bool {
        self.foreign_keys
    }
}
