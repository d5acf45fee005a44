//! Storage connection configuration.

use serde::{Deserialize, Serialize};

fn default_name() -> String {
    String::from("quizdb")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Logical database name. The local file defaults to `<name>.db`.
    #[serde(default = "default_name")]
    pub name: String,

    /// Explicit local database path (`:memory:` for an ephemeral store).
    #[serde(default)]
    pub path: String,

    /// Remote libSQL URL (e.g., `libsql://quiz.example.io`).
    #[serde(default)]
    pub url: String,

    /// Auth token for the remote URL.
    #[serde(default)]
    pub auth_token: String,

    /// Enable storage-engine foreign-key enforcement. When on, creating a
    /// child for a missing parent and deleting a parent that still has
    /// children both fail with a storage error.
    #[serde(default)]
    pub foreign_keys: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            path: String::new(),
            url: String::new(),
            auth_token: String::new(),
            foreign_keys: false,
        }
    }
}

impl DatabaseConfig {
    /// Local-only config for the given path.
    #[must_use]
    pub fn local(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Whether a remote libSQL endpoint is configured.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        !self.url.is_empty() && !self.auth_token.is_empty()
    }

    /// Path of the local database file.
    #[must_use]
    pub fn local_path(&self) -> String {
        if self.path.is_empty() {
            format!("{}.db", self.name)
        } else {
            self.path.clone()
        }
    }
}
