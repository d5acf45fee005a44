//! # quiz-config
//!
//! Layered configuration loading for the quiz store using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`QUIZ_*` prefix, `__` as separator)
//! 2. Legacy `DB_NAME` environment variable (maps to `database.name`)
//! 3. Project-level `quiz.toml`
//! 4. User-level `~/.config/quiz/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `QUIZ_DATABASE__PATH` -> `database.path`,
//! `QUIZ_GENERAL__STRICT_READS` -> `general.strict_reads`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use quiz_config::QuizConfig;
//!
//! let config = QuizConfig::load_with_dotenv().expect("config");
//! println!("database file: {}", config.database.local_path());
//! ```

mod database;
mod error;
mod general;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name of the project-local config.
pub const PROJECT_CONFIG_FILE: &str = "quiz.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct QuizConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl QuizConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a provider fails or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a provider fails or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(PROJECT_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: legacy deployment variable
        figment = figment.merge(
            Env::raw()
                .only(&["DB_NAME"])
                .map(|_| "database.name".into()),
        );

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed("QUIZ_").split("__"))
    }

    /// Reject values that cannot produce a usable connection.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.path.is_empty() && self.database.name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.name".into(),
                reason: "must not be empty when database.path is unset".into(),
            });
        }
        if !self.database.url.is_empty()
            && !["libsql://", "http://", "https://"]
                .iter()
                .any(|scheme| self.database.url.starts_with(scheme))
        {
            return Err(ConfigError::InvalidValue {
                field: "database.url".into(),
                reason: format!("unsupported scheme in '{}'", self.database.url),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("quiz").join("config.toml"))
    }
}
