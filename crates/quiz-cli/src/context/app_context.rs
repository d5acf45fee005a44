use anyhow::Context;
use quiz_config::QuizConfig;
use quiz_db::service::QuizService;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: QuizService,
    pub config: QuizConfig,
}

impl AppContext {
    /// Open the configured database. It stays open until the context drops.
    pub async fn init(config: QuizConfig) -> anyhow::Result<Self> {
        let service = QuizService::open(&config.database)
            .await
            .context("failed to open quiz database")?;
        Ok(Self { service, config })
    }

    /// Whether nested reads should fail when children cannot be read.
    #[must_use]
    pub const fn strict_reads(&self, requested: bool) -> bool {
        requested || self.config.general.strict_reads
    }
}

#[cfg(test)]
impl AppContext {
    /// In-memory context for handler tests.
    pub async fn in_memory() -> Self {
        let mut config = QuizConfig::default();
        config.database.path = String::from(":memory:");
        Self::init(config).await.expect("in-memory context")
    }
}
