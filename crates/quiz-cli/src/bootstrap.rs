use quiz_config::QuizConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration (with `.env`) and apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<QuizConfig> {
    let mut config = QuizConfig::load_with_dotenv()?;
    apply_overrides(&mut config, flags);
    Ok(config)
}

fn apply_overrides(config: &mut QuizConfig, flags: &GlobalFlags) {
    if let Some(path) = &flags.database {
        // An explicit file always means local mode
        config.database.path.clone_from(path);
        config.database.url.clear();
    }
}
