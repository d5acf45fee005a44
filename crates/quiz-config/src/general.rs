//! General application configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Propagate child-fetch failures on composed reads instead of
    /// returning the parent alone.
    #[serde(default)]
    pub strict_reads: bool,
}
