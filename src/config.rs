use std::path::PathBuf;

use crate::selection::DEFAULT_LIMIT;

pub const DEFAULT_OUTPUT_FILE: &str = "ranking.md";

// Serializable, comparable, explicit defaults.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RankingConfig {
    pub limit: usize,
    pub output_path: PathBuf,
}

impl RankingConfig {
    pub fn v0() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self::v0()
    }
}
