use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Number of items a ranking keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Limit(usize);

impl Limit {
    pub const fn new(limit: usize) -> Self {
        Limit(limit)
    }

    /// Negative counts clamp to zero.
    pub fn from_signed(limit: i64) -> Self {
        Limit(usize::try_from(limit).unwrap_or(0))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for Limit {
    fn from(limit: usize) -> Self {
        Limit(limit)
    }
}

/// Content hash of rendered ranking text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RenderDigest(String);

impl RenderDigest {
    pub fn from_text(text: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(text.as_bytes());

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        RenderDigest(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RenderDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
